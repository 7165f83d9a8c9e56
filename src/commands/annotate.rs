use super::load_protocol;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Recompute the cached `gphr` and `zscore` fields and save the protocol,
/// in place unless `output` is given.
pub fn annotate_protocol(path: &Path, output: Option<&Path>) -> Result<()> {
    let mut protocol = load_protocol(path)?;
    protocol.annotate();

    let target = output.unwrap_or(path);
    protocol
        .save(target)
        .with_context(|| format!("Failed to save annotated protocol {}", target.display()))?;
    info!(path = %target.display(), rows = protocol.len(), "protocol annotated");
    Ok(())
}
