use super::load_protocol;
use crate::config::resolve_config;
use crate::protocol::validate_protocol;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Check a protocol and report its problems; blocking problems are errors.
pub fn validate_protocol_file(path: &Path, config: Option<&Path>) -> Result<()> {
    let settings = resolve_config(config)?;
    let protocol = load_protocol(path)?;
    let report = validate_protocol(&protocol, &settings.validation)?;

    println!(
        "{} {} responses across all cards",
        "✓".green(),
        report.valid_responses
    );
    if report.unassigned_rows > 0 {
        println!(
            "  {} rows without a card will be skipped",
            report.unassigned_rows
        );
    }
    for warning in &report.warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }
    Ok(())
}
