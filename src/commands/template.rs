use crate::io::output_destination;
use crate::protocol::Protocol;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Write a blank protocol, one empty response per card, or the coded
/// sample protocol when `sample` is set.
pub fn write_template(output: Option<&Path>, sample: bool) -> Result<()> {
    let protocol = if sample {
        Protocol::sample()
    } else {
        Protocol::blank()
    };
    let json = protocol.to_json_pretty()?;
    let mut destination = output_destination(output)?;
    writeln!(destination, "{json}")?;
    destination.flush()?;
    if let Some(path) = output {
        tracing::info!(path = %path.display(), sample, "protocol template written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.json");
        write_template(Some(&path), false).unwrap();

        let protocol = Protocol::load(&path).unwrap();
        assert_eq!(protocol, Protocol::blank());
    }

    #[test]
    fn sample_template_is_scoreable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        write_template(Some(&path), true).unwrap();

        let protocol = Protocol::load(&path).unwrap();
        assert_eq!(protocol, Protocol::sample());
        assert_eq!(protocol.valid_responses().count(), 20);
        assert!(protocol.missing_cards().is_empty());
    }
}
