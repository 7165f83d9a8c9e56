use super::load_protocol;
use crate::cli::setup::formatting_config;
use crate::config::resolve_config;
use crate::io::output::{create_writer, OutputFormat, SummaryReport};
use crate::io::output_destination;
use crate::protocol::validate_protocol;
use crate::scoring::calculate_rorschach;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub struct CalculateConfig {
    pub protocol: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub no_strategies: bool,
    pub config: Option<PathBuf>,
}

/// Validate, score and render one protocol.
pub fn calculate_protocol(config: CalculateConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let protocol = load_protocol(&config.protocol)?;

    let report = validate_protocol(&protocol, &settings.validation)
        .with_context(|| format!("Protocol {} cannot be scored", config.protocol.display()))?;
    info!(
        responses = report.valid_responses,
        skipped = report.unassigned_rows,
        "protocol validated"
    );

    let results = calculate_rorschach(protocol.responses());
    let mut summary = SummaryReport::new(results);
    if config.no_strategies || !settings.display.show_strategies {
        summary = summary.without_strategies();
    }

    let format = config.format.unwrap_or(settings.output.default_format);
    let formatting = formatting_config(&settings.display, config.plain);
    let destination = output_destination(config.output.as_deref())?;
    let mut writer = create_writer(format, destination, formatting);
    writer.write_report(&summary)?;

    if let Some(path) = &config.output {
        info!(path = %path.display(), ?format, "summary written");
    }
    Ok(())
}
