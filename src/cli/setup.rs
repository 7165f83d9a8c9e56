//! Runtime setup for the CLI: logging and output formatting.

use crate::config::DisplayConfig;
use crate::formatting::FormattingConfig;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides `-v`.
///
/// Events from the `log` facade are forwarded as well. Output goes to stderr
/// so it never mixes with a report written to stdout.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: logging already configured: {}", e);
    }
}

/// Terminal formatting from the environment, the config file and `--plain`.
pub fn formatting_config(display: &DisplayConfig, plain_flag: bool) -> FormattingConfig {
    if plain_flag || display.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(7), "trace");
    }

    #[test]
    fn plain_wins_over_environment() {
        let display = DisplayConfig::default();
        assert_eq!(formatting_config(&display, true), FormattingConfig::plain());

        let configured = DisplayConfig {
            plain: true,
            ..DisplayConfig::default()
        };
        assert_eq!(formatting_config(&configured, false), FormattingConfig::plain());
    }
}
