use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;
use crate::protocol::ValidationConfig;

/// Root configuration structure for rorscore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RorscoreConfig {
    /// Protocol validation thresholds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Display configuration for terminal output
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ASCII tables and no colors
    #[serde(default)]
    pub plain: bool,

    /// Append the interpretive search strategy to summaries
    #[serde(default = "default_show_strategies")]
    pub show_strategies: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            plain: false,
            show_strategies: default_show_strategies(),
        }
    }
}

fn default_show_strategies() -> bool {
    true
}

/// Contents written by `rorscore init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Rorscore Configuration

[validation]
# Protocols with fewer responses are flagged as possibly invalid
min_recommended_responses = 14
# Reject protocols where a card has no response
require_all_cards = true

[output]
# terminal, json or markdown
default_format = "terminal"

[display]
plain = false
show_strategies = true
"#;
