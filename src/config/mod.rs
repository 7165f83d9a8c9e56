mod core;
mod loader;

pub use self::core::{DisplayConfig, OutputConfig, RorscoreConfig, DEFAULT_CONFIG_TOML};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    resolve_config, CONFIG_FILE_NAME,
};
