use std::fs;
use std::path::{Path, PathBuf};

use super::core::RorscoreConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".rorscore.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    fs::read_to_string(path)
}

/// Parse a config from TOML text
pub fn parse_config(contents: &str) -> Result<RorscoreConfig> {
    let config = toml::from_str::<RorscoreConfig>(contents)?;
    if config.validation.min_recommended_responses == 0 {
        return Err(Error::Configuration(
            "validation.min_recommended_responses must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Try loading a discovered config file; problems are logged, not returned
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RorscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.rorscore.toml`
pub fn discover_config(start: PathBuf) -> RorscoreConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RorscoreConfig::default()
        })
}

pub fn load_config() -> RorscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RorscoreConfig::default()
        }
    }
}

/// Load a config named on the command line; any problem is an error
pub fn load_config_from(path: &Path) -> Result<RorscoreConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system_with_source("Failed to read config", path, e))?;
    parse_config(&contents).context(format!("Invalid config {}", path.display()))
}

/// Explicit path when given, discovery otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<RorscoreConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}
