//! Errors raised while loading protocols and configuration.
//!
//! The scoring engine never fails; everything here belongs to the layers
//! around it.

use super::types::Card;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a protocol or config file failed
    #[error("{message}: {}", display_path(.path))]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A card field held something other than `""` or a roman numeral I..X
    #[error("Invalid card identifier: {0:?}")]
    InvalidCard(String),

    /// No response carries a card number
    #[error("Please enter at least one response with a card number.")]
    NoResponses,

    /// Some cards have no response at all
    #[error(
        "Missing responses for cards: {}. At least one response per card is required.",
        join_cards(.0)
    )]
    MissingCards(Vec<Card>),

    /// A config value outside its allowed range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An error wrapped with the operation that hit it
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed protocol JSON or a field of the wrong type
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Malformed config TOML
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map_or_else(|| "<unknown path>".to_string(), |p| p.display().to_string())
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create a file system error that keeps the underlying io error
    pub fn file_system_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Wrap the error message under `context`
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// `.context(..)` for library results, mirroring `anyhow::Context`
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
