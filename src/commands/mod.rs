//! CLI command implementations for rorscore operations.
//!
//! Available commands:
//! - **calculate**: Validate and score a protocol, then render the summary
//! - **validate**: Run the input checks only
//! - **strategies**: Print the interpretive search strategy
//! - **template**: Emit a blank or sample protocol
//! - **annotate**: Refresh the cached GHR/PHR and Z fields of a protocol
//! - **init**: Initialize a new rorscore configuration file

pub mod annotate;
pub mod calculate;
pub mod init;
pub mod strategies;
pub mod template;
pub mod validate;

pub use annotate::annotate_protocol;
pub use calculate::{calculate_protocol, CalculateConfig};
pub use init::init_config;
pub use strategies::{print_strategies, StrategiesConfig};
pub use template::write_template;
pub use validate::validate_protocol_file;

use crate::protocol::Protocol;
use anyhow::{Context, Result};
use std::path::Path;

pub(crate) fn load_protocol(path: &Path) -> Result<Protocol> {
    Protocol::load(path).with_context(|| format!("Failed to load protocol {}", path.display()))
}
