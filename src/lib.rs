// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod formatting;
pub mod io;
pub mod protocol;
pub mod scoring;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Card, Error, Response, Result, Scalar};

pub use crate::scoring::{
    calculate_rorschach, classify_gphr, d_table, determine_coping_style, zest_from_zf,
    CalculationResults, CopingStyle, HumanRepresentation, IndexOutcome,
};

pub use crate::strategy::{key_variable_strategies, tertiary_variable_strategies, SearchStrategy};

pub use crate::protocol::{validate_protocol, Protocol, ProtocolReport, ValidationConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, SummaryReport};
