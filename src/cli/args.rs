use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rorscore")]
#[command(about = "Rorschach Comprehensive System structural summary calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a protocol and print its structural summary
    Calculate {
        /// Protocol file (JSON array of coded responses)
        protocol: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ASCII tables, no colors
        #[arg(long)]
        plain: bool,

        /// Leave the search strategy out of the report
        #[arg(long = "no-strategies")]
        no_strategies: bool,

        /// Configuration file (defaults to the nearest .rorscore.toml)
        #[arg(long, env = "RORSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Check a protocol for blocking problems without scoring it
    Validate {
        /// Protocol file
        protocol: PathBuf,

        /// Configuration file
        #[arg(long, env = "RORSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the interpretive search strategy for a protocol
    Strategies {
        /// Protocol file
        protocol: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// No colors
        #[arg(long)]
        plain: bool,

        /// Configuration file (defaults to the nearest .rorscore.toml)
        #[arg(long, env = "RORSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a blank protocol with one empty response per card
    Template {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a complete 20-response sample protocol instead
        #[arg(long)]
        sample: bool,
    },

    /// Refresh the cached GHR/PHR and Z value fields of a protocol
    Annotate {
        /// Protocol file
        protocol: PathBuf,

        /// Output file (defaults to rewriting the protocol in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize a .rorscore.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
