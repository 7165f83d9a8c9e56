use super::load_protocol;
use crate::cli::setup::formatting_config;
use crate::config::resolve_config;
use crate::formatting::{formatter_for, OutputFormatter};
use crate::io::output::OutputFormat;
use crate::scoring::calculate_rorschach;
use crate::strategy::{
    key_variable_strategies, split_routine, tertiary_variable_strategies, SearchStrategy,
};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

pub struct StrategiesConfig {
    pub protocol: PathBuf,
    pub format: OutputFormat,
    pub plain: bool,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct StrategyListing {
    key_strategies: Vec<SearchStrategy>,
    tertiary_strategies: Vec<SearchStrategy>,
}

/// Print the positive key and tertiary variables for a protocol.
///
/// No validation runs here, so partial protocols can be explored.
pub fn print_strategies(config: StrategiesConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let protocol = load_protocol(&config.protocol)?;
    let results = calculate_rorschach(protocol.responses());
    let listing = StrategyListing {
        key_strategies: key_variable_strategies(&results),
        tertiary_strategies: tertiary_variable_strategies(&results),
    };

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Markdown => {
            print_markdown("Key variables", &listing.key_strategies);
            print_markdown("Tertiary variables", &listing.tertiary_strategies);
        }
        OutputFormat::Terminal => {
            let formatter = formatter_for(formatting_config(&settings.display, config.plain));
            print_terminal(formatter.as_ref(), "Key variables", &listing.key_strategies);
            print_terminal(formatter.as_ref(), "Tertiary variables", &listing.tertiary_strategies);
        }
    }
    Ok(())
}

fn print_markdown(title: &str, strategies: &[SearchStrategy]) {
    println!("## {title}");
    println!();
    if strategies.is_empty() {
        println!("_None positive._");
    }
    for strategy in strategies {
        match split_routine(&strategy.routine) {
            (order, Some(note)) => println!("- **{}**: {order} _{note}_", strategy.variable),
            (order, None) => println!("- **{}**: {order}", strategy.variable),
        }
    }
    println!();
}

fn print_terminal(formatter: &dyn OutputFormatter, title: &str, strategies: &[SearchStrategy]) {
    println!("{}", formatter.header(title));
    if strategies.is_empty() {
        println!("  {}", formatter.dim("none positive"));
    }
    for (i, strategy) in strategies.iter().enumerate() {
        let (order, note) = split_routine(&strategy.routine);
        println!("  {}. {}", i + 1, formatter.warning(&strategy.variable));
        println!("     {order}");
        if let Some(note) = note {
            println!("     {}", formatter.dim(note));
        }
    }
    println!();
}
