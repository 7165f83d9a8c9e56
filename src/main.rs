use anyhow::Result;
use rorscore::cli::{self, Commands};
use rorscore::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Calculate {
            protocol,
            format,
            output,
            plain,
            no_strategies,
            config,
        } => commands::calculate_protocol(commands::CalculateConfig {
            protocol,
            format,
            output,
            plain,
            no_strategies,
            config,
        }),
        Commands::Validate { protocol, config } => {
            commands::validate_protocol_file(&protocol, config.as_deref())
        }
        Commands::Strategies {
            protocol,
            format,
            plain,
            config,
        } => commands::print_strategies(commands::StrategiesConfig {
            protocol,
            format,
            plain,
            config,
        }),
        Commands::Template { output, sample } => {
            commands::write_template(output.as_deref(), sample)
        }
        Commands::Annotate { protocol, output } => {
            commands::annotate_protocol(&protocol, output.as_deref())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
