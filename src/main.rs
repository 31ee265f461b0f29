use anyhow::Result;
use shortchain::cli::{parse_args, Commands};
use shortchain::commands::{handle_run, init_config, list_steps, RunConfig};
use shortchain::config::ConfigOverrides;

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Run {
            initial,
            steps,
            repeat,
            config,
            format,
            output,
            trace,
            plain,
            verbosity: _,
        } => {
            let run_config = RunConfig {
                config,
                overrides: ConfigOverrides {
                    initial,
                    steps,
                    repeat,
                },
                format,
                output,
                trace,
                plain,
            };
            handle_run(run_config)?;
            Ok(())
        }
        Commands::Steps => list_steps(std::io::stdout().lock()),
        Commands::Init { force } => init_config(force),
    }
}

// Pure function to map -v count to a default log level
fn level_for_verbosity(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// RUST_LOG, when set, takes precedence over the -v default
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
