use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shortchain")]
#[command(about = "Run short-circuiting integer transform chains", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a chain and report its result
    Run {
        /// Value the chain starts from (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        initial: Option<i64>,

        /// Step names, in order; repeatable or comma-separated (overrides config)
        #[arg(short, long = "step", value_delimiter = ',')]
        steps: Option<Vec<String>>,

        /// Number of times the step list is applied (overrides config)
        #[arg(short, long)]
        repeat: Option<usize>,

        /// Configuration file (defaults to searching for .shortchain.toml)
        #[arg(short, long, env = "SHORTCHAIN_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include one line per invoked step
        #[arg(long)]
        trace: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the available steps
    Steps,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Verbosity requested on the command line, if the command takes one.
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Run { verbosity, .. } => *verbosity,
            Commands::Steps | Commands::Init { .. } => 0,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
