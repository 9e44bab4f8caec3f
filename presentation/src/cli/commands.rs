//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use duel_domain::Side;
use std::path::PathBuf;

/// Output format for rendered slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rendering of each slot
    Full,
    /// Raw HTML fragments
    Fragments,
    /// One JSON event per line
    Json,
}

impl From<OutputFormat> for duel_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Fragments => Self::Fragments,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Side to vote for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoteArg {
    Dog,
    Cat,
}

impl From<VoteArg> for Side {
    fn from(vote: VoteArg) -> Self {
        match vote {
            VoteArg::Dog => Side::Dog,
            VoteArg::Cat => Side::Cat,
        }
    }
}

/// What to do
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a dog and a cat picture side by side
    Duel {
        /// Vote for one of the two pictures once they are shown
        #[arg(long, value_enum, value_name = "SIDE")]
        vote: Option<VoteArg>,
    },
    /// Fetch a single cat picture
    Cat,
    /// Load the configured jumbotron text resource
    Jumbotron,
    /// Start an interactive session (default)
    Play,
}

/// CLI arguments for pet-duel
#[derive(Parser, Debug)]
#[command(name = "pet-duel")]
#[command(author, version, about = "Cat vs dog - fetch two random pictures and vote")]
#[command(long_about = r#"
pet-duel fetches a random dog picture and a random cat picture at the
same time and shows them side by side. Vote for the one you like.

Configuration files are loaded from (in priority order):
1. PET_DUEL_* environment variables
2. --config <path>     Explicit config file
3. ./pet-duel.toml     Project-level config
4. ~/.config/pet-duel/config.toml   Global config

Example:
  pet-duel duel --vote dog
  pet-duel cat --output fragments
  PET_DUEL_CAT_API__API_KEY=... pet-duel play
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The selected subcommand, `play` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
