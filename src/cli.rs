//! Command-line interface for whats_the_score.

use clap::{Args, Parser, Subcommand};
use whats_the_score::{Discipline, Team};

/// What's the Score - side-out scorekeeper for racquet matches
#[derive(Parser, Debug)]
#[command(name = "whats_the_score")]
#[command(about = "Keep score of a singles or doubles side-out game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Match settings shared by all subcommands
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Path to a match config file (TOML)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Scoring rules: singles or doubles
    #[arg(short, long)]
    pub discipline: Option<Discipline>,

    /// Minimum winning score (win by two)
    #[arg(short, long)]
    pub game_length: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Keep score interactively, one command per line on stdin
    Play {
        #[command(flatten)]
        settings: MatchArgs,

        /// Team serving first (otherwise the first tap decides)
        #[arg(long)]
        first_server: Option<Team>,
    },

    /// Replay a list of rally winners and print the score after each
    Replay {
        #[command(flatten)]
        settings: MatchArgs,

        /// Team serving first
        #[arg(long, default_value = "us")]
        first_server: Team,

        /// Print each state as JSON instead of a status line
        #[arg(long)]
        json: bool,

        /// Rally winners in order (us/them)
        #[arg(required = true)]
        rallies: Vec<Team>,
    },
}
