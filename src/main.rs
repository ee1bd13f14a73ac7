//! What's the Score - CLI
//!
//! Side-out scorekeeper with an interactive mode and a replay mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MatchArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use whats_the_score::{MatchConfig, Scorekeeper, Team};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            settings,
            first_server,
        } => run_play(load_config(&settings, first_server)?),
        Command::Replay {
            settings,
            first_server,
            json,
            rallies,
        } => run_replay(load_config(&settings, None)?, first_server, json, &rallies),
    }
}

/// Builds the match config from the optional file plus command-line overrides.
#[instrument(skip(settings))]
fn load_config(settings: &MatchArgs, first_server: Option<Team>) -> Result<MatchConfig> {
    let config = match &settings.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            info!("No config file given, using defaults");
            MatchConfig::default()
        }
    };

    config
        .with_overrides(settings.discipline, settings.game_length, first_server)
        .context("Invalid match settings")
}

/// Run the interactive scorekeeper on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: MatchConfig) -> Result<()> {
    info!(
        discipline = %config.discipline(),
        game_length = config.game_length(),
        "Starting scorekeeper"
    );
    let mut keeper = Scorekeeper::new(config.build_engine());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    keeper
        .run_session(stdin.lock(), stdout.lock())
        .context("Scorekeeper session failed")?;

    info!(score = %keeper.view().score, "Scorekeeper finished");
    Ok(())
}

/// Replay rally winners and print the score after each
#[instrument(skip(config, rallies), fields(rally_count = rallies.len()))]
fn run_replay(
    config: MatchConfig,
    first_server: Team,
    json: bool,
    rallies: &[Team],
) -> Result<()> {
    let mut engine = config.build_engine();
    engine.choose_first_server(first_server);

    for (index, winner) in rallies.iter().enumerate() {
        let number = index + 1;
        engine
            .record_rally(*winner)
            .with_context(|| format!("Rally {} ({}) was rejected", number, winner))?;

        if json {
            let line = serde_json::json!({
                "rally": number,
                "winner": winner,
                "score": engine.format_score(),
                "state": engine.state(),
            });
            println!("{}", line);
        } else {
            println!(
                "{}",
                engine.describe_state(&format!("rally {} won by {}", number, winner))
            );
        }
    }

    if let Some(team) = engine.winner() {
        info!(%team, "Replay ended with a winner");
    }
    Ok(())
}
