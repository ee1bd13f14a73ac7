//! What's the Score - side-out scorekeeping for racquet matches
//!
//! The scoring rules live in [`sideout_scoring`]; this crate adds the pieces
//! a court-side host needs around them.
//!
//! # Architecture
//!
//! - **Config**: match settings (singles or doubles, game length, first
//!   server) loaded from TOML
//! - **Scorekeeper**: tap-a-team controller that re-reads the engine after
//!   every command and renders the court
//!
//! # Example
//!
//! ```
//! use whats_the_score::{MatchConfig, Scorekeeper, Team};
//!
//! let mut keeper = Scorekeeper::new(MatchConfig::default().build_engine());
//! keeper.tap(Team::Us).unwrap(); // picks the first server
//! keeper.tap(Team::Us).unwrap(); // first rally
//! assert_eq!(keeper.view().score, "1-0-2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scorekeeper;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Scorekeeper
pub use scorekeeper::{Command, CourtView, Flow, HELP, Scorekeeper, TapOutcome};

// Crate-level exports - Scoring engine
pub use sideout_scoring::{
    Discipline, GameEngine, RallyError, ScoreState, ScoringVariant, Side, Team,
};
