//! Side-out scoring for racquet games.
//!
//! A small deterministic state machine that tracks who is serving, from
//! which side of the court, the score, and (in doubles) which partner holds
//! serve. Every accepted rally is snapshotted so it can be undone exactly.
//!
//! # Example
//!
//! ```
//! use sideout_scoring::{Discipline, GameEngine, Side, Team};
//!
//! let mut game = GameEngine::new(Discipline::Doubles, 11);
//! assert_eq!(game.format_score(), "Who Serves First?");
//!
//! game.choose_first_server(Team::Us);
//! game.record_rally(Team::Us).unwrap();
//! assert_eq!(game.format_score(), "1-0-2");
//! assert_eq!(game.current_server_side(), Side::Odd);
//!
//! game.undo();
//! assert_eq!(game.format_score(), "0-0-2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
pub mod invariants;
mod types;
mod variant;

pub use engine::{CHOOSE_SERVER_PROMPT, DEFAULT_GAME_LENGTH, GameEngine, WIN_MARGIN};
pub use error::RallyError;
pub use history::UndoHistory;
pub use types::{DEFAULT_SERVER_NUMBER, ScoreState, Side, Team};
pub use variant::{Discipline, DoublesTraditional, ScoringVariant, SinglesTraditional};
