//! History anchoring invariant: the top of the undo stack is the live state.

use super::Invariant;
use crate::{GameEngine, ScoringVariant};

/// Invariant: the undo history is non-empty and its newest snapshot equals
/// the live state.
///
/// If this breaks, undo would restore a state the players never saw.
pub struct HistoryAnchoredInvariant;

impl<V: ScoringVariant> Invariant<GameEngine<V>> for HistoryAnchoredInvariant {
    fn holds(game: &GameEngine<V>) -> bool {
        game.history().latest() == Some(&game.state())
    }

    fn description() -> &'static str {
        "Newest history snapshot matches the live score"
    }
}
