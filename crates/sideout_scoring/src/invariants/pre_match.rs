//! Pre-match invariant: nothing happens before a server is chosen.

use super::Invariant;
use crate::{GameEngine, ScoreState, ScoringVariant};

/// Invariant: with no server chosen, the score is the untouched default.
pub struct PreMatchInvariant;

impl<V: ScoringVariant> Invariant<GameEngine<V>> for PreMatchInvariant {
    fn holds(game: &GameEngine<V>) -> bool {
        let state = game.state();
        state.server_team().is_playing() || state == ScoreState::new()
    }

    fn description() -> &'static str {
        "Score stays at its default until a server is chosen"
    }
}
