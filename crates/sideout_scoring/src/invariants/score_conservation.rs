//! Score conservation invariant.

use super::Invariant;
use crate::{GameEngine, ScoringVariant};

/// Invariant: consecutive snapshots differ by at most one point in total.
///
/// A rally awards at most one point, and passing serve only swaps the two
/// scores, so the combined total can never drop or jump.
pub struct ScoreConservationInvariant;

impl<V: ScoringVariant> Invariant<GameEngine<V>> for ScoreConservationInvariant {
    fn holds(game: &GameEngine<V>) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let before = pair[0].total_points();
            let after = pair[1].total_points();
            after == before || after == before + 1
        })
    }

    fn description() -> &'static str {
        "Each rally adds at most one point and no point is lost"
    }
}
