//! Server number invariant.

use super::Invariant;
use crate::{GameEngine, ScoringVariant};

/// Invariant: the server number is always 1 or 2.
pub struct ServerNumberInvariant;

impl<V: ScoringVariant> Invariant<GameEngine<V>> for ServerNumberInvariant {
    fn holds(game: &GameEngine<V>) -> bool {
        matches!(game.state().server_number(), 1 | 2)
    }

    fn description() -> &'static str {
        "Server number is 1 or 2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Discipline, Team};

    #[test]
    fn test_holds_across_partner_rotation() {
        let mut game = GameEngine::new(Discipline::Doubles, 11);
        game.choose_first_server(Team::Us);
        for winner in [Team::Opponent, Team::Us, Team::Opponent, Team::Opponent] {
            game.record_rally(winner).unwrap();
            assert!(ServerNumberInvariant::holds(&game));
        }
    }
}
