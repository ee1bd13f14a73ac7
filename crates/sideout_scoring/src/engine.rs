//! The game engine: live score, undo history, and the public scoring API.

use super::error::RallyError;
use super::history::UndoHistory;
use super::types::{ScoreState, Side, Team};
use super::variant::{Discipline, ScoringVariant};
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use super::invariants::{EngineInvariants, InvariantSet};

/// Minimum winning score when none is configured.
pub const DEFAULT_GAME_LENGTH: u32 = 11;

/// Winning margin required on top of reaching the game length.
pub const WIN_MARGIN: u32 = 2;

/// Text shown while nobody has been chosen to serve.
pub const CHOOSE_SERVER_PROMPT: &str = "Who Serves First?";

/// Side-out scoring state machine for one game.
///
/// The engine owns the live [`ScoreState`] and an [`UndoHistory`] whose top is
/// always equal to the live state. Collaborators drive it with
/// [`record_rally`](Self::record_rally) and re-read the getters afterwards;
/// it never pushes notifications.
#[derive(Debug, Clone)]
pub struct GameEngine<V: ScoringVariant = Discipline> {
    variant: V,
    game_length: u32,
    state: ScoreState,
    history: UndoHistory,
}

impl<V: ScoringVariant> GameEngine<V> {
    /// Creates a pre-match engine playing to `game_length` under `variant`.
    #[instrument]
    pub fn new(variant: V, game_length: u32) -> Self {
        info!(game_length, "Playing to {}", game_length);
        let state = ScoreState::new();
        Self {
            variant,
            game_length,
            state,
            history: UndoHistory::new(state),
        }
    }

    /// Records the outcome of one rally.
    ///
    /// A rally won by the serving team scores a point; any other outcome is a
    /// fault handled by the scoring variant. The new state is pushed onto the
    /// undo history.
    ///
    /// # Errors
    ///
    /// - [`RallyError::InvalidWinner`] if `winner` is [`Team::None`]
    /// - [`RallyError::NoServer`] before the first server is chosen
    /// - [`RallyError::GameOver`] once the game has been won
    ///
    /// The score is left untouched in every error case.
    #[instrument(skip(self), fields(server = ?self.state.server_team()))]
    pub fn record_rally(&mut self, winner: Team) -> Result<(), RallyError> {
        if !winner.is_playing() {
            return Err(RallyError::InvalidWinner(winner));
        }
        if !self.state.server_team().is_playing() {
            warn!("Rally recorded before choosing a server");
            return Err(RallyError::NoServer);
        }
        if self.is_game_over() {
            warn!(score = %self.format_score(), "Rally recorded after game over");
            return Err(RallyError::GameOver);
        }

        let mut next = self.state;
        if winner == next.server_team() {
            self.variant.on_serving_team_scores(&mut next);
        } else {
            self.variant.on_serving_team_faults(&mut next);
        }
        self.state = next;
        self.history.push(next);
        debug!(score = %self.format_score(), side = %next.server_side(), "Rally recorded");

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        if self.is_game_over() {
            info!(score = %self.format_score(), "Game over");
        }
        Ok(())
    }

    /// Starts a new game with `team` serving first.
    ///
    /// The chosen-server state becomes the bootstrap snapshot, so undo cannot
    /// step back past the start of the game.
    #[instrument(skip(self))]
    pub fn choose_first_server(&mut self, team: Team) {
        self.reset_game();
        self.state = ScoreState::starting_with(team);
        self.history.reset(self.state);
    }

    /// Clears the score and history back to the pre-match state.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state = ScoreState::new();
        self.history.reset(self.state);
    }

    /// Rolls back the most recent rally.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.state = previous;
                debug!(score = %self.format_score(), "Undid rally");
                true
            }
            None => false,
        }
    }

    /// True once one team has reached the game length with a two-point lead.
    pub fn is_game_over(&self) -> bool {
        let high = self.state.server_score().max(self.state.receiver_score());
        let margin = self.state.server_score().abs_diff(self.state.receiver_score());
        high >= self.game_length && margin >= WIN_MARGIN
    }

    /// Returns the winning team once the game is over.
    ///
    /// Only the serving team can score, so the winner always holds serve.
    pub fn winner(&self) -> Option<Team> {
        self.is_game_over().then(|| self.state.server_team())
    }

    /// Returns the team holding serve ([`Team::None`] before the match).
    pub fn current_server_team(&self) -> Team {
        self.state.server_team()
    }

    /// Returns the court half the server stands on.
    pub fn current_server_side(&self) -> Side {
        self.state.server_side()
    }

    /// True if there is a rally to undo.
    pub fn is_undo_available(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns a copy of the live score.
    pub fn state(&self) -> ScoreState {
        self.state
    }

    /// Returns the undo history.
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Returns the minimum winning score.
    pub fn game_length(&self) -> u32 {
        self.game_length
    }

    /// Returns the scoring rules in use.
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Formats the score the way a referee calls it.
    ///
    /// `"{server}-{receiver}"`, with the server number appended in doubles
    /// while the game is running, and the winner announced once it is over.
    pub fn format_score(&self) -> String {
        if !self.state.server_team().is_playing() {
            return CHOOSE_SERVER_PROMPT.to_string();
        }

        let game_over = self.is_game_over();
        let mut result = String::new();
        if game_over {
            result.push_str(&format!("{} Won ", self.state.server_team()));
        }
        result.push_str(&format!(
            "{}-{}",
            self.state.server_score(),
            self.state.receiver_score()
        ));
        if !game_over && self.variant.player_count() > 1 {
            result.push_str(&format!("-{}", self.state.server_number()));
        }
        result
    }

    /// One-line status summary, with an optional trailing comment.
    pub fn describe_state(&self, comment: &str) -> String {
        let team = self.state.server_team();
        let side = self.state.server_side();
        format!(
            "{} are serving from the {}: {:?} {:?} {} // {}",
            team,
            side,
            team,
            side,
            self.format_score(),
            comment
        )
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), RallyError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RallyError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl Default for GameEngine<Discipline> {
    fn default() -> Self {
        Self::new(Discipline::default(), DEFAULT_GAME_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DoublesTraditional, SinglesTraditional};

    fn singles() -> GameEngine<SinglesTraditional> {
        let mut game = GameEngine::new(SinglesTraditional, DEFAULT_GAME_LENGTH);
        game.choose_first_server(Team::Us);
        game
    }

    fn doubles() -> GameEngine<DoublesTraditional> {
        let mut game = GameEngine::new(DoublesTraditional, DEFAULT_GAME_LENGTH);
        game.choose_first_server(Team::Us);
        game
    }

    #[test]
    fn test_new_engine_is_pre_match() {
        let game: GameEngine = GameEngine::default();
        assert_eq!(game.current_server_team(), Team::None);
        assert_eq!(game.current_server_side(), Side::Even);
        assert_eq!(game.game_length(), DEFAULT_GAME_LENGTH);
        assert!(!game.is_undo_available());
        assert!(!game.is_game_over());
        assert_eq!(game.format_score(), CHOOSE_SERVER_PROMPT);
    }

    #[test]
    fn test_rally_before_server_is_rejected() {
        let mut game: GameEngine = GameEngine::default();
        assert_eq!(game.record_rally(Team::Us), Err(RallyError::NoServer));
        assert_eq!(game.state(), ScoreState::new());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rally_won_by_none_is_rejected() {
        let mut game = singles();
        assert_eq!(
            game.record_rally(Team::None),
            Err(RallyError::InvalidWinner(Team::None))
        );
        assert!(!game.is_undo_available());
    }

    #[test]
    fn test_singles_point_then_side_out() {
        let mut game = singles();
        game.record_rally(Team::Us).unwrap();
        assert_eq!(game.current_server_side(), Side::Odd);
        assert_eq!(game.format_score(), "1-0");

        game.record_rally(Team::Opponent).unwrap();
        assert_eq!(game.current_server_team(), Team::Opponent);
        assert_eq!(game.current_server_side(), Side::Even);
        assert_eq!(game.format_score(), "0-1");
    }

    #[test]
    fn test_doubles_shows_server_number() {
        let mut game = doubles();
        assert_eq!(game.format_score(), "0-0-2");
        game.record_rally(Team::Us).unwrap();
        assert_eq!(game.format_score(), "1-0-2");
        game.record_rally(Team::Opponent).unwrap();
        assert_eq!(game.format_score(), "0-1-1");
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut game = doubles();
        game.record_rally(Team::Us).unwrap();
        let before = game.state();

        game.record_rally(Team::Opponent).unwrap();
        assert!(game.undo());
        assert_eq!(game.state(), before);

        assert!(game.undo());
        assert_eq!(game.state(), ScoreState::starting_with(Team::Us));
        assert!(!game.undo());
        assert_eq!(game.state(), ScoreState::starting_with(Team::Us));
    }

    #[test]
    fn test_game_over_blocks_further_rallies() {
        let mut game = singles();
        for _ in 0..DEFAULT_GAME_LENGTH {
            game.record_rally(Team::Us).unwrap();
        }
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Team::Us));
        assert_eq!(game.format_score(), "You Won 11-0");

        assert_eq!(game.record_rally(Team::Opponent), Err(RallyError::GameOver));
        assert_eq!(game.format_score(), "You Won 11-0");
    }

    #[test]
    fn test_undo_after_game_over_reopens_game() {
        let mut game = singles();
        for _ in 0..DEFAULT_GAME_LENGTH {
            game.record_rally(Team::Us).unwrap();
        }
        assert!(game.undo());
        assert!(!game.is_game_over());
        assert_eq!(game.format_score(), "10-0");
    }

    #[test]
    fn test_describe_state() {
        let mut game = singles();
        game.record_rally(Team::Us).unwrap();
        assert_eq!(
            game.describe_state("after one point"),
            "You are serving from the odd side: Us Odd 1-0 // after one point"
        );
    }

    #[test]
    fn test_short_game_length() {
        let mut game = GameEngine::new(Discipline::Singles, 3);
        game.choose_first_server(Team::Opponent);
        for _ in 0..3 {
            game.record_rally(Team::Opponent).unwrap();
        }
        assert_eq!(game.winner(), Some(Team::Opponent));
        assert_eq!(game.format_score(), "They Won 3-0");
    }
}
