//! Core domain types for side-out scoring.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::instrument;

/// Server number a team starts a game with.
///
/// Starting as the "second" server means the opening team only gets one
/// service turn before the first side-out.
pub const DEFAULT_SERVER_NUMBER: u8 = 2;

/// A team on the court, from the scorekeeper's point of view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Team {
    /// No server chosen yet (match not started).
    #[default]
    #[strum(to_string = "None", serialize = "none")]
    None,
    /// The scorekeeper's own team.
    #[strum(to_string = "You", serialize = "us", serialize = "you")]
    Us,
    /// The other team.
    #[strum(
        to_string = "They",
        serialize = "them",
        serialize = "they",
        serialize = "opponent"
    )]
    Opponent,
}

impl Team {
    /// Returns the team on the other side of the net.
    ///
    /// `Team::None` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Team::Us => Team::Opponent,
            Team::Opponent => Team::Us,
            Team::None => Team::None,
        }
    }

    /// Returns true for an actual team (not the pre-match sentinel).
    pub fn is_playing(self) -> bool {
        self != Team::None
    }
}

/// Half of the court the server is standing on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Even (right-hand) service court.
    #[default]
    #[strum(to_string = "even side", serialize = "even")]
    Even,
    /// Odd (left-hand) service court.
    #[strum(to_string = "odd side", serialize = "odd")]
    Odd,
}

impl Side {
    /// Returns the other half of the court.
    pub fn flipped(self) -> Self {
        match self {
            Side::Even => Side::Odd,
            Side::Odd => Side::Even,
        }
    }
}

/// One snapshot of a game's score.
///
/// Scores are always relative to the team currently holding serve:
/// `server_score` belongs to the serving team, `receiver_score` to the
/// receiving team. They swap places whenever serve changes teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    server_team: Team,
    server_side: Side,
    server_score: u32,
    receiver_score: u32,
    server_number: u8,
}

impl ScoreState {
    /// Creates the pre-match state: nobody serving, 0-0.
    pub fn new() -> Self {
        Self {
            server_team: Team::None,
            server_side: Side::Even,
            server_score: 0,
            receiver_score: 0,
            server_number: DEFAULT_SERVER_NUMBER,
        }
    }

    /// Creates a fresh 0-0 state with `team` about to serve.
    #[instrument]
    pub fn starting_with(team: Team) -> Self {
        Self {
            server_team: team,
            ..Self::new()
        }
    }

    /// Returns the team holding serve.
    pub fn server_team(&self) -> Team {
        self.server_team
    }

    /// Returns the court half the server stands on.
    pub fn server_side(&self) -> Side {
        self.server_side
    }

    /// Returns the serving team's points.
    pub fn server_score(&self) -> u32 {
        self.server_score
    }

    /// Returns the receiving team's points.
    pub fn receiver_score(&self) -> u32 {
        self.receiver_score
    }

    /// Returns which partner of the serving team is serving (1 or 2).
    pub fn server_number(&self) -> u8 {
        self.server_number
    }

    /// Total points scored by both teams.
    pub fn total_points(&self) -> u32 {
        self.server_score + self.receiver_score
    }

    /// Moves the server to the other half of the court.
    pub fn switch_sides(&mut self) {
        self.server_side = self.server_side.flipped();
    }

    /// The serving team won the rally: one point, and the server changes sides.
    pub fn award_point(&mut self) {
        self.server_score += 1;
        self.switch_sides();
    }

    /// Serve passes to the second partner of the same team.
    pub fn pass_to_partner(&mut self) {
        self.server_number = 2;
        self.switch_sides();
    }

    /// Serve passes to the other team.
    ///
    /// The scores swap so they stay relative to the new serving team, and the
    /// new server starts from the even court as first server.
    pub fn side_out(&mut self) {
        std::mem::swap(&mut self.server_score, &mut self.receiver_score);
        self.server_team = self.server_team.opponent();
        self.server_number = 1;
        self.server_side = Side::Even;
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_team_names_and_aliases() {
        assert_eq!(Team::Us.to_string(), "You");
        assert_eq!(Team::Opponent.to_string(), "They");
        assert_eq!(Team::from_str("us").unwrap(), Team::Us);
        assert_eq!(Team::from_str("YOU").unwrap(), Team::Us);
        assert_eq!(Team::from_str("Them").unwrap(), Team::Opponent);
        assert_eq!(Team::from_str("opponent").unwrap(), Team::Opponent);
        assert!(Team::from_str("referee").is_err());
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Team::Us.opponent().opponent(), Team::Us);
        assert_eq!(Team::None.opponent(), Team::None);
    }

    #[test]
    fn test_side_names() {
        assert_eq!(Side::Even.to_string(), "even side");
        assert_eq!(Side::Odd.flipped(), Side::Even);
        assert_eq!(Side::from_str("odd").unwrap(), Side::Odd);
    }

    #[test]
    fn test_default_state() {
        let state = ScoreState::default();
        assert_eq!(state.server_team(), Team::None);
        assert_eq!(state.server_side(), Side::Even);
        assert_eq!(state.total_points(), 0);
        assert_eq!(state.server_number(), DEFAULT_SERVER_NUMBER);
    }

    #[test]
    fn test_side_out_swaps_scores() {
        let mut state = ScoreState::starting_with(Team::Us);
        state.award_point();
        state.award_point();
        state.award_point();
        assert_eq!(state.server_side(), Side::Odd);

        state.side_out();
        assert_eq!(state.server_team(), Team::Opponent);
        assert_eq!(state.server_score(), 0);
        assert_eq!(state.receiver_score(), 3);
        assert_eq!(state.server_side(), Side::Even);
        assert_eq!(state.server_number(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut live = ScoreState::starting_with(Team::Us);
        let snapshot = live;
        live.award_point();
        assert_eq!(snapshot.server_score(), 0);
        assert_eq!(live.server_score(), 1);
    }

    #[test]
    fn test_state_serializes_with_lowercase_names() {
        let mut state = ScoreState::starting_with(Team::Opponent);
        state.award_point();
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["server_team"], "opponent");
        assert_eq!(json["server_side"], "odd");
        assert_eq!(json["server_score"], 1);
        assert_eq!(json["server_number"], 2);
    }
}
