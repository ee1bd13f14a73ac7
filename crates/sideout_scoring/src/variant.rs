//! Sport-specific scoring rules.
//!
//! The engine only knows whether the serving team won or lost a rally. What
//! that means for the score depends on the rule set, which lives behind the
//! [`ScoringVariant`] trait.

use super::types::ScoreState;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, instrument};

/// Rules for how a rally outcome changes the score.
pub trait ScoringVariant: std::fmt::Debug {
    /// The serving team won the rally.
    fn on_serving_team_scores(&self, state: &mut ScoreState);

    /// The serving team lost the rally.
    fn on_serving_team_faults(&self, state: &mut ScoreState);

    /// Players per team. The server number is only shown when this is above 1.
    fn player_count(&self) -> u8;
}

/// Traditional singles side-out scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinglesTraditional;

impl ScoringVariant for SinglesTraditional {
    fn on_serving_team_scores(&self, state: &mut ScoreState) {
        state.award_point();
    }

    fn on_serving_team_faults(&self, state: &mut ScoreState) {
        state.side_out();
    }

    fn player_count(&self) -> u8 {
        1
    }
}

/// Traditional doubles side-out scoring.
///
/// Each team gets one service turn per partner before serve passes to the
/// other team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoublesTraditional;

impl ScoringVariant for DoublesTraditional {
    fn on_serving_team_scores(&self, state: &mut ScoreState) {
        state.award_point();
    }

    #[instrument(skip(self), fields(server_number = state.server_number()))]
    fn on_serving_team_faults(&self, state: &mut ScoreState) {
        if state.server_number() == 1 {
            debug!("Serve passes to partner");
            state.pass_to_partner();
        } else {
            debug!("Side out");
            state.side_out();
        }
    }

    fn player_count(&self) -> u8 {
        2
    }
}

/// The rule sets a match can be played under.
///
/// Dispatches to [`SinglesTraditional`] or [`DoublesTraditional`], and is the
/// form the rule set takes in configuration and on the command line.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Discipline {
    /// One player per side.
    Singles,
    /// Two players per side.
    #[default]
    Doubles,
}

impl ScoringVariant for Discipline {
    fn on_serving_team_scores(&self, state: &mut ScoreState) {
        match self {
            Discipline::Singles => SinglesTraditional.on_serving_team_scores(state),
            Discipline::Doubles => DoublesTraditional.on_serving_team_scores(state),
        }
    }

    fn on_serving_team_faults(&self, state: &mut ScoreState) {
        match self {
            Discipline::Singles => SinglesTraditional.on_serving_team_faults(state),
            Discipline::Doubles => DoublesTraditional.on_serving_team_faults(state),
        }
    }

    fn player_count(&self) -> u8 {
        match self {
            Discipline::Singles => SinglesTraditional.player_count(),
            Discipline::Doubles => DoublesTraditional.player_count(),
        }
    }
}
