//! Errors for rejected rallies.

/// A rally the engine refused to record.
///
/// A rejected rally never changes the score or the undo history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RallyError {
    /// No first server has been chosen yet.
    #[display("No server chosen yet; choose who serves first")]
    NoServer,

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The rally winner must be an actual team.
    #[display("Rally winner must be a team, not {:?}", _0)]
    InvalidWinner(crate::Team),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RallyError {}
