//! Undo history: a stack of full score snapshots.

use super::types::ScoreState;
use tracing::{debug, instrument};

/// Stack of score snapshots, oldest first.
///
/// The stack is never empty: it always holds the bootstrap snapshot of the
/// current game, and its top is always the live state. Undo pops the top and
/// exposes the snapshot below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoHistory {
    snapshots: Vec<ScoreState>,
}

impl UndoHistory {
    /// Creates a history holding only the bootstrap snapshot.
    #[instrument]
    pub fn new(bootstrap: ScoreState) -> Self {
        Self {
            snapshots: vec![bootstrap],
        }
    }

    /// Records a snapshot taken after a transition.
    pub fn push(&mut self, snapshot: ScoreState) {
        self.snapshots.push(snapshot);
    }

    /// Drops everything and starts over from a new bootstrap snapshot.
    #[instrument(skip(self), fields(discarded = self.snapshots.len()))]
    pub fn reset(&mut self, bootstrap: ScoreState) {
        self.snapshots.clear();
        self.snapshots.push(bootstrap);
    }

    /// Returns true if there is a snapshot older than the live one.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Pops the live snapshot and returns the one it replaced.
    ///
    /// Returns `None` (and leaves the stack alone) when only the bootstrap
    /// snapshot remains.
    #[instrument(skip(self), fields(depth = self.snapshots.len()))]
    pub fn undo(&mut self) -> Option<ScoreState> {
        if !self.can_undo() {
            debug!("Nothing to undo");
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last().copied()
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> Option<&ScoreState> {
        self.snapshots.last()
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[ScoreState] {
        &self.snapshots
    }

    /// Number of snapshots held, bootstrap included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false once constructed; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
