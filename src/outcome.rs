//! Derived game outcome.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board snapshot.
///
/// The outcome carries no independent state - it is always
/// recomputable from the board alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// The three positions forming the completed line.
        line: [Position; 3],
    },
    /// Game ended in a draw (board full, no winner).
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if no further moves are accepted in this outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
