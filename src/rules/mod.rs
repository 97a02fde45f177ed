//! Game rules for tic-tac-toe: win, draw, and outcome evaluation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board snapshot into an [`Outcome`].
///
/// Pure and total: every well-typed board maps to exactly one of
/// `InProgress`, `Won`, or `Draw`.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Won { player, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
