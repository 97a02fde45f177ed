//! Game engine: owns the board and turn, and gates all mutation
//! through move legality checks.

use crate::invariants::{Invariant, MarkBalanceInvariant};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised when a move is requested at a raw index outside 0-8.
///
/// This is a caller contract violation, not a game-rule rejection:
/// occupied squares and finished games reject the move without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Position index {} is out of bounds (must be 0-8)", _0)]
pub struct IndexOutOfBounds(pub usize);

impl std::error::Error for IndexOutOfBounds {}

/// Tic-tac-toe game engine.
///
/// Holds the authoritative board and whose-turn flag for one game
/// session. All mutation goes through [`Game::apply_move`] /
/// [`Game::place`] and [`Game::reset`]; outcome is derived on demand
/// from the board and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Applies a move at the given raw index (0-8).
    ///
    /// Returns `Ok(true)` if the move was accepted, `Ok(false)` if it
    /// was rejected (square occupied, or game already won) - the state
    /// is untouched on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index` is not in 0-8.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<bool, IndexOutOfBounds> {
        let pos = Position::from_index(index).ok_or(IndexOutOfBounds(index))?;
        Ok(self.place(pos))
    }

    /// Places the current player's mark at the given position.
    ///
    /// Returns whether the move was accepted. Rejected when the game
    /// is already won or the square is occupied; a rejected move
    /// leaves the board and turn untouched. A draw needs no separate
    /// check here - a full board has no empty square to place on.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> bool {
        if rules::winning_line(&self.board).is_some() {
            return false;
        }
        if !self.board.is_empty(pos) {
            return false;
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();

        debug_assert!(
            MarkBalanceInvariant::holds(&self.board),
            "{}",
            MarkBalanceInvariant::description()
        );

        true
    }

    /// Returns the game to its initial configuration: all squares
    /// empty, X to move. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Evaluates the current board into an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the human-readable status line for the current state.
    pub fn status_label(&self) -> String {
        match self.outcome() {
            Outcome::Won { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => "Draw game".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_moves_first() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut game = Game::new();
        assert!(game.place(Position::Center));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new();
        assert!(game.place(Position::Center));
        assert!(!game.place(Position::Center));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(9), Err(IndexOutOfBounds(9)));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::new();
        game.place(Position::Center);
        game.place(Position::TopLeft);
        game.reset();
        assert_eq!(game, Game::new());
    }
}
