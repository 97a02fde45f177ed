//! Pure tic-tac-toe game logic.
//!
//! This crate is the game-state engine for a two-player 3x3 game:
//! it tracks the board and turn, enforces move legality, detects
//! terminal conditions, and reports the winning line. Rendering,
//! input handling, and session plumbing are left to the embedding
//! host.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board snapshot into an outcome
//! - **Engine**: the single mutable board+turn pair, mutated only
//!   through validated moves and reset
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new();
//! assert!(game.place(Position::TopLeft));
//! assert!(game.place(Position::Center));
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

// Crate-level exports - Engine
pub use engine::{Game, IndexOutOfBounds};

// Crate-level exports - Rules
pub use rules::{evaluate, is_full, winning_line};

// Crate-level exports - Invariants
pub use invariants::{Invariant, MarkBalanceInvariant};

// Crate-level exports - Domain types
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Player, Square};
