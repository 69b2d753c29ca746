//! Tic-tac-toe rules engine with a heuristic computer opponent.
//!
//! The crate is pure: no I/O, no timers, no global state. A front end owns
//! the [`Board`] (or a [`Game`] session) and calls in for every turn.
//!
//! # Playing a turn
//!
//! ```
//! use kodeco_tictactoe::{GameOutcome, GameRng, Position, apply_human_move, evaluate, new_game, select_computer_move};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = GameRng::new(7);
//! let board = new_game();
//! let mut board = apply_human_move(&board, Position::TopLeft)?;
//! assert_eq!(evaluate(&board), GameOutcome::InProgress);
//!
//! let reply = select_computer_move(&board, &mut rng)?;
//! assert_eq!(reply, Position::Center);
//! board.place(kodeco_tictactoe::Player::Computer, reply)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Computer strategy
//!
//! See [`decide`] for the five tiers the computer walks through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod outcome;
mod position;
mod resolver;
mod rng;
pub mod rules;
mod types;

pub use board::{Board, BoardSnapshot};
pub use error::{ExhaustedBoardError, GameError, IllegalMoveError, PositionError};
pub use game::{Game, TurnReport, apply_human_move, new_game, reset_game};
pub use outcome::GameOutcome;
pub use position::Position;
pub use resolver::{Decision, Tier, decide, deterministic_move, select_computer_move};
pub use rng::GameRng;
pub use rules::{evaluate, find_immediate_win, has_won, is_draw};
pub use types::{Move, Player};
