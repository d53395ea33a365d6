//! A perfect agent for playing or analysing the game of tic-tac-toe
//!
//! This agent searches the complete game tree to find a
//! mathematically optimal move for any position, choosing at
//! random between equally good moves.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{board::Board, solver::{Solver, WIN}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut solver = Solver::new(Board::from_moves("a1a2b1b2")?);
//! let (score, best_move) = solver.solve();
//!
//! assert!((score, best_move) == (WIN, "c1".parse()?));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod solver;


pub use board::{Board, Move, Player};
pub use solver::{Solver, DRAW, LOSS, WIN};

/// The width and height of the game board in squares
pub const SIZE: usize = 3;

// ensure that any square can be written as one column letter and one row digit
const_assert!(SIZE <= 9);
