//! A Connect 4 opponent and strategy tutor
//!
//! The computer player uses a fixed-depth minimax search with alpha-beta
//! pruning and a window-counting heuristic at the search frontier.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_tutor::{board::Board, search::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut engine = Engine::new().with_depth(4);
//! let (score, best_move) = engine.search(&Board::new());
//!
//! assert_eq!((score, best_move), (13, Some(3)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluation;

pub mod search;

pub mod game;

pub mod tutor;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

// a window of four must fit in every orientation, and move strings use one digit per column
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);
const_assert!(WIDTH <= 9);
