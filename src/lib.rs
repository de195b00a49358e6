//! A rules engine for the board game 'Connect 4'
//!
//! The engine keeps the board, validates moves, alternates turns and
//! detects wins and full boards. After every move it writes a text
//! snapshot of the board to an [`OutputSink`].
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Color, Connect4, MemorySink, Winner};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Connect4::new(MemorySink::new());
//! let row = game.insert_disc(4)?;
//!
//! assert_eq!(row, 0);
//! assert_eq!(game.get_next_turn(), Color::Green);
//! assert_eq!(game.winner(), Winner::Nobody);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod color;

pub mod error;

pub mod sink;

pub mod engine;


pub use color::Color;
pub use engine::{Connect4, Winner};
pub use error::EngineError;
pub use sink::{MemorySink, OutputSink};

/// The number of rows on the game board, row 0 is the bottom
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLUMNS: usize = 7;

/// The length of a winning line
pub const DISCS_TO_WIN: usize = 4;

/// Result code reported when nobody has four in a row
pub const NO_WINNER: &str = "-";

/// Result code reported when red has four in a row
pub const RED_WINNER: &str = "R";

/// Result code reported when green has four in a row
pub const GREEN_WINNER: &str = "G";

// a winning line has to fit on the board in both directions
const_assert!(ROWS >= DISCS_TO_WIN);
const_assert!(COLUMNS >= DISCS_TO_WIN);
