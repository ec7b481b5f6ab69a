//! Rule engine for a falling-block puzzle game.
//!
//! This crate owns the playing-field grid, the shapes that fall onto it, and
//! the rules deciding whether a shape may occupy a position, how it rotates,
//! when rows clear, and how the field compacts afterward. Window creation,
//! rendering, and input dispatch are external collaborators: they push
//! discrete intents and elapsed time into [`GameState`] and read cell
//! contents, piece snapshots, and the score text back once per frame.
//!
//! # Module Structure
//!
//! - [`types`]: dependency-free value types and constants
//! - [`core::board`]: the 10x19 grid with row completion and compaction
//! - [`core::pieces`]: the shape catalog and falling-piece geometry
//! - [`core::game_state`]: the session state machine
//! - [`core::scoring`]: the score-to-speed policy
//! - [`core::rng`]: seeded random source for shape selection
//!
//! # Example
//!
//! ```
//! use gridfall::GameState;
//!
//! let mut game = GameState::new(12345);
//! game.move_left();
//! game.rotate_cw();
//! game.hard_drop();
//! game.advance(0.016);
//!
//! assert_eq!(game.score_text(), format!("score: {}", game.score()));
//! ```
//!
//! The engine is single-threaded and frame-driven: every operation is a
//! finite synchronous computation, and a seeded session replays identically.

pub mod core;
pub mod types;

pub use crate::core::{Board, GameState, PlacedTetromino, Tetromino};
pub use crate::types::{BlockColor, Cell, Point, ShapeKind};
