//! Core module - pure game rules with no external collaborators
//!
//! Everything the rule engine owns lives here: the grid, the shape catalog,
//! the falling piece, and the session state machine. It has zero knowledge
//! of windows, input devices, or rendering.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{block_offsets, color_of, random_kind, PlacedTetromino, Tetromino};
pub use rng::SimpleRng;
pub use scoring::secs_per_tick_for_score;
