//! Game state module - the session state machine
//!
//! Ties the board, pieces, rng, and speed policy together: spawning,
//! legality checks, locking, row-clear scoring, and tick-driven gravity.
//! The I/O layer drives it with discrete intents plus `advance`, and reads
//! cell contents, piece snapshots, and the score text back once per frame.
//! All mutation flows through this type; collaborators only get read access.

use crate::core::board::Board;
use crate::core::pieces::{random_kind, PlacedTetromino, Tetromino};
use crate::core::rng::SimpleRng;
use crate::core::scoring::secs_per_tick_for_score;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: PlacedTetromino,
    next: Tetromino,
    score: u32,
    secs_per_tick: f32,
    secs_since_tick: f32,
    /// A piece locked since the last `advance` and needs replacement
    shape_placed: bool,
    /// Monotonic counter of game-over resets (observable restart signal)
    episode_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    ///
    /// The first piece is already spawned at the board's spawn location and
    /// the next piece is picked; same seed, same game.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            current: PlacedTetromino::new(),
            next: Tetromino::new(),
            score: 0,
            secs_per_tick: secs_per_tick_for_score(0),
            secs_since_tick: 0.0,
            shape_placed: false,
            episode_id: 0,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    // Queries (read-only boundary for the rendering collaborator) =========

    /// Cell content at (x, y). Panics on out-of-range coordinates, matching
    /// the board's contract.
    pub fn cell_content(&self, x: i32, y: i32) -> Cell {
        self.board.content(x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece: mapped locations and color come from here
    pub fn current_piece(&self) -> &PlacedTetromino {
        &self.current
    }

    /// The upcoming piece (offsets relative to its own origin)
    pub fn next_piece(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score line for display
    pub fn score_text(&self) -> String {
        format!("score: {}", self.score)
    }

    /// How many times the session has reset after a blocked spawn
    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn secs_per_tick(&self) -> f32 {
        self.secs_per_tick
    }

    // Intents (from the input-handling collaborator) ======================

    /// Try to move the falling piece one column left
    pub fn move_left(&mut self) -> bool {
        self.attempt_move(-1, 0)
    }

    /// Try to move the falling piece one column right
    pub fn move_right(&mut self) -> bool {
        self.attempt_move(1, 0)
    }

    /// Try to rotate the falling piece clockwise
    pub fn rotate_cw(&mut self) -> bool {
        self.attempt_rotate()
    }

    /// Move the falling piece one row down; a refused drop locks it.
    ///
    /// Returns whether the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.attempt_move(0, 1) {
            true
        } else {
            self.lock();
            self.shape_placed = true;
            false
        }
    }

    /// Drop the falling piece as far as it legally goes, then lock it
    pub fn hard_drop(&mut self) {
        while self.attempt_move(0, 1) {}
        self.lock();
        self.shape_placed = true;
    }

    // Frame loop ==========================================================

    /// Advance the session by `elapsed_secs` of wall-clock time.
    ///
    /// When the accumulated time exceeds the current tick interval one
    /// gravity tick fires and the excess remainder carries over, keeping the
    /// cadence independent of frame rate. Afterwards, if a piece locked
    /// since the last call, the next piece is spawned: on success the score
    /// absorbs the removed-row count and the speed is recomputed; a blocked
    /// spawn resets the whole session (the game-over transition).
    pub fn advance(&mut self, elapsed_secs: f32) {
        self.secs_since_tick += elapsed_secs;
        if self.secs_since_tick > self.secs_per_tick {
            self.tick();
            self.secs_since_tick -= self.secs_per_tick;
        }

        if self.shape_placed {
            if self.spawn_next_shape() {
                self.pick_next_shape();
                self.score += self.board.remove_completed_rows() as u32;
                self.secs_per_tick = secs_per_tick_for_score(self.score);
            } else {
                self.episode_id = self.episode_id.wrapping_add(1);
                self.reset();
            }
            self.shape_placed = false;
        }
    }

    /// One gravity step: move down, or lock where the piece stands
    fn tick(&mut self) {
        if !self.attempt_move(0, 1) {
            self.lock();
            self.shape_placed = true;
        }
    }

    // Internals ===========================================================

    /// Start a fresh game: zero the score, reset the speed, clear the
    /// board, and spawn from a newly picked pair of pieces.
    fn reset(&mut self) {
        self.score = 0;
        self.secs_per_tick = secs_per_tick_for_score(0);
        self.secs_since_tick = 0.0;
        self.shape_placed = false;
        self.board.clear();
        self.pick_next_shape();
        self.spawn_next_shape();
        self.pick_next_shape();
    }

    /// Assign a fresh random shape to the next piece
    fn pick_next_shape(&mut self) {
        self.next.set_shape(random_kind(&mut self.rng));
    }

    /// Promote the next piece to the spawn location; reports legality
    fn spawn_next_shape(&mut self) -> bool {
        self.current.set_shape(self.next.kind());
        self.current.set_grid_loc(self.board.spawn_loc());
        self.is_position_legal(&self.current)
    }

    /// Tentatively move a copy of the piece; commit only if legal
    fn attempt_move(&mut self, dx: i32, dy: i32) -> bool {
        let mut trial = self.current;
        trial.move_by(dx, dy);
        if self.is_position_legal(&trial) {
            self.current = trial;
            true
        } else {
            false
        }
    }

    /// Tentatively rotate a copy of the piece; commit only if legal
    fn attempt_rotate(&mut self) -> bool {
        let mut trial = self.current;
        trial.rotate_cw();
        if self.is_position_legal(&trial) {
            self.current = trial;
            true
        } else {
            false
        }
    }

    /// Commit the piece's mapped locations into the board as locked cells
    fn lock(&mut self) {
        let locs = self.current.mapped_locs();
        self.board.fill_locs(&locs, Some(self.current.color()));
    }

    /// Within borders and not intersecting locked content
    fn is_position_legal(&self, shape: &PlacedTetromino) -> bool {
        Self::is_within_borders(shape) && self.board.are_locs_empty(&shape.mapped_locs())
    }

    /// Left, right, and lower borders only.
    ///
    /// y has no lower bound: pieces spawn with blocks above row 0 and are
    /// legal there. The spawn logic depends on this asymmetry.
    fn is_within_borders(shape: &PlacedTetromino) -> bool {
        shape
            .mapped_locs()
            .iter()
            .all(|loc| loc.x >= 0 && loc.x < BOARD_WIDTH as i32 && loc.y < BOARD_HEIGHT as i32)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
