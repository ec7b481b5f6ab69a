//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Board dimensions (columns x rows)
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 19;

/// Tick interval bounds (seconds per gravity step)
pub const MAX_SECS_PER_TICK: f32 = 0.75;
pub const MIN_SECS_PER_TICK: f32 = 0.20;

/// How much faster each scored row makes the game (seconds per point)
pub const SECS_PER_TICK_STEP: f32 = 0.02;

/// A 2D integer coordinate.
///
/// Used both for block offsets relative to a piece origin and for absolute
/// grid locations. All mutators work in place; the type is `Copy` and meant
/// to be passed around freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Set both coordinates at once
    pub fn set_xy(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Swap x and y in place
    pub fn swap_xy(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    /// Multiply x by a factor in place
    pub fn multiply_x(&mut self, factor: i32) {
        self.x *= factor;
    }

    /// Multiply y by a factor in place
    pub fn multiply_y(&mut self, factor: i32) {
        self.y *= factor;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Tetromino shape kinds
///
/// Declaration order is the catalog table order; `as usize` indexes the
/// static shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    Z,
    L,
    J,
    O,
    I,
    T,
}

impl ShapeKind {
    /// All kinds, in table order
    pub const KINDS: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::T,
    ];
}

/// Block colors, one per shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Orange,
    Yellow,
    Green,
    LightBlue,
    DarkBlue,
    Purple,
}

impl BlockColor {
    /// Color index 0..6, the value renderers use to pick a sprite/tile
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Cell on the board (`None` = empty, `Some` = locked block of that color)
pub type Cell = Option<BlockColor>;
