//! Pieces module - shape catalog and falling-piece geometry
//!
//! The seven shapes live in one static table keyed by [`ShapeKind`]: four
//! block offsets around a local origin plus the shape's fixed color. Both
//! the geometry and any presentation logic consult the same table; shapes
//! differ only in data, never in algorithm.
//!
//! Coordinates are +x right, +y down. Rotation is a 90 degree clockwise
//! transform about the local origin, applied in place to the current offsets.

use std::fmt;

use crate::core::rng::SimpleRng;
use crate::types::{BlockColor, Point, ShapeKind};

/// Catalog entry: canonical block offsets and color for one shape kind
struct ShapeEntry {
    offsets: [Point; 4],
    color: BlockColor,
}

const fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// The shape catalog, indexed by `ShapeKind as usize`
static SHAPE_TABLE: [ShapeEntry; 7] = [
    // S
    ShapeEntry {
        offsets: [pt(0, 0), pt(-1, 0), pt(0, 1), pt(1, 1)],
        color: BlockColor::Red,
    },
    // Z
    ShapeEntry {
        offsets: [pt(0, 0), pt(0, 1), pt(1, 0), pt(-1, 1)],
        color: BlockColor::Orange,
    },
    // L
    ShapeEntry {
        offsets: [pt(0, 0), pt(0, 1), pt(0, -1), pt(1, -1)],
        color: BlockColor::Yellow,
    },
    // J
    ShapeEntry {
        offsets: [pt(0, 0), pt(0, -1), pt(0, 1), pt(-1, -1)],
        color: BlockColor::Green,
    },
    // O
    ShapeEntry {
        offsets: [pt(0, 0), pt(1, 0), pt(0, 1), pt(1, 1)],
        color: BlockColor::LightBlue,
    },
    // I
    ShapeEntry {
        offsets: [pt(0, 0), pt(0, -1), pt(0, 1), pt(0, 2)],
        color: BlockColor::DarkBlue,
    },
    // T
    ShapeEntry {
        offsets: [pt(0, 0), pt(-1, 0), pt(0, -1), pt(1, 0)],
        color: BlockColor::Purple,
    },
];

/// Canonical (unrotated) block offsets for a shape kind
pub fn block_offsets(kind: ShapeKind) -> [Point; 4] {
    SHAPE_TABLE[kind as usize].offsets
}

/// Fixed color for a shape kind
pub fn color_of(kind: ShapeKind) -> BlockColor {
    SHAPE_TABLE[kind as usize].color
}

/// Pick a shape kind uniformly at random from the injected source
pub fn random_kind(rng: &mut SimpleRng) -> ShapeKind {
    ShapeKind::KINDS[rng.next_range(ShapeKind::KINDS.len() as u32) as usize]
}

/// A falling piece: shape kind, color, and the four block offsets in their
/// current rotation state.
///
/// The offsets start from the catalog table and are mutated in place by
/// [`rotate_cw`](Tetromino::rotate_cw); [`set_shape`](Tetromino::set_shape)
/// discards any accumulated rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: ShapeKind,
    color: BlockColor,
    blocks: [Point; 4],
}

impl Tetromino {
    /// A new piece starts out as the S shape, unrotated
    pub fn new() -> Self {
        Self {
            kind: ShapeKind::S,
            color: color_of(ShapeKind::S),
            blocks: block_offsets(ShapeKind::S),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// The four block offsets in their current rotation state
    pub fn blocks(&self) -> &[Point; 4] {
        &self.blocks
    }

    /// Reset to the canonical offsets and color for `kind`
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.kind = kind;
        self.color = color_of(kind);
        self.blocks = block_offsets(kind);
    }

    /// Rotate 90 degrees clockwise about the local origin.
    ///
    /// Each offset swaps x/y then negates the new y; with +y down this is an
    /// exact integer clockwise quarter turn. Four applications restore the
    /// original offsets.
    pub fn rotate_cw(&mut self) {
        for block in &mut self.blocks {
            block.swap_xy();
            block.multiply_y(-1);
        }
    }
}

impl Default for Tetromino {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tetromino {
    /// Render a 7x7 text grid of the current offsets, for debugging
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in -3..4 {
            for x in -3..4 {
                let here = Point::new(x, -row);
                let ch = if self.blocks.contains(&here) { 'X' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A tetromino bound to an absolute grid origin.
///
/// This is the only representation the legality checks and the board ever
/// see: its [`mapped_locs`](PlacedTetromino::mapped_locs) are the piece's
/// offsets translated by the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedTetromino {
    piece: Tetromino,
    grid_loc: Point,
}

impl PlacedTetromino {
    pub fn new() -> Self {
        Self {
            piece: Tetromino::new(),
            grid_loc: Point::default(),
        }
    }

    pub fn grid_loc(&self) -> Point {
        self.grid_loc
    }

    pub fn set_grid_loc(&mut self, loc: Point) {
        self.grid_loc = loc;
    }

    /// Translate the origin by (dx, dy) in place
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.grid_loc.set_xy(self.grid_loc.x + dx, self.grid_loc.y + dy);
    }

    pub fn kind(&self) -> ShapeKind {
        self.piece.kind()
    }

    pub fn color(&self) -> BlockColor {
        self.piece.color()
    }

    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.piece.set_shape(kind);
    }

    pub fn rotate_cw(&mut self) {
        self.piece.rotate_cw();
    }

    /// The four absolute grid locations this piece occupies
    pub fn mapped_locs(&self) -> [Point; 4] {
        let origin = self.grid_loc;
        self.piece
            .blocks
            .map(|block| Point::new(block.x + origin.x, block.y + origin.y))
    }
}

impl Default for PlacedTetromino {
    fn default() -> Self {
        Self::new()
    }
}
