//! Piece module - shape spawn table, translation and pivot rotation
//!
//! A piece is 4 absolute board cells plus a color drawn independently from
//! the shape. Rotation is a plain 90-degree clockwise turn about the
//! piece's second cell; there are no wall kicks and no per-shape rotation
//! states, so asymmetric shapes can drift from their canonical form.

use crate::core::rng::RandomSource;
use crate::types::{CellColor, ShapeKind};

/// One board cell position occupied by a piece
pub type Block = (i8, i8);

/// Active falling piece: 4 absolute cells + color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub blocks: [Block; 4],
    pub color: CellColor,
}

/// Initial cell layout for each shape variant.
///
/// The second cell doubles as the rotation pivot.
pub fn spawn_blocks(kind: ShapeKind) -> [Block; 4] {
    match kind {
        ShapeKind::I => [(4, 0), (5, 0), (6, 0), (7, 0)],
        ShapeKind::O => [(5, 0), (6, 0), (5, 1), (6, 1)],
        ShapeKind::T => [(5, 0), (4, 1), (5, 1), (6, 1)],
        ShapeKind::S => [(5, 0), (6, 0), (4, 1), (5, 1)],
        ShapeKind::Z => [(4, 0), (5, 0), (5, 1), (6, 1)],
        ShapeKind::J => [(4, 0), (4, 1), (5, 1), (6, 1)],
        ShapeKind::L => [(6, 0), (4, 1), (5, 1), (6, 1)],
    }
}

impl Piece {
    /// Spawn a new piece: shape uniform among the 7 variants, color
    /// uniform among the 6 colors (shape drawn first).
    pub fn spawn(rng: &mut dyn RandomSource) -> Self {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = CellColor::from_index(rng.next_range(CellColor::COUNT));
        Self {
            kind,
            blocks: spawn_blocks(kind),
            color,
        }
    }

    /// Build a piece at a given layout (tests and scenario setup).
    pub fn with_blocks(kind: ShapeKind, blocks: [Block; 4], color: CellColor) -> Self {
        Self {
            kind,
            blocks,
            color,
        }
    }

    /// The piece translated by (dx, dy). No legality check here; the
    /// board's collision predicate is the sole gate.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        let mut blocks = self.blocks;
        for block in &mut blocks {
            block.0 += dx;
            block.1 += dy;
        }
        Self { blocks, ..*self }
    }

    /// The piece rotated 90 degrees clockwise about its second cell.
    ///
    /// For each cell with offset (rx, ry) from the pivot, the rotated
    /// cell is (pivot.x - ry, pivot.y + rx). The pivot maps to itself,
    /// so it stays the second cell and four rotations restore the
    /// original layout exactly.
    pub fn rotated(&self) -> Self {
        let (px, py) = self.blocks[1];
        let mut blocks = self.blocks;
        for block in &mut blocks {
            let rx = block.0 - px;
            let ry = block.1 - py;
            *block = (px - ry, py + rx);
        }
        Self { blocks, ..*self }
    }
}
