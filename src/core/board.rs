//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a
//! color id. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the visible board (y < 0) are legal piece
//! positions: they never collide with occupied cells but still clamp
//! against the side walls.

use arrayvec::ArrayVec;

use crate::core::piece::Block;
use crate::types::{Cell, CellColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision predicate for a translated piece layout. This is the
    /// single source of truth for every movement, rotation, and spawn
    /// legality check.
    ///
    /// A candidate cell collides if it leaves the side walls, reaches the
    /// floor, or lands on an occupied cell. Cells above the visible board
    /// (row < 0) only collide with the walls.
    pub fn collides(&self, blocks: &[Block; 4], dx: i8, dy: i8) -> bool {
        blocks.iter().any(|&(x, y)| {
            let nx = x + dx;
            let ny = y + dy;
            nx < 0
                || nx >= BOARD_WIDTH as i8
                || ny >= BOARD_HEIGHT as i8
                || (ny >= 0 && self.is_occupied(nx, ny))
        })
    }

    /// Write a piece's cells into the grid. Cells above the visible board
    /// (row < 0) are dropped, never written.
    pub fn lock(&mut self, blocks: &[Block; 4], color: CellColor) {
        for &(x, y) in blocks {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row y: shift every row above it down by one and empty the
    /// top row. Rows below y are untouched.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows, compacting after each removal, and return the
    /// cleared row indices in scan order (top to bottom).
    ///
    /// A single top-to-bottom pass is equivalent to rescanning from the
    /// top after each removal: removing row y only touches rows 0..=y, so
    /// a full row below the scan position stays full until reached.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
