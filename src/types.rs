//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (in milliseconds)
pub const BASE_DROP_MS: u32 = 500;
pub const LEVEL_SPEEDUP_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 50;

/// Scoring
pub const SCORE_PER_LINE: u32 = 100;
pub const LEVEL_UP_SCORE_STEP: u32 = 500;

/// Piece shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All variants, in spawn-table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Cell color identifier, drawn independently from the shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl CellColor {
    pub const COUNT: u32 = 6;

    pub const ALL: [CellColor; 6] = [
        CellColor::Red,
        CellColor::Green,
        CellColor::Blue,
        CellColor::Yellow,
        CellColor::Magenta,
        CellColor::Cyan,
    ];

    /// Color for index in [0, COUNT)
    pub fn from_index(index: u32) -> CellColor {
        Self::ALL[(index as usize) % Self::ALL.len()]
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<CellColor>;

/// Input commands delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

/// Result of a gravity tick
///
/// `Stop` tells the host scheduler to stop invoking
/// [`tick`](crate::core::GameState::tick); it is returned on the tick
/// that sets game over and on every tick after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickOutcome {
    Continue,
    Stop,
}

impl TickOutcome {
    pub fn is_stop(&self) -> bool {
        matches!(self, TickOutcome::Stop)
    }
}
