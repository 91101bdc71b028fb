//! Game state module - manages the complete game state
//!
//! Ties together the board, the active piece, and the RNG, and owns the
//! score/level/interval progression. The board's collision predicate gates
//! every mutation, so all operations here are total: rejected moves and
//! game over are ordinary return values, not errors.

use crate::core::{Board, Piece, RandomSource, SimpleRng};
use crate::types::{
    Command, TickOutcome, BASE_DROP_MS, LEVEL_SPEEDUP_MS, LEVEL_UP_SCORE_STEP, MIN_DROP_MS,
    SCORE_PER_LINE,
};

/// Complete game state, owned by the host and passed by reference to
/// every operation. No process-wide state anywhere.
pub struct GameState {
    board: Board,
    active: Piece,
    rng: Box<dyn RandomSource>,
    score: u32,
    level: u32,
    /// Milliseconds between gravity ticks. Written only here (on
    /// level-up); the host scheduler reads it after every tick.
    drop_interval_ms: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_rng(Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game drawing pieces from the given random source
    pub fn with_rng(mut rng: Box<dyn RandomSource>) -> Self {
        let active = Piece::spawn(rng.as_mut());
        Self {
            board: Board::new(),
            active,
            rng,
            score: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval; the host re-reads this after every tick
    /// and reschedules when it changed.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Mutable board access for scenario staging in tests. Gameplay code
    /// mutates the board only through lock-in and line clears.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whether the active piece would collide after a (dx, dy) translation
    pub fn collides(&self, dx: i8, dy: i8) -> bool {
        self.board.collides(&self.active.blocks, dx, dy)
    }

    /// Translate the active piece if the target position is free.
    /// A rejected move is silent: state unchanged, returns false.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.collides(dx, dy) {
            return false;
        }
        self.active = self.active.translated(dx, dy);
        true
    }

    /// Rotate the active piece clockwise about its second cell if the
    /// rotated layout is free. Rejected rotations are silent.
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if self.board.collides(&candidate.blocks, 0, 0) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Apply one input command. Commands arriving after game over are
    /// refused without touching any state.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::MoveDown => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Gravity tick. Drops the active piece one row; when it cannot drop,
    /// locks it into the board, clears full rows, and spawns the next
    /// piece. Returns `Stop` once the game is over so the host scheduler
    /// stops invoking it.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Stop;
        }

        if self.try_move(0, 1) {
            return TickOutcome::Continue;
        }

        // Piece is grounded: lock, clear, respawn.
        self.board.lock(&self.active.blocks, self.active.color);
        self.clear_lines();

        self.active = Piece::spawn(self.rng.as_mut());
        if self.board.collides(&self.active.blocks, 0, 0) {
            self.game_over = true;
            return TickOutcome::Stop;
        }

        TickOutcome::Continue
    }

    /// Clear full rows, scoring each one. After each row's award the
    /// running score is checked against the level-up step; crossing it
    /// bumps the level and tightens the drop interval, so a multi-row
    /// clear at a boundary can level up more than once.
    fn clear_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        for _ in 0..cleared.len() {
            self.score += SCORE_PER_LINE;
            if self.score % LEVEL_UP_SCORE_STEP == 0 {
                self.level += 1;
                self.drop_interval_ms =
                    BASE_DROP_MS.saturating_sub(self.level * LEVEL_SPEEDUP_MS).max(MIN_DROP_MS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::spawn_blocks;
    use crate::types::{CellColor, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn fill_row(state: &mut GameState, y: i8, skip_x: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != skip_x {
                state.board_mut().set(x, y, Some(CellColor::Red));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS);
        // The first piece is spawned at construction.
        assert_eq!(state.active().blocks, spawn_blocks(state.active().kind));
    }

    #[test]
    fn test_try_move_walls() {
        let mut state = GameState::new(12345);

        // Push left until the wall rejects the move.
        let mut moved = 0;
        while state.try_move(-1, 0) {
            moved += 1;
            assert!(moved <= BOARD_WIDTH as u32);
        }
        let leftmost = state.active().blocks.iter().map(|b| b.0).min().unwrap();
        assert_eq!(leftmost, 0);

        // Rejected move leaves the piece unchanged.
        let before = *state.active();
        assert!(!state.try_move(-1, 0));
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_try_move_down_to_floor() {
        let mut state = GameState::new(12345);

        while state.try_move(0, 1) {}
        let bottom = state.active().blocks.iter().map(|b| b.1).max().unwrap();
        assert_eq!(bottom, BOARD_HEIGHT as i8 - 1);
    }

    #[test]
    fn test_try_rotate_vetoed_by_occupied_cell() {
        let mut state = GameState::new(12345);
        state.active = Piece::with_blocks(
            ShapeKind::T,
            spawn_blocks(ShapeKind::T),
            CellColor::Magenta,
        );

        // The T's clockwise rotation lands its top cell on (5, 2).
        state.board_mut().set(5, 2, Some(CellColor::Red));
        let before = *state.active();
        assert!(!state.try_rotate());
        assert_eq!(*state.active(), before);

        // Free the cell and the same rotation goes through.
        state.board_mut().set(5, 2, None);
        assert!(state.try_rotate());
        assert_eq!(
            state.active().blocks,
            [(5, 2), (4, 1), (4, 2), (4, 3)]
        );
    }

    #[test]
    fn test_handle_command_refused_after_game_over() {
        let mut state = GameState::new(12345);
        state.game_over = true;

        let before = *state.active();
        assert!(!state.handle_command(Command::MoveLeft));
        assert!(!state.handle_command(Command::MoveRight));
        assert!(!state.handle_command(Command::MoveDown));
        assert!(!state.handle_command(Command::Rotate));
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut state = GameState::new(12345);
        let before = state.active().blocks;

        assert_eq!(state.tick(), TickOutcome::Continue);
        let after = state.active().blocks;
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!((a.0, a.1), (b.0, b.1 + 1));
        }
    }

    #[test]
    fn test_tick_is_noop_after_game_over() {
        let mut state = GameState::new(12345);
        state.game_over = true;

        let before = state.active().blocks;
        assert_eq!(state.tick(), TickOutcome::Stop);
        assert_eq!(state.active().blocks, before);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_lock_spawns_replacement_piece() {
        let mut state = GameState::new(12345);

        // Drop to the floor, then one more tick locks and respawns.
        while state.try_move(0, 1) {}
        let locked = *state.active();
        assert_eq!(state.tick(), TickOutcome::Continue);

        // Locked cells are on the board now.
        for &(x, y) in &locked.blocks {
            assert_eq!(state.board().get(x, y), Some(Some(locked.color)));
        }
        // And a fresh piece sits at its spawn layout.
        assert_eq!(state.active().blocks, spawn_blocks(state.active().kind));
    }

    #[test]
    fn test_single_line_clear_scores() {
        let mut state = GameState::new(12345);
        fill_row(&mut state, 19, None);

        state.clear_lines();
        assert_eq!(state.score(), 100);
        assert_eq!(state.level(), 1);
        assert!(!state.board().is_row_full(19));
    }

    #[test]
    fn test_level_up_at_score_step() {
        let mut state = GameState::new(12345);
        state.score = 400;
        fill_row(&mut state, 19, None);

        state.clear_lines();
        assert_eq!(state.score(), 500);
        assert_eq!(state.level(), 2);
        assert_eq!(
            state.drop_interval_ms(),
            BASE_DROP_MS - 2 * LEVEL_SPEEDUP_MS
        );
    }

    #[test]
    fn test_quad_clear_across_level_boundary() {
        let mut state = GameState::new(12345);
        state.score = 400;
        for y in 16..20 {
            fill_row(&mut state, y, None);
        }

        state.clear_lines();
        // 400 + 4*100 crosses 500 once; the next boundary is 1000.
        assert_eq!(state.score(), 800);
        assert_eq!(state.level(), 2);
    }

    #[test]
    fn test_interval_never_drops_below_floor() {
        let mut state = GameState::new(12345);
        // Score a long way past every speedup step.
        for round in 0..12 {
            state.score = 400 + round * 500;
            fill_row(&mut state, 19, None);
            state.clear_lines();
        }
        assert!(state.level() > 9);
        assert_eq!(state.drop_interval_ms(), MIN_DROP_MS);
    }

    #[test]
    fn test_spawn_collision_sets_game_over() {
        let mut state = GameState::new(12345);

        // Block the spawn band (columns 4..=7, rows 0..=1) so any
        // replacement piece collides; no row becomes full.
        for y in 0..2 {
            for x in 4..8 {
                state.board_mut().set(x, y, Some(CellColor::Cyan));
            }
        }
        // Ground the active piece far from the spawn band: replace it with
        // one already resting on the floor.
        state.active = Piece::with_blocks(
            ShapeKind::O,
            [(0, 18), (1, 18), (0, 19), (1, 19)],
            CellColor::Green,
        );

        assert_eq!(state.tick(), TickOutcome::Stop);
        assert!(state.game_over());
        // Later ticks stay no-ops.
        assert_eq!(state.tick(), TickOutcome::Stop);
    }
}
