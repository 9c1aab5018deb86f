//! Game state module - the move engine and the game lifecycle
//!
//! This module ties together board, tiles, and RNG. One direction-agnostic
//! slide routine implements all four moves; the state machine applies the
//! post-move policy (clear merge flags, spawn, win/lose transitions).

use arrayvec::ArrayVec;

use crate::core::{Board, SimpleRng};
use crate::types::{
    Direction, GameAction, GameStatus, GRID_CELLS, GRID_SIDE, MAX_MERGES_PER_MOVE, TARGET_TILE,
};

/// Record of the last successful move (consumed by observers).
///
/// `merges` holds the value of every tile produced by a merge during the
/// move, in traversal order. `spawned` is the cell that received the new
/// random tile, `None` on the winning move (no spawn happens once the
/// target is reached).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    pub merges: ArrayVec<u32, MAX_MERGES_PER_MOVE>,
    pub spawned: Option<(usize, usize)>,
}

/// Complete game state: board, counters, lifecycle status, RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    score: u32,
    /// Largest value produced by a merge this game.
    highest: u32,
    rng: SimpleRng,
    last_event: Option<MoveEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed. The board stays empty
    /// until the first new-game action.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Start,
            score: 0,
            highest: 0,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    /// Create a running game over a prepared board (test and bench
    /// scaffolding). `highest` is derived from the board's largest tile;
    /// the score starts at 0.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let highest = board.max_value();
        Self {
            board,
            status: GameStatus::Running,
            score: 0,
            highest,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highest(&self) -> u32 {
        self.highest
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The last successful move, if any.
    pub fn last_event(&self) -> Option<&MoveEvent> {
        self.last_event.as_ref()
    }

    /// Start a new game: reset counters, clear the board, spawn the two
    /// opening tiles, enter `Running`.
    ///
    /// A no-op while a game is already running (the original's semantics);
    /// returns whether a new game actually started. The RNG carries on from
    /// its current state so restarted games do not replay the same spawns.
    pub fn start_game(&mut self) -> bool {
        if self.status == GameStatus::Running {
            return false;
        }

        self.score = 0;
        self.highest = 0;
        self.board.clear();
        self.last_event = None;

        let _ = self.board.spawn_random(&mut self.rng);
        let _ = self.board.spawn_random(&mut self.rng);

        self.status = GameStatus::Running;
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::NewGame => self.start_game(),
        }
    }

    /// Attempt a directional move and run the post-move policy.
    ///
    /// Returns whether the board changed. On a change: if the target has not
    /// been reached, merge flags are cleared, one tile spawns, and the game
    /// ends in `Over` when no direction can move; if a merge reached the
    /// target, the game is `Won` immediately, regardless of remaining moves.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.status.accepts_moves() {
            return false;
        }

        let (moved, merges) = self.slide(direction);
        if !moved {
            return false;
        }

        let mut spawned = None;
        if self.highest < TARGET_TILE {
            self.board.clear_merged();
            spawned = self.board.spawn_random(&mut self.rng);
            debug_assert!(spawned.is_some(), "a successful move leaves an empty cell");
            if !self.moves_available() {
                self.status = GameStatus::Over;
            }
        } else {
            self.status = GameStatus::Won;
        }

        self.last_event = Some(MoveEvent {
            direction,
            merges,
            spawned,
        });
        true
    }

    /// Whether any of the four directions would change the board.
    pub fn moves_available(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_slide(dir))
    }

    /// Pure availability query: would a move in `direction` change the
    /// board? Never mutates. A single-step check per tile is equivalent to
    /// the full walk - any longer slide starts with a step into an empty
    /// cell.
    pub fn can_slide(&self, direction: Direction) -> bool {
        let (dr, dc) = (direction.row_step(), direction.col_step());
        let origin = direction.scan_origin();

        for i in 0..GRID_CELLS {
            let j = origin.abs_diff(i);
            let (row, col) = ((j / GRID_SIDE) as i8, (j % GRID_SIDE) as i8);

            let Some(tile) = self.board.get(row, col) else {
                continue;
            };

            let (next_row, next_col) = (row + dr, col + dc);
            if !Board::in_bounds(next_row, next_col) {
                continue;
            }
            match self.board.get(next_row, next_col) {
                None => return true,
                Some(next) if next.can_merge_with(&tile) => return true,
                Some(_) => {}
            }
        }

        false
    }

    /// Slide and merge every tile toward `direction`.
    ///
    /// Cells are visited farthest-first (see `Direction::scan_origin`), so a
    /// tile always merges into the nearest eligible neighbor. Each tile
    /// advances through empty cells until it hits the edge, merges once, or
    /// is blocked.
    fn slide(&mut self, direction: Direction) -> (bool, ArrayVec<u32, MAX_MERGES_PER_MOVE>) {
        let (dr, dc) = (direction.row_step(), direction.col_step());
        let origin = direction.scan_origin();

        let mut moved = false;
        let mut merges = ArrayVec::new();

        for i in 0..GRID_CELLS {
            let j = origin.abs_diff(i);
            let (mut row, mut col) = ((j / GRID_SIDE) as i8, (j % GRID_SIDE) as i8);

            let Some(tile) = self.board.get(row, col) else {
                continue;
            };

            let (mut next_row, mut next_col) = (row + dr, col + dc);
            while Board::in_bounds(next_row, next_col) {
                match self.board.get(next_row, next_col) {
                    None => {
                        self.board.set(next_row, next_col, Some(tile));
                        self.board.set(row, col, None);
                        row = next_row;
                        col = next_col;
                        next_row += dr;
                        next_col += dc;
                        moved = true;
                    }
                    Some(mut next) => {
                        if let Some(value) = next.merge_from(tile) {
                            self.board.set(next_row, next_col, Some(next));
                            self.board.set(row, col, None);
                            if value > self.highest {
                                self.highest = value;
                            }
                            self.score += value;
                            merges.push(value);
                            moved = true;
                        }
                        break;
                    }
                }
            }
        }

        (moved, merges)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
