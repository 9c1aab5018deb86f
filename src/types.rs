//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length (the grid is GRID_SIDE x GRID_SIDE)
pub const GRID_SIDE: usize = 4;
/// Total number of cells on the board
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// The tile value that wins the game
pub const TARGET_TILE: u32 = 2048;

/// A spawned tile is a 4 with probability 1/SPAWN_FOUR_ONE_IN, else a 2
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Upper bound on merges a single move can produce (16 tiles pair down to 8)
pub const MAX_MERGES_PER_MOVE: usize = GRID_CELLS / 2;

/// The four movement directions.
///
/// Each direction carries the parameters of the shared slide routine:
/// a traversal origin and a (row, col) step. Scanning linear indices as
/// `|origin - i|` visits the cells farthest in the movement direction
/// first, which is what gives merges their nearest-neighbor priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row delta of a single slide step.
    pub fn row_step(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Column delta of a single slide step.
    pub fn col_step(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Linear traversal origin: 0 counts up, GRID_CELLS - 1 counts down.
    pub fn scan_origin(self) -> usize {
        match self {
            Direction::Up | Direction::Left => 0,
            Direction::Down | Direction::Right => GRID_CELLS - 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    NewGame,
}

/// Game lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Initial state, before the first game is started.
    Start,
    Running,
    Won,
    Over,
}

impl GameStatus {
    /// Whether gameplay input (directional moves) is accepted.
    pub fn accepts_moves(self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_steps_are_unit_vectors() {
        for dir in Direction::ALL {
            let (dr, dc) = (dir.row_step(), dir.col_step());
            assert_eq!(dr.abs() + dc.abs(), 1, "{:?} must step one cell", dir);
        }
    }

    #[test]
    fn test_scan_origin_matches_movement_sense() {
        // Directions that move toward lower indices scan from 0 upward,
        // the others count down from the last cell.
        assert_eq!(Direction::Up.scan_origin(), 0);
        assert_eq!(Direction::Left.scan_origin(), 0);
        assert_eq!(Direction::Down.scan_origin(), GRID_CELLS - 1);
        assert_eq!(Direction::Right.scan_origin(), GRID_CELLS - 1);
    }

    #[test]
    fn test_only_running_accepts_moves() {
        assert!(GameStatus::Running.accepts_moves());
        assert!(!GameStatus::Start.accepts_moves());
        assert!(!GameStatus::Won.accepts_moves());
        assert!(!GameStatus::Over.accepts_moves());
    }
}
