//! Board tests - grid storage, spawn, and invariants

use tui_2048::core::{Board, SimpleRng, Tile};
use tui_2048::types::{GRID_CELLS, GRID_SIDE};

fn board_from(values: [[u32; GRID_SIDE]; GRID_SIDE]) -> Board {
    let mut board = Board::new();
    for (r, row) in values.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v != 0 {
                board.set(r as i8, c as i8, Some(Tile::new(v)));
            }
        }
    }
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.empty_count(), GRID_CELLS);
    assert!(!board.is_full());

    for r in 0..GRID_SIDE as i8 {
        for c in 0..GRID_SIDE as i8 {
            assert!(board.is_empty_cell(r, c), "cell ({}, {}) should be empty", r, c);
            assert!(board.get(r, c).is_none());
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert!(board.get(-1, 0).is_none());
    assert!(board.get(0, -1).is_none());
    assert!(board.get(GRID_SIDE as i8, 0).is_none());
    assert!(board.get(0, GRID_SIDE as i8).is_none());

    assert!(!Board::in_bounds(-1, 0));
    assert!(!Board::in_bounds(0, GRID_SIDE as i8));
    assert!(Board::in_bounds(0, 0));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(2, 3, Some(Tile::new(16))));
    assert_eq!(board.get(2, 3).map(|t| t.value()), Some(16));
    assert!(!board.is_empty_cell(2, 3));

    assert!(board.set(2, 3, None));
    assert!(board.is_empty_cell(2, 3));

    assert!(!board.set(-1, 0, Some(Tile::new(2))));
    assert!(!board.set(0, GRID_SIDE as i8, Some(Tile::new(2))));
}

#[test]
fn test_values_export() {
    let grid = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 64]];
    let board = board_from(grid);
    assert_eq!(board.values(), grid);
    assert_eq!(board.tile_sum(), 126);
    assert_eq!(board.max_value(), 64);
}

#[test]
fn test_spawn_only_fills_empty_cells() {
    let mut board = board_from([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
    let mut rng = SimpleRng::new(3);

    // The single empty cell must receive the spawn, and existing tiles must
    // be untouched.
    let before = board.values();
    let (r, c) = board.spawn_random(&mut rng).expect("board has an empty cell");
    assert_eq!((r, c), (2, 2));

    let after = board.values();
    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            if (row, col) == (2, 2) {
                assert!(after[row][col] == 2 || after[row][col] == 4);
            } else {
                assert_eq!(after[row][col], before[row][col]);
            }
        }
    }
}

#[test]
fn test_spawn_on_full_board_fails() {
    let mut board = board_from([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let mut rng = SimpleRng::new(3);
    assert!(board.spawn_random(&mut rng).is_none());
}

#[test]
fn test_spawn_values_are_twos_and_fours() {
    let mut rng = SimpleRng::new(77);
    for _ in 0..200 {
        let mut board = Board::new();
        let (r, c) = board.spawn_random(&mut rng).unwrap();
        let v = board.get(r as i8, c as i8).unwrap().value();
        assert!(v == 2 || v == 4, "unexpected spawn value {}", v);
    }
}

#[test]
fn test_clear_resets_board() {
    let mut board = board_from([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    board.clear();
    assert_eq!(board.empty_count(), GRID_CELLS);
    assert_eq!(board.tile_sum(), 0);
}
