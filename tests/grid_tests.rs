//! Grid tests - storage, gravity and refill primitives

mod common;

use common::ScriptedRng;
use gemswap::core::{EngineError, FallMove, Grid, SimpleRng};
use gemswap::types::{Gem, Position};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(4, 6);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 6);
    assert!(grid.cells().iter().all(|c| c.is_none()));
    assert!(!grid.is_full());
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new(3, 3);
    let err = grid.get(p(3, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfBounds {
            pos: p(3, 0),
            rows: 3,
            cols: 3
        }
    );
    assert!(grid.get(p(0, 3)).is_err());
    assert!(grid.get(p(2, 2)).is_ok());
}

#[test]
fn test_swap_exchanges_cells() {
    let mut grid = Grid::from_text("RB\nGY").unwrap();
    grid.swap(p(0, 0), p(1, 1)).unwrap();
    assert_eq!(grid.to_string(), "YB\nGR");
    assert!(grid.swap(p(0, 0), p(5, 5)).is_err());
    // Failed swap leaves the grid alone.
    assert_eq!(grid.to_string(), "YB\nGR");
}

#[test]
fn test_clear_checks_all_positions_first() {
    let mut grid = Grid::from_text("RBG").unwrap();
    assert!(grid.clear([p(0, 0), p(0, 9)]).is_err());
    assert_eq!(grid.to_string(), "RBG");

    grid.clear([p(0, 0), p(0, 2)]).unwrap();
    assert_eq!(grid.to_string(), ".B.");
}

#[test]
fn test_collapse_column_preserves_order() {
    let mut grid = Grid::from_text(
        "R
         .
         B
         .
         G",
    )
    .unwrap();
    let fall = grid.collapse_column(0).unwrap();
    assert_eq!(grid.to_string(), ".\n.\nR\nB\nG");
    assert_eq!(fall.vacated, 2);
    assert_eq!(
        fall.moves,
        vec![
            FallMove { from_row: 2, to_row: 3 },
            FallMove { from_row: 0, to_row: 2 },
        ]
    );
}

#[test]
fn test_collapse_full_column_is_still() {
    let mut grid = Grid::from_text("R\nB\nG").unwrap();
    let fall = grid.collapse_column(0).unwrap();
    assert!(fall.is_still());
    assert_eq!(fall.vacated, 0);
    assert!(grid.collapse_column(1).is_err());
}

#[test]
fn test_fill_empty_is_column_major() {
    let mut grid = Grid::from_text("..\n.R").unwrap();
    let mut rng = ScriptedRng::new(&[Gem::Blue, Gem::Green, Gem::Orange]);
    let fills = grid.fill_empty(&mut rng, 7);

    let order: Vec<Position> = fills.iter().map(|f| f.pos).collect();
    assert_eq!(order, vec![p(0, 0), p(1, 0), p(0, 1)]);
    assert_eq!(grid.to_string(), "BO\nGR");
    assert!(grid.is_full());
}

#[test]
fn test_fill_empty_respects_symbol_count() {
    let mut grid = Grid::new(6, 6);
    let mut rng = SimpleRng::new(99);
    grid.fill_empty(&mut rng, 3);
    assert!(grid
        .cells()
        .iter()
        .all(|c| matches!(c, Some(Gem::Blue | Gem::Green | Gem::Orange))));
}

#[test]
fn test_column_mass_conservation() {
    let mut grid = Grid::from_text(
        "RB.
         .GY
         W.O",
    )
    .unwrap();
    let mut before = Vec::new();
    for col in 0..3 {
        grid.collapse_column(col).unwrap();
        before.push(grid.filled_in_column(col));
    }
    let fills = grid.fill_empty(&mut SimpleRng::new(5), 7);
    for col in 0..3 {
        let filled = fills.iter().filter(|f| f.pos.col == col).count();
        assert_eq!(before[col] + filled, 3);
    }
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    let err = Grid::from_rows(vec![vec![Some(Gem::Red)], vec![]]).unwrap_err();
    assert_eq!(err.code(), "invalid_configuration");
    assert!(Grid::from_text("RX").is_err());
}

#[test]
fn test_neighbors_at_corner() {
    let grid = Grid::new(3, 3);
    let n: Vec<Position> = grid.neighbors(p(0, 0)).into_iter().collect();
    assert_eq!(n, vec![p(1, 0), p(0, 1)]);
    assert_eq!(grid.neighbors(p(1, 1)).len(), 4);
    assert!(grid.neighbors(p(7, 7)).is_empty());
}
