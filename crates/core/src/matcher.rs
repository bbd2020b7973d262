//! Match detection.
//!
//! Rows are scanned left to right and columns top to bottom, independently.
//! Every maximal run of at least [`MIN_RUN_LENGTH`] equal gems contributes all
//! of its cells; a cell on both a horizontal and a vertical run is reported once.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::grid::Grid;
use crate::types::{Cell, Gem, Position, MIN_RUN_LENGTH};

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal line of equal gems that is long enough to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub axis: Axis,
    /// Left-most (horizontal) or top-most (vertical) cell.
    pub start: Position,
    pub len: usize,
    pub gem: Gem,
}

impl Run {
    /// Cells covered by the run, in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).map(move |k| match self.axis {
            Axis::Horizontal => Position::new(self.start.row, self.start.col + k),
            Axis::Vertical => Position::new(self.start.row + k, self.start.col),
        })
    }
}

/// Set of matched positions, iterated in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet {
    positions: BTreeSet<Position>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        self.positions.iter().copied()
    }

    /// Distinct columns that hold at least one matched cell, ascending.
    pub fn columns(&self) -> BTreeSet<usize> {
        self.positions.iter().map(|p| p.col).collect()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for MatchSet {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        self.positions.extend(iter);
    }
}

/// Walk one line and report every run of `MIN_RUN_LENGTH` or more.
///
/// Empty cells never extend a run.
fn scan_line(len: usize, cell_at: impl Fn(usize) -> Cell, mut emit: impl FnMut(usize, usize, Gem)) {
    let mut start = 0;
    while start < len {
        let Some(gem) = cell_at(start) else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < len && cell_at(end) == Some(gem) {
            end += 1;
        }
        if end - start >= MIN_RUN_LENGTH {
            emit(start, end - start, gem);
        }
        start = end;
    }
}

/// All clearing runs on the grid: rows first (top to bottom), then columns (left to right).
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let rows = grid.rows();
    let cols = grid.cols();
    let cells = grid.cells();
    let mut runs = Vec::new();

    for row in 0..rows {
        scan_line(
            cols,
            |c| cells[row * cols + c],
            |start, len, gem| {
                runs.push(Run {
                    axis: Axis::Horizontal,
                    start: Position::new(row, start),
                    len,
                    gem,
                })
            },
        );
    }

    for col in 0..cols {
        scan_line(
            rows,
            |r| cells[r * cols + col],
            |start, len, gem| {
                runs.push(Run {
                    axis: Axis::Vertical,
                    start: Position::new(start, col),
                    len,
                    gem,
                })
            },
        );
    }

    runs
}

/// Union of every clearing run. Empty iff the grid is quiescent.
pub fn find_matches(grid: &Grid) -> MatchSet {
    let mut set = MatchSet::new();
    for run in find_runs(grid) {
        set.extend(run.positions());
    }
    set
}

/// True if any clearing run exists.
pub fn has_match(grid: &Grid) -> bool {
    !find_runs(grid).is_empty()
}

/// Length of the longest horizontal or vertical line of equal gems through `pos`.
///
/// Returns 0 for an empty or off-grid cell.
pub fn line_length_through(grid: &Grid, pos: Position) -> usize {
    let Ok(Some(gem)) = grid.get(pos) else {
        return 0;
    };
    let same = |row: usize, col: usize| grid.get(Position::new(row, col)) == Ok(Some(gem));

    let mut horizontal = 1;
    let mut c = pos.col;
    while c > 0 && same(pos.row, c - 1) {
        horizontal += 1;
        c -= 1;
    }
    let mut c = pos.col + 1;
    while c < grid.cols() && same(pos.row, c) {
        horizontal += 1;
        c += 1;
    }

    let mut vertical = 1;
    let mut r = pos.row;
    while r > 0 && same(r - 1, pos.col) {
        vertical += 1;
        r -= 1;
    }
    let mut r = pos.row + 1;
    while r < grid.rows() && same(r, pos.col) {
        vertical += 1;
        r += 1;
    }

    horizontal.max(vertical)
}

/// Would swapping `a` and `b` complete a run through either cell?
///
/// The grid is swapped, probed locally and swapped back, so it is unchanged on
/// return. On a quiescent grid this agrees with a full [`find_matches`] after
/// the swap, because any new run must pass through a moved cell.
pub fn swap_creates_match(grid: &mut Grid, a: Position, b: Position) -> Result<bool, EngineError> {
    grid.swap(a, b)?;
    let hit = line_length_through(grid, a) >= MIN_RUN_LENGTH
        || line_length_through(grid, b) >= MIN_RUN_LENGTH;
    grid.swap(a, b)?;
    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_row_run_of_three() {
        let grid = Grid::from_text("RRRB").unwrap();
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                axis: Axis::Horizontal,
                start: p(0, 0),
                len: 3,
                gem: Gem::Red,
            }]
        );
    }

    #[test]
    fn test_run_at_line_end_is_reported() {
        let grid = Grid::from_text("BGGGG").unwrap();
        let set = find_matches(&grid);
        assert_eq!(set.to_vec(), vec![p(0, 1), p(0, 2), p(0, 3), p(0, 4)]);
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let grid = Grid::from_text("RR.RR").unwrap();
        assert!(find_matches(&grid).is_empty());
    }

    #[test]
    fn test_cross_shape_counts_shared_cell_once() {
        let grid = Grid::from_text(
            "BRB
             RRR
             BRB",
        )
        .unwrap();
        let set = find_matches(&grid);
        assert_eq!(set.len(), 5);
        assert!(set.contains(p(1, 1)));
        assert_eq!(find_runs(&grid).len(), 2);
    }

    #[test]
    fn test_columns_are_listed_once() {
        let grid = Grid::from_text("GGG\nBRY").unwrap();
        let cols: Vec<usize> = find_matches(&grid).columns().into_iter().collect();
        assert_eq!(cols, vec![0, 1, 2]);
    }

    #[test]
    fn test_line_length_through() {
        let grid = Grid::from_text(
            "BRB
             BRR
             BRB",
        )
        .unwrap();
        assert_eq!(line_length_through(&grid, p(1, 0)), 3);
        assert_eq!(line_length_through(&grid, p(1, 2)), 2);
        assert_eq!(line_length_through(&grid, p(9, 9)), 0);
    }

    #[test]
    fn test_swap_creates_match_leaves_grid_untouched() {
        let mut grid = Grid::from_text(
            "RBRR
             GYGY",
        )
        .unwrap();
        let before = grid.clone();
        assert!(swap_creates_match(&mut grid, p(0, 0), p(0, 1)).unwrap());
        assert!(!swap_creates_match(&mut grid, p(1, 0), p(1, 1)).unwrap());
        assert_eq!(grid, before);
    }
}
