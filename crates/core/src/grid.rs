//! Grid module - storage and primitive mutation
//!
//! The grid is a rows x cols array of cells stored flat in row-major order.
//! Row 0 is the top; gravity pulls gems toward the highest row index.
//! The grid knows nothing about matching rules: it only swaps, clears,
//! collapses and refills on request.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::step::{ColumnFall, FallMove, Fill};
use crate::types::{Cell, Gem, Position};

/// The game grid - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a grid from nested rows (top row first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidConfiguration(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(EngineError::InvalidConfiguration(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a text layout: one line per row, one gem letter per cell, `.` for empty.
    ///
    /// Whitespace around lines is ignored, so indented raw strings work.
    ///
    /// ```
    /// use gemswap_core::Grid;
    /// use gemswap_types::{Gem, Position};
    ///
    /// let grid = Grid::from_text("BGB\nR.W").unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.get(Position::new(1, 2)).unwrap(), Some(Gem::White));
    /// assert_eq!(grid.get(Position::new(1, 1)).unwrap(), None);
    /// ```
    pub fn from_text(text: &str) -> Result<Self, EngineError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                if ch == '.' {
                    row.push(None);
                    continue;
                }
                let gem = Gem::from_str(&ch.to_string()).ok_or_else(|| {
                    EngineError::InvalidConfiguration(format!("unknown gem letter '{}'", ch))
                })?;
                row.push(Some(gem));
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    fn checked_index(&self, pos: Position) -> Result<usize, EngineError> {
        self.index(pos).ok_or(EngineError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `pos` lies on the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Get the cell at `pos`
    pub fn get(&self, pos: Position) -> Result<Cell, EngineError> {
        self.checked_index(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `pos`
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), EngineError> {
        let idx = self.checked_index(pos)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Exchange two cells. No adjacency check.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), EngineError> {
        let ia = self.checked_index(a)?;
        let ib = self.checked_index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Empty every listed position
    ///
    /// All positions are checked before any cell changes.
    pub fn clear<I>(&mut self, positions: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = Position>,
        I::IntoIter: Clone,
    {
        let iter = positions.into_iter();
        for pos in iter.clone() {
            self.checked_index(pos)?;
        }
        for pos in iter {
            let idx = pos.row * self.cols + pos.col;
            self.cells[idx] = None;
        }
        Ok(())
    }

    /// Compact a column toward the bottom, preserving gem order
    ///
    /// Two-pointer pass from the bottom up; vacated cells end up empty at the top.
    pub fn collapse_column(&mut self, col: usize) -> Result<ColumnFall, EngineError> {
        if col >= self.cols {
            return Err(EngineError::OutOfBounds {
                pos: Position::new(0, col),
                rows: self.rows,
                cols: self.cols,
            });
        }

        let cols = self.cols;
        let mut moves = Vec::new();
        let mut write = self.rows;

        for read in (0..self.rows).rev() {
            let src = read * cols + col;
            if let Some(gem) = self.cells[src] {
                write -= 1;
                if write != read {
                    self.cells[write * cols + col] = Some(gem);
                    self.cells[src] = None;
                    moves.push(FallMove {
                        from_row: read,
                        to_row: write,
                    });
                }
            }
        }

        Ok(ColumnFall {
            col,
            moves,
            vacated: write,
        })
    }

    /// Put a random gem into every empty cell
    ///
    /// Cells are visited column by column, top to bottom, which is also the
    /// order of the returned fills and of the draws taken from `rng`.
    pub fn fill_empty<R>(&mut self, rng: &mut R, symbol_count: u8) -> Vec<Fill>
    where
        R: RandomSource + ?Sized,
    {
        let mut fills = Vec::new();
        for col in 0..self.cols {
            for row in 0..self.rows {
                let idx = row * self.cols + col;
                if self.cells[idx].is_none() {
                    let gem = rng.next_gem(symbol_count);
                    self.cells[idx] = Some(gem);
                    fills.push(Fill {
                        pos: Position::new(row, col),
                        gem,
                    });
                }
            }
        }
        fills
    }

    /// Overwrite every cell with a fresh random gem (row-major draws)
    pub fn randomize<R>(&mut self, rng: &mut R, symbol_count: u8)
    where
        R: RandomSource + ?Sized,
    {
        for cell in &mut self.cells {
            *cell = Some(rng.next_gem(symbol_count));
        }
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of non-empty cells in `col` (0 if off-grid)
    pub fn filled_in_column(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        (0..self.rows)
            .filter(|row| self.cells[row * self.cols + col].is_some())
            .count()
    }

    /// In-bounds orthogonal neighbours (up, down, left, right)
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        if !self.contains(pos) {
            return out;
        }
        if pos.row > 0 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        out
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice (empty slice if off-grid)
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Encode cells as bytes: 0 for empty, gem index + 1 otherwise
    pub fn write_u8_cells(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|c| c.map(|g| g.index() as u8 + 1).unwrap_or(0)),
        );
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in self.row(row) {
                let ch = cell.map(|g| g.as_char()).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
