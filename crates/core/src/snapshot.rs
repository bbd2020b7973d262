use serde::Serialize;

use crate::grid::Grid;
use crate::types::{Gem, Position};

/// FNV-1a 64-bit over a byte stream.
pub fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// Flat, renderer-friendly copy of a grid plus the session score.
///
/// `cells` is row-major: 0 = empty, otherwise gem index + 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<u8>,
    pub score: u64,
    pub board_hash: u64,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid, score: u64) -> Self {
        let mut s = Self::default();
        s.capture(grid, score);
        s
    }

    /// Overwrite this snapshot in place, reusing the cell buffer.
    pub fn capture(&mut self, grid: &Grid, score: u64) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        grid.write_u8_cells(&mut self.cells);
        self.score = score;
        self.board_hash = fnv1a64(self.cells.iter().copied());
    }

    pub fn gem_at(&self, pos: Position) -> Option<Gem> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        match self.cells[pos.row * self.cols + pos.col] {
            0 => None,
            v => Gem::from_index(v as usize - 1),
        }
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.score = 0;
        self.board_hash = 0;
    }
}
