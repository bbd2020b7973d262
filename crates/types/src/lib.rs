//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, terminal rendering, headless tools, JSON output).
//!
//! # Board Dimensions
//!
//! The default playfield is an 8x8 grid:
//!
//! - **Rows**: 8 (indexed 0-7, row 0 is the top, gravity pulls toward row 7)
//! - **Columns**: 8 (indexed 0-7, left to right)
//! - **Gem kinds**: 7 distinct symbols
//!
//! Sessions may override rows, columns and the number of gem kinds in play;
//! see `gemswap_core::EngineConfig`.
//!
//! # Scoring
//!
//! Every cleared cell is worth [`DEFAULT_POINTS_PER_CELL`] points. A run must be at
//! least [`MIN_RUN_LENGTH`] cells long to clear.
//!
//! # Replay Timing Constants
//!
//! The engine is synchronous; these values only pace the terminal replay of
//! resolution steps (milliseconds):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end frame interval (~60 FPS) |
//! | `SWAP_PHASE_MS` | 160 | Two gems trading places |
//! | `HIGHLIGHT_PHASE_MS` | 180 | Matched cells flash before removal |
//! | `CLEAR_PHASE_MS` | 280 | Matched cells shown as removed |
//! | `FALL_PHASE_MS` | 320 | Gems settle after gravity |
//! | `FILL_PHASE_MS` | 120 | New gems appear at the top |
//!
//! # Examples
//!
//! ```
//! use gemswap_types::{BoardAction, Gem, Position, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse a gem (case-insensitive)
//! assert_eq!(Gem::from_str("Red"), Some(Gem::Red));
//!
//! // Orthogonal neighbours are adjacent, diagonals are not
//! let a = Position::new(3, 3);
//! assert!(a.is_adjacent(Position::new(3, 4)));
//! assert!(!a.is_adjacent(Position::new(4, 4)));
//!
//! // Parse a board action
//! assert_eq!(BoardAction::from_str("select"), Some(BoardAction::Select));
//!
//! assert_eq!(DEFAULT_ROWS, 8);
//! assert_eq!(DEFAULT_COLS, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of rows (8)
pub const DEFAULT_ROWS: usize = 8;

/// Default number of columns (8)
pub const DEFAULT_COLS: usize = 8;

/// Number of distinct gem kinds that exist (7)
pub const GEM_KINDS: usize = 7;

/// Default number of gem kinds in play (all of them)
pub const DEFAULT_SYMBOL_COUNT: u8 = GEM_KINDS as u8;

/// Fewest gem kinds a session may use
pub const MIN_SYMBOL_COUNT: u8 = 3;

/// Smallest allowed row or column count
pub const MIN_DIMENSION: usize = 3;

/// Largest allowed row or column count
pub const MAX_DIMENSION: usize = 64;

/// Shortest run of equal gems that clears
pub const MIN_RUN_LENGTH: usize = 3;

/// Points awarded per cleared cell
pub const DEFAULT_POINTS_PER_CELL: u32 = 10;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the swap (or swap-and-return) phase
pub const SWAP_PHASE_MS: u32 = 160;

/// Duration matched cells are highlighted before removal
pub const HIGHLIGHT_PHASE_MS: u32 = 180;

/// Duration removed cells are shown empty
pub const CLEAR_PHASE_MS: u32 = 280;

/// Duration of the gravity phase
pub const FALL_PHASE_MS: u32 = 320;

/// Duration of the refill phase
pub const FILL_PHASE_MS: u32 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_classic_layout() {
        assert_eq!(DEFAULT_ROWS, 8);
        assert_eq!(DEFAULT_COLS, 8);
        assert_eq!(GEM_KINDS, 7);
        assert_eq!(DEFAULT_SYMBOL_COUNT, 7);
        assert_eq!(DEFAULT_POINTS_PER_CELL, 10);
        assert_eq!(Gem::ALL.len(), GEM_KINDS);
    }

    #[test]
    fn gem_index_roundtrip_covers_all_kinds() {
        for (i, gem) in Gem::ALL.iter().enumerate() {
            assert_eq!(gem.index(), i);
            assert_eq!(Gem::from_index(i), Some(*gem));
        }
        assert_eq!(Gem::from_index(GEM_KINDS), None);
    }

    #[test]
    fn position_adjacency() {
        let p = Position::new(0, 0);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 0)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(1, 1)));
        assert!(!p.is_adjacent(Position::new(0, 2)));
    }

    #[test]
    fn position_serializes_as_row_col_object() {
        let json = serde_json::to_string(&Position::new(2, 5)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":5}"#);
    }

    #[test]
    fn gem_serializes_lowercase() {
        let json = serde_json::to_string(&Gem::Purple).unwrap();
        assert_eq!(json, r#""purple""#);
    }
}

/// The seven gem kinds
///
/// Gems carry no ordering semantics beyond equality; the declaration order is
/// only used to map random draws and compact `u8` encodings onto kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gem {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    White,
    Yellow,
}

impl Gem {
    /// All gem kinds in declaration order
    pub const ALL: [Gem; GEM_KINDS] = [
        Gem::Blue,
        Gem::Green,
        Gem::Orange,
        Gem::Purple,
        Gem::Red,
        Gem::White,
        Gem::Yellow,
    ];

    /// Zero-based index of this kind in [`Gem::ALL`]
    pub fn index(self) -> usize {
        match self {
            Gem::Blue => 0,
            Gem::Green => 1,
            Gem::Orange => 2,
            Gem::Purple => 3,
            Gem::Red => 4,
            Gem::White => 5,
            Gem::Yellow => 6,
        }
    }

    /// Inverse of [`Gem::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse gem kind from string (case-insensitive)
    ///
    /// Accepts full names or single letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use gemswap_types::Gem;
    ///
    /// assert_eq!(Gem::from_str("blue"), Some(Gem::Blue));
    /// assert_eq!(Gem::from_str("Y"), Some(Gem::Yellow));
    /// assert_eq!(Gem::from_str("black"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" | "b" => Some(Gem::Blue),
            "green" | "g" => Some(Gem::Green),
            "orange" | "o" => Some(Gem::Orange),
            "purple" | "p" => Some(Gem::Purple),
            "red" | "r" => Some(Gem::Red),
            "white" | "w" => Some(Gem::White),
            "yellow" | "y" => Some(Gem::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gem::Blue => "blue",
            Gem::Green => "green",
            Gem::Orange => "orange",
            Gem::Purple => "purple",
            Gem::Red => "red",
            Gem::White => "white",
            Gem::Yellow => "yellow",
        }
    }

    /// Single uppercase letter used by text dumps
    pub fn as_char(&self) -> char {
        match self {
            Gem::Blue => 'B',
            Gem::Green => 'G',
            Gem::Orange => 'O',
            Gem::Purple => 'P',
            Gem::Red => 'R',
            Gem::White => 'W',
            Gem::Yellow => 'Y',
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty (only ever observed inside a cascade)
/// - `Some(Gem)`: Cell holding the specified gem
pub type Cell = Option<Gem>;

/// A (row, col) coordinate on the grid
///
/// Ordering is row-major, so sorted collections of positions read top-left to
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is a direct horizontal or vertical neighbour
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.row.abs_diff(other.row) == 1 && self.col == other.col)
            || (self.col.abs_diff(other.col) == 1 && self.row == other.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Player-facing board actions
///
/// Produced by key mapping and consumed by the front end. Swap intents are not
/// actions themselves; they fall out of two `Select` actions on adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Select (or swap with) the cell under the cursor
    Select,
    /// Drop the current selection
    Cancel,
    /// Highlight a legal swap
    Hint,
    /// Start a new session
    Restart,
}

impl BoardAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use gemswap_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("cursorLeft"), Some(BoardAction::CursorLeft));
    /// assert_eq!(BoardAction::from_str("HINT"), Some(BoardAction::Hint));
    /// assert_eq!(BoardAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(BoardAction::CursorUp),
            "cursordown" => Some(BoardAction::CursorDown),
            "cursorleft" => Some(BoardAction::CursorLeft),
            "cursorright" => Some(BoardAction::CursorRight),
            "select" => Some(BoardAction::Select),
            "cancel" => Some(BoardAction::Cancel),
            "hint" => Some(BoardAction::Hint),
            "restart" => Some(BoardAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::CursorUp => "cursorUp",
            BoardAction::CursorDown => "cursorDown",
            BoardAction::CursorLeft => "cursorLeft",
            BoardAction::CursorRight => "cursorRight",
            BoardAction::Select => "select",
            BoardAction::Cancel => "cancel",
            BoardAction::Hint => "hint",
            BoardAction::Restart => "restart",
        }
    }
}
