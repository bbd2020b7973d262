//! Cursor and two-click selection over the grid.
//!
//! The first click selects a cell. A second click on an orthogonal neighbour
//! requests a swap; any other second click drops the selection.

use crate::types::{BoardAction, Position};

/// What a click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(Position),
    SwapRequested(Position, Position),
    Cleared,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Position>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn click(&mut self, pos: Position) -> SelectionEvent {
        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                SelectionEvent::Selected(pos)
            }
            Some(first) if first.is_adjacent(pos) => SelectionEvent::SwapRequested(first, pos),
            Some(_) => SelectionEvent::Cleared,
        }
    }

    pub fn cancel(&mut self) {
        self.selected = None;
    }
}

/// Keyboard cursor, clamped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    rows: usize,
    cols: usize,
}

impl Cursor {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Position::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Apply a movement action. Returns false for non-movement actions and for
    /// moves blocked by an edge.
    pub fn apply(&mut self, action: BoardAction) -> bool {
        let Position { row, col } = self.pos;
        let next = match action {
            BoardAction::CursorUp => Position::new(row.saturating_sub(1), col),
            BoardAction::CursorDown => Position::new((row + 1).min(self.rows - 1), col),
            BoardAction::CursorLeft => Position::new(row, col.saturating_sub(1)),
            BoardAction::CursorRight => Position::new(row, (col + 1).min(self.cols - 1)),
            _ => return false,
        };
        let moved = next != self.pos;
        self.pos = next;
        moved
    }

    /// Jump to `pos`, clamped to the grid.
    pub fn move_to(&mut self, pos: Position) {
        self.pos = Position::new(pos.row.min(self.rows - 1), pos.col.min(self.cols - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_cell_twice_clears() {
        let mut sel = Selection::new();
        let p = Position::new(2, 2);
        assert_eq!(sel.click(p), SelectionEvent::Selected(p));
        assert_eq!(sel.click(p), SelectionEvent::Cleared);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut cursor = Cursor::new(3, 4);
        assert!(!cursor.apply(BoardAction::CursorUp));
        assert!(!cursor.apply(BoardAction::CursorLeft));
        for _ in 0..10 {
            cursor.apply(BoardAction::CursorRight);
            cursor.apply(BoardAction::CursorDown);
        }
        assert_eq!(cursor.pos(), Position::new(2, 3));
        assert!(!cursor.apply(BoardAction::Select));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut cursor = Cursor::new(8, 8);
        cursor.move_to(Position::new(20, 5));
        assert_eq!(cursor.pos(), Position::new(7, 5));
    }
}
