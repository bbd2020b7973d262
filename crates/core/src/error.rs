//! Engine error taxonomy.

use crate::types::Position;

/// Errors surfaced by the grid and the match engine.
///
/// `NotAdjacent` is an expected input condition that front ends turn into a
/// visual no-op; the other variants indicate caller bugs or bad configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({}, {}) is outside the {rows}x{cols} grid", .pos.row, .pos.col)]
    OutOfBounds {
        pos: Position,
        rows: usize,
        cols: usize,
    },

    #[error("positions ({}, {}) and ({}, {}) are not adjacent", .a.row, .a.col, .b.row, .b.col)]
    NotAdjacent { a: Position, b: Position },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to load configuration: {0}")]
    ConfigLoad(String),
}

impl EngineError {
    /// Stable machine-readable code for logs and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::OutOfBounds { .. } => "out_of_bounds",
            EngineError::NotAdjacent { .. } => "not_adjacent",
            EngineError::InvalidConfiguration(_) => "invalid_configuration",
            EngineError::ConfigLoad(_) => "config_load",
        }
    }

    /// True for conditions a player can trigger through normal input.
    pub fn is_user_input(&self) -> bool {
        matches!(self, EngineError::NotAdjacent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = EngineError::OutOfBounds {
            pos: Position::new(9, 2),
            rows: 8,
            cols: 8,
        };
        assert_eq!(err.to_string(), "position (9, 2) is outside the 8x8 grid");
        assert_eq!(err.code(), "out_of_bounds");
        assert!(!err.is_user_input());
    }

    #[test]
    fn test_not_adjacent_display() {
        let err = EngineError::NotAdjacent {
            a: Position::new(0, 0),
            b: Position::new(2, 0),
        };
        assert_eq!(err.to_string(), "positions (0, 0) and (2, 0) are not adjacent");
        assert!(err.is_user_input());
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = EngineError::InvalidConfiguration("rows must be >= 3 (got 2)".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: rows must be >= 3 (got 2)"
        );
        assert_eq!(err.code(), "invalid_configuration");
    }
}
