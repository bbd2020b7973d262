//! Session configuration.
//!
//! Recognized JSON options are `rows`, `cols`, `symbolCount` and
//! `pointsPerCell`; any key left out takes its default. Environment overrides
//! use the `GEMSWAP_*` variables listed on [`EngineConfig::from_env`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{
    DEFAULT_COLS, DEFAULT_POINTS_PER_CELL, DEFAULT_ROWS, DEFAULT_SYMBOL_COUNT, GEM_KINDS,
    MAX_DIMENSION, MIN_DIMENSION, MIN_SYMBOL_COUNT,
};

/// Grid and scoring parameters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of gem kinds in play (the first N of `Gem::ALL`)
    pub symbol_count: u8,
    pub points_per_cell: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            symbol_count: DEFAULT_SYMBOL_COUNT,
            points_per_cell: DEFAULT_POINTS_PER_CELL,
        }
    }
}

impl EngineConfig {
    pub fn new(rows: usize, cols: usize, symbol_count: u8, points_per_cell: u32) -> Self {
        Self {
            rows,
            cols,
            symbol_count,
            points_per_cell,
        }
    }

    /// Create from environment variables
    ///
    /// - `GEMSWAP_ROWS`, `GEMSWAP_COLS`: grid dimensions
    /// - `GEMSWAP_SYMBOLS`: gem kinds in play
    /// - `GEMSWAP_POINTS_PER_CELL`: score per cleared cell
    ///
    /// Missing or unparsable values keep their defaults. The result is not
    /// validated; call [`EngineConfig::validate`] before use.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let rows = env::var("GEMSWAP_ROWS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rows);
        let cols = env::var("GEMSWAP_COLS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.cols);
        let symbol_count = env::var("GEMSWAP_SYMBOLS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.symbol_count);
        let points_per_cell = env::var("GEMSWAP_POINTS_PER_CELL")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.points_per_cell);

        Self {
            rows,
            cols,
            symbol_count,
            points_per_cell,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(s).map_err(|e| EngineError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigLoad(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Reject configurations where matches are unreachable or a match-free
    /// starting grid cannot exist.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows < MIN_DIMENSION {
            return Err(EngineError::InvalidConfiguration(format!(
                "rows must be >= {} (got {})",
                MIN_DIMENSION, self.rows
            )));
        }
        if self.cols < MIN_DIMENSION {
            return Err(EngineError::InvalidConfiguration(format!(
                "cols must be >= {} (got {})",
                MIN_DIMENSION, self.cols
            )));
        }
        if self.rows > MAX_DIMENSION {
            return Err(EngineError::InvalidConfiguration(format!(
                "rows must be <= {} (got {})",
                MAX_DIMENSION, self.rows
            )));
        }
        if self.cols > MAX_DIMENSION {
            return Err(EngineError::InvalidConfiguration(format!(
                "cols must be <= {} (got {})",
                MAX_DIMENSION, self.cols
            )));
        }
        if self.symbol_count < MIN_SYMBOL_COUNT {
            return Err(EngineError::InvalidConfiguration(format!(
                "symbolCount must be >= {} (got {})",
                MIN_SYMBOL_COUNT, self.symbol_count
            )));
        }
        if self.symbol_count as usize > GEM_KINDS {
            return Err(EngineError::InvalidConfiguration(format!(
                "symbolCount must be <= {} (got {})",
                GEM_KINDS, self.symbol_count
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config, EngineConfig::new(8, 8, 7, 10));
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_count(), 64);
    }

    #[test]
    fn smallest_legal_config_is_valid() {
        assert!(EngineConfig::new(3, 3, 3, 1).validate().is_ok());
    }

    #[test]
    fn rejects_small_dimensions_and_cardinality() {
        for bad in [
            EngineConfig::new(2, 8, 7, 10),
            EngineConfig::new(8, 2, 7, 10),
            EngineConfig::new(8, 8, 2, 10),
            EngineConfig::new(8, 8, 8, 10),
        ] {
            let err = bad.validate().unwrap_err();
            assert_eq!(err.code(), "invalid_configuration", "{:?}", bad);
        }
    }

    #[test]
    fn rejects_oversized_dimensions() {
        assert!(EngineConfig::new(MAX_DIMENSION, MAX_DIMENSION, 3, 10)
            .validate()
            .is_ok());
        for bad in [
            EngineConfig::new(MAX_DIMENSION + 1, 8, 7, 10),
            EngineConfig::new(8, MAX_DIMENSION + 1, 7, 10),
            EngineConfig::new(usize::MAX / 2, 4, 7, 10),
        ] {
            let err = bad.validate().unwrap_err();
            assert_eq!(err.code(), "invalid_configuration", "{:?}", bad);
        }

        let err = EngineConfig::from_json_str(r#"{"rows":100000}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn json_uses_camel_case_and_defaults_missing_keys() {
        let config = EngineConfig::from_json_str(r#"{"rows":6,"symbolCount":5}"#).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 8);
        assert_eq!(config.symbol_count, 5);
        assert_eq!(config.points_per_cell, 10);

        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"rows":8,"cols":8,"symbolCount":7,"pointsPerCell":10}"#
        );
    }

    #[test]
    fn json_is_validated() {
        let err = EngineConfig::from_json_str(r#"{"cols":1}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let err = EngineConfig::from_json_str("{rows:").unwrap_err();
        assert_eq!(err.code(), "config_load");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/gemswap.json")).unwrap_err();
        assert_eq!(err.code(), "config_load");
    }
}
