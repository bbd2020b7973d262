//! Resolution records handed to the presentation layer.
//!
//! Everything here is immutable data: the engine produces it once per swap and
//! never looks at it again. The records carry enough detail for a renderer to
//! rebuild every intermediate grid image (see [`crate::replay`]).

use serde::{Deserialize, Serialize};

use crate::matcher::MatchSet;
use crate::types::{Gem, Position};

/// One gem moving down within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallMove {
    pub from_row: usize,
    pub to_row: usize,
}

impl FallMove {
    /// Number of rows travelled.
    pub fn distance(&self) -> usize {
        self.to_row - self.from_row
    }
}

/// Gravity applied to a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFall {
    pub col: usize,
    /// Gems that changed row, bottom-most first. Gems that stayed put are omitted.
    pub moves: Vec<FallMove>,
    /// Empty cells left at the top of the column (rows `0..vacated`).
    pub vacated: usize,
}

impl ColumnFall {
    /// True when nothing in the column moved.
    pub fn is_still(&self) -> bool {
        self.moves.is_empty()
    }
}

/// A freshly generated gem placed into an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fill {
    pub pos: Position,
    pub gem: Gem,
}

/// One iteration of the cascade loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionStep {
    /// 0-based position of this step within its cascade.
    pub index: usize,
    pub matched: MatchSet,
    pub score_delta: u32,
    /// Only columns touched by the clear, in ascending column order.
    pub falls: Vec<ColumnFall>,
    /// Refilled cells, column by column, top to bottom.
    pub fills: Vec<Fill>,
}

impl ResolutionStep {
    /// Number of matched cells removed in `col`.
    pub fn cleared_in_column(&self, col: usize) -> usize {
        self.matched.iter().filter(|p| p.col == col).count()
    }

    /// Number of new gems placed in `col`.
    pub fn filled_in_column(&self, col: usize) -> usize {
        self.fills.iter().filter(|f| f.pos.col == col).count()
    }

    /// Gravity record for `col`, if the column was touched.
    pub fn fall_for_column(&self, col: usize) -> Option<&ColumnFall> {
        self.falls.iter().find(|f| f.col == col)
    }
}

/// Whether a swap request was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Accepted,
    Rejected,
}

/// Complete result of one swap request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub swap: [Position; 2],
    /// Empty for `Rejected`; at least one step for `Accepted`.
    pub steps: Vec<ResolutionStep>,
    pub total_score_delta: u64,
    /// Session score after this request.
    pub score: u64,
}

impl Outcome {
    pub(crate) fn rejected(a: Position, b: Position, score: u64) -> Self {
        Self {
            kind: OutcomeKind::Rejected,
            swap: [a, b],
            steps: Vec::new(),
            total_score_delta: 0,
            score,
        }
    }

    pub(crate) fn accepted(a: Position, b: Position, steps: Vec<ResolutionStep>, score: u64) -> Self {
        let total_score_delta = steps.iter().map(|s| s.score_delta as u64).sum();
        Self {
            kind: OutcomeKind::Accepted,
            swap: [a, b],
            steps,
            total_score_delta,
            score,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.kind == OutcomeKind::Accepted
    }

    /// Number of cascade iterations (0 when rejected).
    pub fn cascade_len(&self) -> usize {
        self.steps.len()
    }

    /// Total cells cleared across all steps.
    pub fn cleared_cells(&self) -> usize {
        self.steps.iter().map(|s| s.matched.len()).sum()
    }
}
