//! Presentation-side replay of resolution steps.
//!
//! A renderer keeps its own copy of the grid from before the swap and applies
//! each step in three phases. The intermediate images come purely from the
//! step records; the engine is never consulted.

use crate::error::EngineError;
use crate::grid::Grid;
use crate::step::{Outcome, ResolutionStep};
use crate::types::Position;

/// The three images a step passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFrames {
    /// Matched cells removed.
    pub cleared: Grid,
    /// Gravity applied; vacated cells at the top still empty.
    pub fallen: Grid,
    /// New gems placed. Equals the grid the next step starts from.
    pub filled: Grid,
}

/// Empty every matched cell.
pub fn apply_clear(grid: &mut Grid, step: &ResolutionStep) -> Result<(), EngineError> {
    grid.clear(step.matched.iter())
}

/// Move gems down as recorded. Moves are replayed bottom-most first per column,
/// so every destination is already empty when it is written.
pub fn apply_falls(grid: &mut Grid, step: &ResolutionStep) -> Result<(), EngineError> {
    for fall in &step.falls {
        for mv in &fall.moves {
            let from = Position::new(mv.from_row, fall.col);
            let to = Position::new(mv.to_row, fall.col);
            let gem = grid.get(from)?;
            grid.set(to, gem)?;
            grid.set(from, None)?;
        }
    }
    Ok(())
}

/// Place the recorded refills.
pub fn apply_fills(grid: &mut Grid, step: &ResolutionStep) -> Result<(), EngineError> {
    for fill in &step.fills {
        grid.set(fill.pos, Some(fill.gem))?;
    }
    Ok(())
}

/// Apply one step to `grid`, capturing each phase.
pub fn replay_step(grid: &mut Grid, step: &ResolutionStep) -> Result<StepFrames, EngineError> {
    apply_clear(grid, step)?;
    let cleared = grid.clone();
    apply_falls(grid, step)?;
    let fallen = grid.clone();
    apply_fills(grid, step)?;
    Ok(StepFrames {
        cleared,
        fallen,
        filled: grid.clone(),
    })
}

/// Apply a whole outcome to a copy of the pre-swap grid.
///
/// Rejected outcomes leave `grid` as it was.
pub fn replay_outcome(grid: &mut Grid, outcome: &Outcome) -> Result<Vec<StepFrames>, EngineError> {
    if !outcome.is_accepted() {
        return Ok(Vec::new());
    }
    let [a, b] = outcome.swap;
    grid.swap(a, b)?;
    outcome
        .steps
        .iter()
        .map(|step| replay_step(grid, step))
        .collect()
}
