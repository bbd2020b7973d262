//! Timed playback of engine outcomes.
//!
//! The engine resolves a swap instantly. `StepPlayer` keeps its own display
//! grid and walks it through the recorded phases so the player can follow the
//! cascade. The game loop must not submit a new swap while [`StepPlayer::busy`]
//! is true.

use std::collections::VecDeque;

use crate::core::replay::{apply_clear, apply_falls, apply_fills};
use crate::core::{EngineError, Grid, MatchSet, Outcome};
use crate::types::{
    Position, CLEAR_PHASE_MS, FALL_PHASE_MS, FILL_PHASE_MS, HIGHLIGHT_PHASE_MS, SWAP_PHASE_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// The two gems trade places.
    Swap,
    /// A rejected swap slides back.
    SwapBack,
    /// Matched cells flash before they disappear.
    Highlight,
    Clear,
    Fall,
    Fill,
}

impl PhaseKind {
    pub fn duration_ms(self) -> u32 {
        match self {
            PhaseKind::Swap | PhaseKind::SwapBack => SWAP_PHASE_MS,
            PhaseKind::Highlight => HIGHLIGHT_PHASE_MS,
            PhaseKind::Clear => CLEAR_PHASE_MS,
            PhaseKind::Fall => FALL_PHASE_MS,
            PhaseKind::Fill => FILL_PHASE_MS,
        }
    }
}

/// One timed frame of playback: the grid image shown while it lasts.
#[derive(Debug, Clone)]
pub struct Phase {
    pub kind: PhaseKind,
    pub grid: Grid,
    /// Score as of this frame; a step's points land with its `Clear`.
    pub score: u64,
    pub highlight: MatchSet,
    pub swap: Option<[Position; 2]>,
}

impl Phase {
    fn new(kind: PhaseKind, grid: Grid, score: u64) -> Self {
        Self {
            kind,
            grid,
            score,
            highlight: MatchSet::new(),
            swap: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepPlayer {
    display: Grid,
    score: u64,
    phases: VecDeque<Phase>,
    elapsed_ms: u32,
}

impl StepPlayer {
    pub fn new(grid: Grid) -> Self {
        Self {
            display: grid,
            score: 0,
            phases: VecDeque::new(),
            elapsed_ms: 0,
        }
    }

    /// Queue the phases for `outcome`, starting from the settled display grid.
    ///
    /// Anything still playing is skipped first.
    pub fn play(&mut self, outcome: &Outcome) -> Result<(), EngineError> {
        self.finish();

        let [a, b] = outcome.swap;
        let mut grid = self.display.clone();
        grid.swap(a, b)?;
        let mut score = outcome.score.saturating_sub(outcome.total_score_delta);

        let mut swap = Phase::new(PhaseKind::Swap, grid.clone(), score);
        swap.swap = Some(outcome.swap);
        self.phases.push_back(swap);

        if !outcome.is_accepted() {
            let mut back = Phase::new(PhaseKind::SwapBack, self.display.clone(), score);
            back.swap = Some(outcome.swap);
            self.phases.push_back(back);
            self.score = outcome.score;
            return Ok(());
        }

        for step in &outcome.steps {
            let mut highlight = Phase::new(PhaseKind::Highlight, grid.clone(), score);
            highlight.highlight = step.matched.clone();
            self.phases.push_back(highlight);

            apply_clear(&mut grid, step)?;
            score += step.score_delta as u64;
            self.phases.push_back(Phase::new(PhaseKind::Clear, grid.clone(), score));
            apply_falls(&mut grid, step)?;
            self.phases.push_back(Phase::new(PhaseKind::Fall, grid.clone(), score));
            apply_fills(&mut grid, step)?;
            self.phases.push_back(Phase::new(PhaseKind::Fill, grid.clone(), score));
        }

        self.display = grid;
        self.score = outcome.score;
        Ok(())
    }

    /// Advance playback by `ms`. Returns true if the visible phase changed.
    pub fn tick(&mut self, ms: u32) -> bool {
        if self.phases.is_empty() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        let mut changed = false;
        while let Some(front) = self.phases.front() {
            let duration = front.kind.duration_ms();
            if self.elapsed_ms < duration {
                break;
            }
            self.elapsed_ms -= duration;
            self.phases.pop_front();
            changed = true;
        }
        if self.phases.is_empty() {
            self.elapsed_ms = 0;
        }
        changed
    }

    pub fn busy(&self) -> bool {
        !self.phases.is_empty()
    }

    /// Drop remaining phases and show the settled grid.
    pub fn finish(&mut self) {
        self.phases.clear();
        self.elapsed_ms = 0;
    }

    /// Replace the display grid and zero the score, e.g. after a restart.
    pub fn reset(&mut self, grid: Grid) {
        self.finish();
        self.display = grid;
        self.score = 0;
    }

    pub fn current_phase(&self) -> Option<&Phase> {
        self.phases.front()
    }

    /// Grid image to draw right now.
    pub fn current_grid(&self) -> &Grid {
        self.phases.front().map_or(&self.display, |p| &p.grid)
    }

    /// Grid once all queued phases have played.
    pub fn settled_grid(&self) -> &Grid {
        &self.display
    }

    /// Score to draw alongside [`current_grid`](Self::current_grid).
    pub fn current_score(&self) -> u64 {
        self.phases.front().map_or(self.score, |p| p.score)
    }

    pub fn remaining_phases(&self) -> usize {
        self.phases.len()
    }
}
