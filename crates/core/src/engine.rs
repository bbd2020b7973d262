//! Match engine - swap validation and cascade resolution
//!
//! The engine owns the grid for one session. Its only mutating entry point is
//! [`MatchEngine::try_swap`], which either reverts the swap (`Rejected`) or keeps
//! it and resolves the full cascade before returning (`Accepted`). Callers never
//! see a grid with empty cells or pending matches.

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::matcher::{find_matches, has_match, swap_creates_match};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GridSnapshot;
use crate::step::{ColumnFall, Outcome, ResolutionStep};
use crate::types::{Gem, Position, GEM_KINDS};

/// Running counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub accepted_swaps: u32,
    pub rejected_swaps: u32,
    /// Resolution steps over the whole session.
    pub cascade_steps: u64,
    /// Most steps produced by a single swap.
    pub longest_cascade: usize,
    pub cells_cleared: u64,
}

/// Whole-grid redraws tried before [`new_grid`] falls back to a tiling.
pub const MAX_SEED_REDRAWS: u32 = 1_000;

/// Generate a grid with no clearing run.
///
/// Every cell is redrawn until the whole grid is match-free. Large boards with
/// few gem kinds almost never draw a match-free grid, so after
/// [`MAX_SEED_REDRAWS`] attempts the grid is seeded from a diagonal tiling
/// with randomly relabelled gems instead.
pub fn new_grid<R>(config: &EngineConfig, rng: &mut R) -> Result<Grid, EngineError>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let mut grid = Grid::new(config.rows, config.cols);
    for attempt in 1..=MAX_SEED_REDRAWS {
        grid.randomize(rng, config.symbol_count);
        if !has_match(&grid) {
            debug!(
                attempts = attempt,
                rows = config.rows,
                cols = config.cols,
                "seeded match-free grid"
            );
            return Ok(grid);
        }
    }

    tile_relabelled(&mut grid, rng, config.symbol_count)?;
    debug!(
        attempts = MAX_SEED_REDRAWS,
        rows = config.rows,
        cols = config.cols,
        symbols = config.symbol_count,
        "redraws exhausted, seeded from tiling"
    );
    Ok(grid)
}

/// Fill with `labels[(row + col) % symbol_count]` over a shuffled label order.
///
/// Neighbours along a row or column always differ, so no run can form.
fn tile_relabelled<R>(
    grid: &mut Grid,
    rng: &mut R,
    symbol_count: u8,
) -> Result<(), EngineError>
where
    R: RandomSource + ?Sized,
{
    let count = (symbol_count as usize).clamp(1, Gem::ALL.len());
    let mut labels: ArrayVec<Gem, GEM_KINDS> = Gem::ALL[..count].iter().copied().collect();
    for i in (1..labels.len()).rev() {
        let j = rng.next_range(i as u32 + 1) as usize;
        labels.swap(i, j);
    }
    let offset = rng.next_range(count as u32) as usize;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let gem = labels[(row + col + offset) % count];
            grid.set(Position::new(row, col), Some(gem))?;
        }
    }
    Ok(())
}

/// Rule enforcement and cascade orchestration for one session
#[derive(Debug, Clone)]
pub struct MatchEngine<R = SimpleRng> {
    config: EngineConfig,
    grid: Grid,
    rng: R,
    score: u64,
    stats: EngineStats,
}

impl MatchEngine<SimpleRng> {
    /// Start a session with the default LCG seeded by `seed`
    pub fn with_seed(config: EngineConfig, seed: u32) -> Result<Self, EngineError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> MatchEngine<R> {
    /// Start a session: validate the config and seed a match-free grid
    pub fn new(config: EngineConfig, mut rng: R) -> Result<Self, EngineError> {
        let grid = new_grid(&config, &mut rng)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            symbols = config.symbol_count,
            "session started"
        );
        Ok(Self {
            config,
            grid,
            rng,
            score: 0,
            stats: EngineStats::default(),
        })
    }

    /// Adopt an existing grid instead of seeding one
    ///
    /// The grid must be full and sized to the config. It may contain matches;
    /// call [`MatchEngine::resolve_cascade`] to settle it.
    pub fn from_grid(config: EngineConfig, grid: Grid, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid is {}x{} but config expects {}x{}",
                grid.rows(),
                grid.cols(),
                config.rows,
                config.cols
            )));
        }
        if !grid.is_full() {
            return Err(EngineError::InvalidConfiguration(
                "grid has empty cells".to_string(),
            ));
        }
        Ok(Self {
            config,
            grid,
            rng,
            score: 0,
            stats: EngineStats::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Validate and apply a swap request
    ///
    /// - `OutOfBounds` if either position is off-grid
    /// - `NotAdjacent` unless the cells are orthogonal neighbours
    ///
    /// Both errors leave the grid untouched. A swap that completes no run is
    /// reverted and reported as `Rejected`.
    #[instrument(level = "debug", skip(self), fields(score = self.score))]
    pub fn try_swap(&mut self, a: Position, b: Position) -> Result<Outcome, EngineError> {
        self.grid.get(a)?;
        self.grid.get(b)?;
        if !a.is_adjacent(b) {
            return Err(EngineError::NotAdjacent { a, b });
        }

        self.grid.swap(a, b)?;
        if !has_match(&self.grid) {
            self.grid.swap(a, b)?;
            self.stats.rejected_swaps = self.stats.rejected_swaps.saturating_add(1);
            trace!(?a, ?b, "swap rejected");
            return Ok(Outcome::rejected(a, b, self.score));
        }

        self.stats.accepted_swaps = self.stats.accepted_swaps.saturating_add(1);
        let steps = self.resolve_cascade()?;
        debug!(
            ?a,
            ?b,
            steps = steps.len(),
            score = self.score,
            "swap accepted"
        );
        Ok(Outcome::accepted(a, b, steps, self.score))
    }

    /// Clear, collapse and refill until no run remains
    ///
    /// Returns the steps in order; empty if the grid was already quiescent.
    /// A refill may complete new runs, which are resolved as further steps.
    pub fn resolve_cascade(&mut self) -> Result<Vec<ResolutionStep>, EngineError> {
        let mut steps = Vec::new();

        loop {
            let matched = find_matches(&self.grid);
            if matched.is_empty() {
                break;
            }

            let score_delta = (matched.len() as u32).saturating_mul(self.config.points_per_cell);
            self.grid.clear(matched.iter())?;

            // Untouched columns cannot have gaps.
            let falls = matched
                .columns()
                .into_iter()
                .map(|col| self.grid.collapse_column(col))
                .collect::<Result<Vec<ColumnFall>, EngineError>>()?;
            let fills = self.grid.fill_empty(&mut self.rng, self.config.symbol_count);

            self.score = self.score.saturating_add(score_delta as u64);
            self.stats.cells_cleared += matched.len() as u64;

            debug!(
                step = steps.len(),
                cleared = matched.len(),
                score_delta,
                refilled = fills.len(),
                "cascade step"
            );

            steps.push(ResolutionStep {
                index: steps.len(),
                matched,
                score_delta,
                falls,
                fills,
            });
        }

        self.stats.cascade_steps += steps.len() as u64;
        self.stats.longest_cascade = self.stats.longest_cascade.max(steps.len());
        Ok(steps)
    }

    /// Visit every adjacent pair once (right and down neighbours) until `visit` returns false.
    fn scan_legal_swaps(&self, mut visit: impl FnMut(Position, Position) -> bool) {
        let mut probe = self.grid.clone();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let a = Position::new(row, col);
                for b in self.grid.neighbors(a).into_iter().filter(|b| *b > a) {
                    if swap_creates_match(&mut probe, a, b).unwrap_or(false) && !visit(a, b) {
                        return;
                    }
                }
            }
        }
    }

    /// First swap (in row-major order) that would be accepted
    pub fn find_legal_swap(&self) -> Option<(Position, Position)> {
        let mut found = None;
        self.scan_legal_swaps(|a, b| {
            found = Some((a, b));
            false
        });
        found
    }

    /// Every swap that would be accepted, each pair listed once
    pub fn legal_swaps(&self) -> Vec<(Position, Position)> {
        let mut out = Vec::new();
        self.scan_legal_swaps(|a, b| {
            out.push((a, b));
            true
        });
        out
    }

    pub fn has_legal_move(&self) -> bool {
        self.find_legal_swap().is_some()
    }

    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.capture(&self.grid, self.score);
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut s = GridSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
