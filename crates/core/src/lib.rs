//! Core match-3 engine - pure, deterministic, and testable
//!
//! This crate contains the grid model, match rules and cascade resolution.
//! It has **zero dependencies** on UI, timing or I/O, making it:
//!
//! - **Deterministic**: The same seed and swaps produce identical sessions
//! - **Testable**: Random draws come from an injected [`RandomSource`]
//! - **Portable**: Runs in a terminal, a GUI, or headless
//! - **Synchronous**: Every call runs to completion; callers never observe a
//!   half-resolved grid
//!
//! # Module Structure
//!
//! - [`grid`]: rows x cols storage with swap, clear, collapse and refill primitives
//! - [`matcher`]: run detection and local swap probing
//! - [`engine`]: [`MatchEngine`] - swap validation and the cascade loop
//! - [`step`]: [`ResolutionStep`] and [`Outcome`] records for the presentation layer
//! - [`replay`]: rebuilding intermediate grid images from step records
//! - [`config`]: [`EngineConfig`] with JSON and environment loading
//! - [`rng`]: [`RandomSource`] and the default [`SimpleRng`]
//! - [`snapshot`]: compact grid copies with a board hash
//!
//! # Game Rules
//!
//! - **Swap**: Two orthogonally adjacent gems may trade places
//! - **Legality**: A swap stands only if it completes a run of 3+ equal gems;
//!   otherwise it is reverted
//! - **Clearing**: Every cell on a run of 3+ (horizontal or vertical) is removed;
//!   a cell on two runs counts once
//! - **Gravity**: Gems fall straight down to close gaps
//! - **Refill**: Empty cells at the top receive random gems
//! - **Cascade**: Refills that complete new runs clear again, until none remain
//! - **Scoring**: 10 points per cleared cell (configurable)
//!
//! # Example
//!
//! ```
//! use gemswap_core::{EngineConfig, MatchEngine};
//!
//! let mut engine = MatchEngine::with_seed(EngineConfig::default(), 12345).unwrap();
//!
//! if let Some((a, b)) = engine.find_legal_swap() {
//!     let outcome = engine.try_swap(a, b).unwrap();
//!     assert!(outcome.is_accepted());
//!     assert!(outcome.total_score_delta > 0);
//!     assert_eq!(engine.score(), outcome.score);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod replay;
pub mod rng;
pub mod snapshot;
pub mod step;

pub use gemswap_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use engine::{new_grid, EngineStats, MatchEngine, MAX_SEED_REDRAWS};
pub use error::EngineError;
pub use grid::Grid;
pub use matcher::{find_matches, find_runs, has_match, Axis, MatchSet, Run};
pub use replay::{replay_outcome, replay_step, StepFrames};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GridSnapshot;
pub use step::{ColumnFall, FallMove, Fill, Outcome, OutcomeKind, ResolutionStep};
