//! Terminal presentation for gemswap.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, the renderer flushes it through crossterm, and the step
//! player sequences an engine [`core::Outcome`] into timed phases.
//!
//! Goals:
//! - Keep `core` deterministic and free of timing
//! - Keep views pure so layouts are unit-testable
//! - Two terminal columns per gem to keep the board roughly square

pub mod board_view;
pub mod fb;
pub mod player;
pub mod renderer;

pub use gemswap_core as core;
pub use gemswap_types as types;

pub use board_view::{BoardScene, BoardView, PanelInfo, Viewport};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use player::{Phase, PhaseKind, StepPlayer};
pub use renderer::{encode_frame_into, TerminalRenderer};
