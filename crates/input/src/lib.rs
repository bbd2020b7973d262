//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::BoardAction`], batches them per frame, and
//! turns cursor clicks into swap requests.

pub mod map;
pub mod queue;
pub mod selection;

pub use gemswap_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{ActionQueue, MAX_ACTIONS_PER_FRAME};
pub use selection::{Cursor, Selection, SelectionEvent};
