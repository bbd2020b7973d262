//! gemswap (workspace facade crate).
//!
//! Re-exports the workspace crates under one `gemswap::{core,input,term,types}`
//! path, and hosts the headless `auto` runner used by the binary.

pub mod auto;

pub use gemswap_core as core;
pub use gemswap_input as input;
pub use gemswap_term as term;
pub use gemswap_types as types;
