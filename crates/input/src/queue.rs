//! Per-frame action batching.
//!
//! Terminal key events arrive between frames; the loop drains them once per
//! tick. While the board is animating, queued actions are dropped so a swap can
//! never be requested against a grid the player has not seen yet.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::BoardAction;

/// Actions kept per frame; extra key repeats are discarded.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: ArrayVec<BoardAction, MAX_ACTIONS_PER_FRAME>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map and queue a key. Returns the mapped action, if any.
    pub fn push_key(&mut self, key: KeyEvent) -> Option<BoardAction> {
        let action = handle_key_event(key)?;
        self.push(action);
        Some(action)
    }

    pub fn push(&mut self, action: BoardAction) {
        let _ = self.pending.try_push(action);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued this frame. `busy` discards the batch instead;
    /// `Restart` survives, since it replaces the board anyway.
    pub fn drain(&mut self, busy: bool) -> ArrayVec<BoardAction, MAX_ACTIONS_PER_FRAME> {
        let mut out = std::mem::take(&mut self.pending);
        if busy {
            out.retain(|a| *a == BoardAction::Restart);
        }
        out
    }
}
