//! Read-only projection of controller state
//!
//! Snapshots are what the presentation layer renders from. They are
//! published through a watch channel after every state change.

use serde::Serialize;

/// Controller state at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    /// Per-slot characters, empties included
    pub slots: Vec<Option<char>>,

    /// Slot that receives the next character
    pub active_index: usize,

    /// Whether every slot is filled
    pub complete: bool,
}

impl SlotSnapshot {
    /// Number of slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if `index` is the active slot
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }
}
