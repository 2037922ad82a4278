//! Events the presentation layer feeds into the controller

use crate::types::Key;

/// Input events accepted by `SlotController::dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEvent {
    /// Text changed in a slot; empty text clears it
    CharacterEntered { index: usize, text: String },

    /// Key pressed while a slot had focus
    KeyPressed { index: usize, key: Key },

    /// Empty every slot and return to the first one
    Clear,

    /// Replace the whole code from outside
    SetCode { code: String },
}

impl SlotEvent {
    /// Character entry event
    pub fn entered(index: usize, text: impl Into<String>) -> Self {
        SlotEvent::CharacterEntered {
            index,
            text: text.into(),
        }
    }

    /// Deletion key event
    pub fn backspace(index: usize) -> Self {
        SlotEvent::KeyPressed {
            index,
            key: Key::Backspace,
        }
    }
}
