//! Multi-slot passcode controller
//!
//! Owns the slot buffer and the active slot index, applies the navigation
//! rules for character entry and deletion, and reports completion on the
//! transition into the all-filled state.

use crate::config::{ClearNavigation, SlotConfig};
use crate::error::SlotError;
use crate::slot::buffer::SlotBuffer;
use crate::slot::event::SlotEvent;
use crate::slot::state::SlotSnapshot;
use crate::types::{Key, Passcode};
use std::fmt;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

/// Callback receiving the assembled code
pub type CodeCallback = Box<dyn FnMut(&Passcode)>;

/// State machine behind a row of single-character passcode inputs
///
/// All mutation goes through the event handlers. The active index is kept
/// within `0..slot_count` whatever the presentation layer sends.
pub struct SlotController {
    buffer: SlotBuffer,
    active_index: usize,
    complete: bool,
    clear_navigation: ClearNavigation,
    backspace_clears: bool,
    on_filled: Option<CodeCallback>,
    on_changed: Option<CodeCallback>,
    state_tx: watch::Sender<SlotSnapshot>,
}

impl SlotController {
    /// Create a controller with `slot_count` slots
    ///
    /// The slots are seeded from `initial_code`; characters beyond the slot
    /// count are ignored. A seed that fills every slot does not fire the
    /// completion callback.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::ZeroSlots` if `slot_count` is zero
    pub fn new(slot_count: usize, initial_code: Option<&str>) -> Result<Self, SlotError> {
        if slot_count == 0 {
            return Err(SlotError::ZeroSlots);
        }

        let buffer = match initial_code {
            Some(code) => SlotBuffer::seeded(slot_count, code),
            None => SlotBuffer::new(slot_count),
        };
        let complete = buffer.is_complete();
        let (state_tx, _) = watch::channel(SlotSnapshot {
            slots: buffer.as_slice().to_vec(),
            active_index: 0,
            complete,
        });

        debug!(
            slot_count,
            seeded = buffer.filled_count(),
            "Created slot controller"
        );

        Ok(Self {
            buffer,
            active_index: 0,
            complete,
            clear_navigation: ClearNavigation::default(),
            backspace_clears: false,
            on_filled: None,
            on_changed: None,
            state_tx,
        })
    }

    /// Create a controller from configuration
    pub fn from_config(config: &SlotConfig) -> Result<Self, SlotError> {
        let mut controller = Self::new(config.slot_count, config.initial_code.as_deref())?;
        controller.clear_navigation = config.clear_navigation;
        controller.backspace_clears = config.backspace_clears;
        Ok(controller)
    }

    /// Register the callback fired when the last empty slot gets filled
    pub fn on_code_filled(mut self, callback: impl FnMut(&Passcode) + 'static) -> Self {
        self.on_filled = Some(Box::new(callback));
        self
    }

    /// Register the callback fired after every change to the slot contents
    pub fn on_code_changed(mut self, callback: impl FnMut(&Passcode) + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }

    /// Subscribe to state snapshots
    ///
    /// The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SlotSnapshot> {
        self.state_tx.subscribe()
    }

    /// Number of slots
    pub fn slot_count(&self) -> usize {
        self.buffer.len()
    }

    /// Slot that receives the next character
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Per-slot characters, empties included
    pub fn slots(&self) -> &[Option<char>] {
        self.buffer.as_slice()
    }

    /// Character in slot `index`
    ///
    /// # Errors
    ///
    /// Returns `SlotError::IndexOutOfRange` if `index` is not a slot
    pub fn slot(&self, index: usize) -> Result<Option<char>, SlotError> {
        if index >= self.slot_count() {
            return Err(SlotError::IndexOutOfRange {
                index,
                slot_count: self.slot_count(),
            });
        }
        Ok(self.buffer.get(index))
    }

    /// Assembled code, empty slots skipped
    pub fn code(&self) -> Passcode {
        Passcode::new(self.buffer.assembled())
    }

    /// Check if every slot is filled
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current state as a snapshot
    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            slots: self.buffer.as_slice().to_vec(),
            active_index: self.active_index,
            complete: self.complete,
        }
    }

    /// Handle text entered into slot `index`
    ///
    /// A single character is written and the next slot becomes active,
    /// stopping at the last slot. Empty text clears the slot and moves as
    /// configured by `ClearNavigation`. Text of more than one character and
    /// out-of-range indices are dropped without any state change.
    pub fn on_character_entered(&mut self, index: usize, text: &str) {
        if index >= self.slot_count() {
            warn!(
                index,
                slot_count = self.slot_count(),
                "Ignoring entry for slot out of range"
            );
            return;
        }

        let mut chars = text.chars();
        let value = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            _ => {
                warn!(index, "Ignoring multi-character entry");
                return;
            }
        };

        self.buffer.set(index, value);
        self.active_index = match (value, self.clear_navigation) {
            (Some(_), _) | (None, ClearNavigation::Advance) => self.next_index(index),
            (None, ClearNavigation::Stay) => index,
            (None, ClearNavigation::Retreat) => self.previous_index(index),
        };

        debug!(
            index,
            cleared = value.is_none(),
            active_index = self.active_index,
            "Slot entry"
        );
        self.commit(true, true);
    }

    /// Handle a key pressed in slot `index`
    ///
    /// Only deletion does anything: the previous slot becomes active,
    /// stopping at the first slot. The slot content is left alone unless
    /// `backspace_clears` is configured. Indices past the last slot are
    /// treated as the last slot.
    pub fn on_key_pressed(&mut self, index: usize, key: &Key) {
        if !key.is_deletion() {
            trace!(index, %key, "Ignoring non-deletion key");
            return;
        }

        let last = self.slot_count() - 1;
        if index > last {
            warn!(
                index,
                slot_count = self.slot_count(),
                "Clamping key press for slot out of range"
            );
        }

        let cleared =
            self.backspace_clears && index <= last && self.buffer.get(index).is_some();
        if cleared {
            self.buffer.set(index, None);
        }
        self.active_index = self.previous_index(index.min(last));

        debug!(
            index,
            cleared,
            active_index = self.active_index,
            "Deletion key"
        );
        self.commit(cleared, true);
    }

    /// Replace the slot contents with `code`
    ///
    /// Used when the code is changed from outside rather than typed. The
    /// completion flag follows the new contents but the completion callback
    /// does not fire.
    pub fn set_code(&mut self, code: &str) {
        self.buffer.fill_from(code);
        debug!(filled = self.buffer.filled_count(), "Code replaced");
        self.commit(true, false);
    }

    /// Empty every slot and make the first one active
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.active_index = 0;
        debug!("Slots cleared");
        self.commit(true, false);
    }

    /// Route an event to its handler
    pub fn dispatch(&mut self, event: &SlotEvent) {
        match event {
            SlotEvent::CharacterEntered { index, text } => self.on_character_entered(*index, text),
            SlotEvent::KeyPressed { index, key } => self.on_key_pressed(*index, key),
            SlotEvent::Clear => self.clear(),
            SlotEvent::SetCode { code } => self.set_code(code),
        }
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1).min(self.slot_count() - 1)
    }

    fn previous_index(&self, index: usize) -> usize {
        index.saturating_sub(1)
    }

    /// Notify observers after a transition
    ///
    /// Completion fires only for user edits that move the buffer from
    /// not-full to full.
    fn commit(&mut self, buffer_changed: bool, user_edit: bool) {
        let now_complete = self.buffer.is_complete();
        let rising_edge = user_edit && now_complete && !self.complete;
        self.complete = now_complete;

        if buffer_changed {
            if let Some(callback) = self.on_changed.as_mut() {
                callback(&Passcode::new(self.buffer.assembled()));
            }
        }

        if rising_edge {
            info!(slot_count = self.slot_count(), "All slots filled");
            if let Some(callback) = self.on_filled.as_mut() {
                callback(&Passcode::new(self.buffer.assembled()));
            }
        }

        self.state_tx.send_replace(self.snapshot());
    }
}

impl fmt::Debug for SlotController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotController")
            .field("slot_count", &self.slot_count())
            .field("filled", &self.buffer.filled_count())
            .field("active_index", &self.active_index)
            .field("complete", &self.complete)
            .field("clear_navigation", &self.clear_navigation)
            .field("backspace_clears", &self.backspace_clears)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(slot_count: usize) -> (SlotController, Rc<RefCell<Vec<String>>>) {
        let filled = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&filled);
        let controller = SlotController::new(slot_count, None)
            .unwrap()
            .on_code_filled(move |code| sink.borrow_mut().push(code.expose().to_string()));
        (controller, filled)
    }

    #[test]
    fn test_zero_slots_rejected() {
        assert_eq!(SlotController::new(0, None).unwrap_err(), SlotError::ZeroSlots);
    }

    #[test]
    fn test_single_slot_controller() {
        let (mut controller, filled) = recording(1);

        controller.on_character_entered(0, "5");
        assert_eq!(controller.active_index(), 0);
        assert_eq!(*filled.borrow(), vec!["5".to_string()]);

        controller.on_key_pressed(0, &Key::Backspace);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn test_clear_navigation_variants() {
        let mut stay = SlotController::from_config(
            &SlotConfig::new(4).with_clear_navigation(ClearNavigation::Stay),
        )
        .unwrap();
        stay.on_character_entered(2, "");
        assert_eq!(stay.active_index(), 2);

        let mut retreat = SlotController::from_config(
            &SlotConfig::new(4).with_clear_navigation(ClearNavigation::Retreat),
        )
        .unwrap();
        retreat.on_character_entered(2, "");
        assert_eq!(retreat.active_index(), 1);

        let mut advance = SlotController::new(4, None).unwrap();
        advance.on_character_entered(2, "");
        assert_eq!(advance.active_index(), 3);
    }

    #[test]
    fn test_multi_character_entry_ignored() {
        let mut controller = SlotController::new(4, None).unwrap();
        controller.on_character_entered(0, "12");
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.slot(0).unwrap(), None);
    }

    #[test]
    fn test_debug_hides_slot_contents() {
        let controller = SlotController::new(4, Some("9876")).unwrap();
        let debug = format!("{:?}", controller);
        assert!(!debug.contains("9876"));
        assert!(debug.contains("slot_count: 4"));
    }
}
