//! Slot input module
//!
//! The passcode controller, its buffer and snapshot types, and the event
//! script format.

pub mod buffer;
pub mod controller;
pub mod event;
pub mod script;
pub mod state;

// Public re-exports
pub use buffer::SlotBuffer;
pub use controller::{CodeCallback, SlotController};
pub use event::SlotEvent;
pub use state::SlotSnapshot;
