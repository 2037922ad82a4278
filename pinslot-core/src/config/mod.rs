//! Configuration module
//!
//! Handles controller and display settings, loaded from TOML files.

use serde::{Deserialize, Serialize};

pub mod toml_config;

/// Default number of slots
pub const DEFAULT_SLOT_COUNT: usize = 6;

/// Where the active slot moves when a slot is cleared by an empty entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearNavigation {
    /// Move forward like any other entry
    #[default]
    Advance,

    /// Keep the cleared slot active
    Stay,

    /// Move back one slot
    Retreat,
}

/// Controller configuration
///
/// Contains everything the slot controller needs at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Number of single-character slots
    #[serde(default = "default_slot_count")]
    pub slot_count: usize,

    /// Code the slots are seeded with
    #[serde(default)]
    pub initial_code: Option<String>,

    /// Navigation applied when an entry clears a slot
    #[serde(default)]
    pub clear_navigation: ClearNavigation,

    /// Whether a deletion key also clears the slot it was pressed in
    #[serde(default)]
    pub backspace_clears: bool,
}

fn default_slot_count() -> usize {
    DEFAULT_SLOT_COUNT
}

impl SlotConfig {
    /// Create a new configuration with the given slot count
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            ..Self::default()
        }
    }

    /// Set the code the slots are seeded with
    pub fn with_initial_code(mut self, code: impl Into<String>) -> Self {
        self.initial_code = Some(code.into());
        self
    }

    /// Set the navigation applied on clearing entries
    pub fn with_clear_navigation(mut self, navigation: ClearNavigation) -> Self {
        self.clear_navigation = navigation;
        self
    }

    /// Set whether deletion keys clear their slot
    pub fn with_backspace_clears(mut self, clears: bool) -> Self {
        self.backspace_clears = clears;
        self
    }

    /// Validate the configuration
    ///
    /// An initial code longer than the slot count is accepted; the
    /// controller ignores the extra characters.
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_count == 0 {
            return Err("Slot count cannot be zero".to_string());
        }

        Ok(())
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            initial_code: None,
            clear_navigation: ClearNavigation::default(),
            backspace_clears: false,
        }
    }
}

/// Terminal display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Hide entered characters
    #[serde(default)]
    pub mask: bool,

    /// Character shown in place of entered ones when masking
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Character shown in empty slots
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
}

fn default_mask_char() -> char {
    '*'
}

fn default_placeholder() -> char {
    '_'
}

impl DisplayConfig {
    /// Validate the display settings
    pub fn validate(&self) -> Result<(), String> {
        if self.mask_char.is_whitespace() {
            return Err("Mask character cannot be whitespace".to_string());
        }
        if self.mask && self.mask_char == self.placeholder {
            return Err("Mask and placeholder characters must differ".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mask: false,
            mask_char: default_mask_char(),
            placeholder: default_placeholder(),
        }
    }
}
