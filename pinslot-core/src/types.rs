//! Type definitions for passcode handling
//!
//! The assembled code is wrapped with the secrecy crate so it never shows up
//! in logs or debug output by accident.

use secrecy::{ExposeSecret, Secret};
use std::fmt;
use std::str::FromStr;

/// Assembled passcode read from the slot buffer
///
/// Empty slots are skipped, so a partially filled buffer yields a code
/// shorter than the slot count.
#[derive(Clone, Debug)]
pub struct Passcode(Secret<String>);

impl Passcode {
    /// Create a new Passcode from an assembled string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the passcode value (use with caution!)
    ///
    /// This should only be called when handing the code to whatever
    /// verifies it, or when the user explicitly asks to see it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Number of characters in the code
    pub fn len(&self) -> usize {
        self.expose().chars().count()
    }

    /// Check if no slot contributed a character
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for Passcode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl PartialEq<&str> for Passcode {
    fn eq(&self, other: &&str) -> bool {
        self.expose() == *other
    }
}

/// Key reported by the presentation layer
///
/// Only deletion is meaningful to the controller; everything else is
/// carried through as `Other` and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Deletion key
    Backspace,

    /// Any other key, by name
    Other(String),
}

impl Key {
    /// Check if this key deletes
    pub fn is_deletion(&self) -> bool {
        matches!(self, Key::Backspace)
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("backspace") {
            Ok(Key::Backspace)
        } else {
            Ok(Key::Other(name.to_string()))
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Backspace => write!(f, "Backspace"),
            Key::Other(name) => write!(f, "{}", name),
        }
    }
}
