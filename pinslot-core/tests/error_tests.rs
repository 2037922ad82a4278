//! Unit tests for error types and conversions

use pinslot_core::error::{ConfigError, PinslotError, ScriptError, SlotError};

#[test]
fn test_slot_error_display() {
    assert_eq!(SlotError::ZeroSlots.to_string(), "Slot count must be at least 1");
    assert_eq!(
        SlotError::IndexOutOfRange {
            index: 6,
            slot_count: 6
        }
        .to_string(),
        "Slot index 6 is out of range for 6 slots"
    );
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::LoadFailed {
        path: "/tmp/missing.toml".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to load configuration file: /tmp/missing.toml"
    );
}

#[test]
fn test_script_error_display() {
    let error = ScriptError::UnknownCommand {
        line: 3,
        command: "jump".to_string(),
    };
    assert_eq!(error.to_string(), "line 3: unknown command 'jump'");
}

#[test]
fn test_pinslot_error_from_slot() {
    let error: PinslotError = SlotError::ZeroSlots.into();
    assert!(matches!(error, PinslotError::Slot(SlotError::ZeroSlots)));
    assert_eq!(error.to_string(), "Slot error: Slot count must be at least 1");
}

#[test]
fn test_pinslot_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: PinslotError = io_error.into();
    assert!(matches!(error, PinslotError::Io(_)));
}

#[test]
fn test_pinslot_error_from_toml() {
    let toml_error = toml::from_str::<toml::Value>("key = ").unwrap_err();
    let error: PinslotError = toml_error.into();
    assert!(matches!(error, PinslotError::Toml(_)));
}

#[test]
fn test_unexpected_argument_display() {
    let error = ScriptError::UnexpectedArgument {
        line: 2,
        value: "9".to_string(),
    };
    assert_eq!(error.to_string(), "line 2: unexpected argument '9'");
}
