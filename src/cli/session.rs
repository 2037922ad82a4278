//! Replay and interactive session commands
//!
//! Both commands build a controller from the resolved configuration, feed
//! it events, and print the slot row (or a JSON snapshot) after each one.

use crate::cli::render::{render_code, render_row};
use pinslot_core::config::toml_config::{self, TomlConfig};
use pinslot_core::config::DisplayConfig;
use pinslot_core::error::PinslotError;
use pinslot_core::slot::script::{parse_line, parse_script};
use pinslot_core::slot::{SlotEvent, SlotSnapshot};
use pinslot_core::types::Passcode;
use pinslot_core::SlotController;
use serde::Serialize;
use std::cell::RefCell;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Options shared by the session commands
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    /// Slot count override
    pub slots: Option<usize>,
    /// Initial code override
    pub code: Option<String>,
    /// Print JSON lines instead of the rendered row
    pub json: bool,
}

/// Load the configuration and apply command-line overrides
pub fn resolve_config(options: &SessionOptions) -> Result<TomlConfig, PinslotError> {
    let mut config = match &options.config_path {
        Some(path) => toml_config::load_config_from_path(path)?,
        None => toml_config::load_config()?,
    };

    if let Some(slots) = options.slots {
        config.slot_config.slot_count = slots;
    }
    if let Some(code) = &options.code {
        config.slot_config.initial_code = Some(code.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run the replay command
pub fn run_replay(options: &SessionOptions, script_path: &Path) -> Result<(), PinslotError> {
    let script = std::fs::read_to_string(script_path)?;
    let events = parse_script(&script)?;
    debug!(events = events.len(), "Replaying {:?}", script_path);

    let mut session = Session::start(options)?;
    for event in &events {
        session.apply(event)?;
    }
    Ok(())
}

/// Run the interactive command
///
/// Malformed lines are reported on stderr and skipped.
pub fn run_interactive(options: &SessionOptions) -> Result<(), PinslotError> {
    let mut session = Session::start(options)?;

    for (offset, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match parse_line(offset + 1, &line) {
            Ok(Some(event)) => session.apply(&event)?,
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping malformed line: {}", e);
                eprintln!("{}", e);
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonLine<'a> {
    Snapshot(&'a SlotSnapshot),
    Filled { filled: &'a str },
}

struct Session {
    controller: SlotController,
    filled: Rc<RefCell<Option<Passcode>>>,
    display: DisplayConfig,
    json: bool,
}

impl Session {
    fn start(options: &SessionOptions) -> Result<Self, PinslotError> {
        let config = resolve_config(options)?;
        let filled = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&filled);
        let controller = SlotController::from_config(config.slot_config())?
            .on_code_filled(move |code| *sink.borrow_mut() = Some(code.clone()));

        let session = Self {
            controller,
            filled,
            display: config.display_config(),
            json: options.json,
        };
        session.print_state()?;
        Ok(session)
    }

    fn apply(&mut self, event: &SlotEvent) -> Result<(), PinslotError> {
        self.controller.dispatch(event);
        self.print_state()?;

        let filled = self.filled.borrow_mut().take();
        if let Some(code) = filled {
            let shown = render_code(&code, &self.display);
            if self.json {
                println!("{}", to_json(&JsonLine::Filled { filled: &shown })?);
            } else {
                println!("✅ filled: {}", shown);
            }
        }
        Ok(())
    }

    fn print_state(&self) -> Result<(), PinslotError> {
        let snapshot = self.controller.snapshot();
        if self.json {
            println!("{}", to_json(&JsonLine::Snapshot(&snapshot))?);
        } else {
            println!("{}", render_row(&snapshot, &self.display));
        }
        Ok(())
    }
}

fn to_json(line: &JsonLine<'_>) -> Result<String, PinslotError> {
    serde_json::to_string(line).map_err(|e| PinslotError::Io(e.into()))
}
