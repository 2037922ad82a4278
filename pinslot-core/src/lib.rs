//! Core library for the pinslot passcode input
//!
//! This crate provides the multi-slot one-time passcode controller, its
//! configuration, and the event script format used by the terminal front-end.

pub mod error;
pub mod types;

pub mod config;
pub mod slot;

pub use slot::SlotController;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "PINSLOT_LOG";

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running as a service.
/// Otherwise logs to stderr, filtered by `PINSLOT_LOG` (default `warn`).
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(filter)
                .try_init()?;
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}
