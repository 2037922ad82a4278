//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod init;
pub mod render;
pub mod session;
