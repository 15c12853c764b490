//! Command-line interface for music-redirect.
//!
//! This module provides CLI commands for translating track links between
//! streaming platforms and for inspecting the matcher directly.

mod commands;

pub use commands::{Cli, Commands, run_command};
