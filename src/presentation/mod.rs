//! Presentation layer: command parsing, text rendering and the interactive shell.

/// Command parsing.
pub mod commands;
/// Text rendering.
pub mod render;
/// Interactive shell.
pub mod shell;

pub use commands::{Command, CommandError, SettingsCommand};
pub use shell::{Shell, ShellOutcome};
