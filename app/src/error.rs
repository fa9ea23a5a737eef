//! Error types for the menu shell.

use std::io;
use std::path::PathBuf;

use menu_catalog::{SeedError, UnknownCourse};
use thiserror::Error;

/// Errors that abort the shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration failure.
        message: String,
    },
    /// A configured path is not valid UTF-8 or names no file.
    #[error("invalid path '{}'", .path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
    },
    /// A file could not be opened.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The seed menu was rejected.
    #[error("seed menu error: {0}")]
    Seed(#[from] SeedError),
    /// Reading commands or writing output failed.
    #[error("shell I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while parsing a single command line.
///
/// These are reported to the user and the shell carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command word is not recognised.
    #[error("unknown command '{name}'; type 'help' for a list")]
    UnknownCommand {
        /// The unrecognised command word.
        name: String,
    },
    /// A command was given without its required argument.
    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        /// The command missing its argument.
        command: &'static str,
        /// Usage line for the command.
        usage: &'static str,
    },
    /// `add` did not receive exactly four `|`-separated fields.
    #[error("'add' takes 4 fields separated by '|', got {found}")]
    FieldCount {
        /// Number of fields supplied.
        found: usize,
    },
    /// A course label was not recognised.
    #[error(transparent)]
    Course(#[from] UnknownCourse),
}
