//! Error types for the social-auth CLI
//!
//! Messages are written for the developer running the tool, with a hint on
//! how to recover where one exists.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the social-auth CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Precondition Errors ===
    #[error("'{marker}' not found in {dir}. Run this command from the root of the Flutter application")]
    NotProjectRoot { marker: String, dir: String },

    // === File Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Failed to write file '{path}': {error}")]
    FileWrite { path: String, error: String },

    // === Prompt Errors ===
    #[error("Configuration cancelled by user")]
    Interrupted,

    #[error("Failed to read input: {0}")]
    Prompt(String),

    // === External Command Errors ===
    #[error("Failed to run '{command}': {error}")]
    CommandSpawn { command: String, error: String },

    #[error("{step} failed, aborting")]
    FatalStep { step: String },

    // === Verification Errors ===
    #[error("{failed} of {total} checks failed")]
    ChecksFailed { failed: usize, total: usize },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a not-project-root error for the given marker and directory
    pub fn not_project_root(marker: &str, dir: &Path) -> Self {
        Self::NotProjectRoot {
            marker: marker.to_string(),
            dir: dir.display().to_string(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: &Path, error: &io::Error) -> Self {
        Self::FileWrite {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a command spawn error
    pub fn command_spawn(command: &str, error: &io::Error) -> Self {
        Self::CommandSpawn {
            command: command.to_string(),
            error: error.to_string(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == io::ErrorKind::Interrupted => {
                Error::Interrupted
            }
            dialoguer::Error::IO(io) => Error::Prompt(io.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_project_root_message_names_marker() {
        let err = Error::not_project_root("pubspec.yaml", Path::new("/tmp/somewhere"));
        let msg = err.to_string();
        assert!(msg.contains("pubspec.yaml"));
        assert!(msg.contains("/tmp/somewhere"));
    }

    #[test]
    fn test_interrupted_dialoguer_error_maps_to_interrupted() {
        let io = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c");
        let err: Error = dialoguer::Error::IO(io).into();
        assert!(matches!(err, Error::Interrupted));
    }
}
