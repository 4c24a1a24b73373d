//! CLI error type.

use std::io;
use std::path::{Path, PathBuf};

use condpath_scan::{Cancelled, ConfigError};

/// Anything that stops a command before it prints its result.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line; usage is printed after the message.
    #[error("{0}")]
    Usage(String),

    #[error("invalid line number '{value}' (expected a zero-based integer)")]
    InvalidLine { value: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}", describe_read_error(.path, .source))]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl CliError {
    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidLine { .. })
    }
}

fn describe_read_error(path: &Path, error: &io::Error) -> String {
    let path = path.display();
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
