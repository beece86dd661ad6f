//! Error type for candidate-fit operations.
//!
//! Library functions return [`FitError`]; the binary and the TUI event loop
//! wrap it in `anyhow` at the edge.
//!
//! # Error Codes
//!
//! Error codes are assigned by category:
//! - E001-E009: I/O and filesystem errors
//! - E020-E029: Configuration errors
//! - E030-E039: Model training errors
//! - E040-E049: Terminal errors
//! - E050-E059: Clipboard errors
//!
//! # Example
//!
//! ```rust
//! use candidate_fit::error::{ErrorCode, FitError};
//!
//! let err = FitError::config("seed must be set");
//! assert_eq!(err.code(), ErrorCode::CONFIG_INVALID);
//! assert!(err.is_user_fixable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - malformed TOML
    pub const CONFIG_PARSE: ErrorCode = ErrorCode("E021");

    /// Model error - training data had a single class
    pub const MODEL_SINGLE_CLASS: ErrorCode = ErrorCode("E030");
    /// Model error - solver broke down
    pub const MODEL_SOLVER: ErrorCode = ErrorCode("E031");

    /// Terminal error - setup or draw failed
    pub const TERMINAL: ErrorCode = ErrorCode("E040");

    /// Clipboard error - clipboard unreachable
    pub const CLIPBOARD: ErrorCode = ErrorCode("E050");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for candidate-fit.
#[derive(Debug, Error)]
pub enum FitError {
    /// File system errors.
    #[error("[{code}] I/O error: {message}")]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors.
    #[error("[{code}] Configuration error: {message}")]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Model training errors.
    #[error("[{code}] Model error: {message}")]
    Model { code: ErrorCode, message: String },

    /// Terminal setup and rendering errors.
    #[error("[{code}] Terminal error: {message}")]
    Terminal {
        code: ErrorCode,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Clipboard errors.
    #[error("[{code}] Clipboard error: {message}")]
    Clipboard { code: ErrorCode, message: String },
}

impl FitError {
    /// Create an I/O error from a std::io::Error.
    #[must_use]
    pub fn from_io_error(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
            _ => ErrorCode::IO_GENERIC,
        };
        let message = match &path {
            Some(p) => format!("{}: {}", p.display(), err),
            None => err.to_string(),
        };
        Self::Io {
            code,
            message,
            path,
            source: Some(err),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error for a file that failed to parse.
    #[must_use]
    pub fn config_parse(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_PARSE,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a model error.
    #[must_use]
    pub fn model(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Model {
            code,
            message: message.into(),
        }
    }

    /// Create a terminal error wrapping an I/O failure.
    #[must_use]
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            code: ErrorCode::TERMINAL,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a clipboard error.
    #[must_use]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            code: ErrorCode::CLIPBOARD,
            message: message.into(),
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. }
            | Self::Config { code, .. }
            | Self::Model { code, .. }
            | Self::Terminal { code, .. }
            | Self::Clipboard { code, .. } => *code,
        }
    }

    /// Get the associated path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }

    /// Whether the user can fix this by editing their input or config.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, FitError>;
