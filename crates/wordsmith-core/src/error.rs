//! Application error types with rich context

use std::fmt;

use chrono::{DateTime, Local};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a failed backend call.
///
/// Assigned exactly once, at the adapter boundary, from the transport error
/// variant. Downstream code matches on this tag instead of inspecting message
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The bridge failed to carry the request (I/O on the channel).
    Network,
    /// The backend did not answer in time.
    Timeout,
    /// The backend handled the call and reported a failure.
    Rejected,
    /// The backend answered with a payload that could not be decoded.
    InvalidResponse,
    /// The bridge is closed or was never connected.
    Unavailable,
}

impl ErrorKind {
    /// Name used by [`ErrorReport`] and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Network => "NetworkError",
            ErrorKind::Timeout => "TimeoutError",
            ErrorKind::Rejected => "BackendError",
            ErrorKind::InvalidResponse => "ResponseError",
            ErrorKind::Unavailable => "UnavailableError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    /// A backend call failed. `message` is the fixed user-facing text for the
    /// operation; the underlying transport error only reaches the log.
    #[error("{message}")]
    Backend { message: String, kind: ErrorKind },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn backend(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::Backend {
            message: message.into(),
            kind,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The backend failure kind, if this error came from a backend call.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Backend { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Name of the error class, e.g. `NetworkError` or `ConfigError`.
    pub fn name(&self) -> &'static str {
        match self {
            Error::Io(_) => "IoError",
            Error::Toml(_) => "TomlError",
            Error::Backend { kind, .. } => kind.name(),
            Error::Config { .. } => "ConfigError",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Display-ready error snapshot
// ─────────────────────────────────────────────────────────────────

/// Cloneable snapshot of an [`Error`] for state and messages.
///
/// `message` is what the UI renders verbatim.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub name: String,
    pub message: String,
    pub kind: Option<ErrorKind>,
    pub timestamp: DateTime<Local>,
}

impl ErrorReport {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: None,
            timestamp: Local::now(),
        }
    }

    /// Report for a backend failure of the given kind.
    pub fn backend(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            name: kind.name().to_string(),
            message: message.into(),
            kind: Some(kind),
            timestamp: Local::now(),
        }
    }
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
            kind: err.kind(),
            timestamp: Local::now(),
        }
    }
}

impl From<Error> for ErrorReport {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
