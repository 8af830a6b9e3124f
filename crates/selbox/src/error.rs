#![forbid(unsafe_code)]

//! selbox error model.
//!
//! Interaction never fails: every key, click, and focus change has a defined
//! transition, and redundant or misdirected input is simply ignored. Errors
//! only arise while *building* a widget: assembling an option list, or
//! reading one from a configuration document.
//!
//! Each subsystem has its own typed error; [`Error`] unifies them so callers
//! can use `?` across the facade.

use std::fmt;

pub use selbox_widgets::select::OptionError;

// ── Domain-Specific Error Types ─────────────────────────────────────────

/// Configuration document errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    Json(String),
    /// A required feature was compiled out.
    Unsupported(&'static str),
}

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for selbox.
#[derive(Debug)]
pub enum Error {
    /// Option list construction failure.
    Options(OptionError),
    /// Configuration loading failure.
    Config(ConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for selbox APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Options(_) => "options",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid option document: {msg}"),
            Self::Unsupported(feature) => write!(f, "feature not enabled: {feature}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for ConfigError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Options(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<OptionError> for Error {
    fn from(err: OptionError) -> Self {
        Self::Options(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.into())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
