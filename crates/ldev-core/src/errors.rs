//! Structured error types shared across the largedev crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LdevError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameters, paths, offending tokens).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Canonical error type for the largedev sampler.
///
/// Both `Argument` and `Range` are fatal: the simulation terminates after
/// printing the diagnostic. `Graph` marks structural misuse of the graph
/// state and `Io` wraps sink failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LdevError {
    /// Invalid configuration values or mode selectors.
    #[error("argument error: {0}")]
    Argument(ErrorInfo),
    /// Observations outside the supported histogram range.
    #[error("range error: {0}")]
    Range(ErrorInfo),
    /// Structural graph errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Output sink failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl LdevError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LdevError::Argument(info)
            | LdevError::Range(info)
            | LdevError::Graph(info)
            | LdevError::Io(info) => info,
        }
    }
}
