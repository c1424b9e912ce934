//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The input is neither an IP literal nor a plausible host name.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
