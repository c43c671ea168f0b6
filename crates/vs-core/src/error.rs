//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `vs-core`: invalid configuration and invalid control
/// values.  Both indicate a caller bug and are never silently corrected.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid control value {0}: expected 0 (turn_left), 1 (hold), or 2 (turn_right)")]
    InvalidControl(i64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `vs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
