//! Error types for chat style values.

use thiserror::Error;

/// Errors that can occur when building style values from host input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// Click action kind outside `open_url`, `run_command` and `suggest_command`.
    #[error("unknown click action: {0}")]
    UnknownClickAction(String),
}
