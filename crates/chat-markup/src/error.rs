//! Error types for chat message conversion.

use chat_style::StyleError;
use thiserror::Error;

/// Errors that abort a conversion.
///
/// A conversion either succeeds completely or fails with one of these;
/// no partial output is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChatError {
    /// A structured reference whose kind the resolver cannot display.
    #[error("unsupported reference kind: {0}")]
    UnsupportedReferenceKind(String),

    /// Input that does not describe a valid message part.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl From<StyleError> for ChatError {
    fn from(err: StyleError) -> Self {
        ChatError::MalformedInput(err.to_string())
    }
}
