//! Parser for legacy chat text.
//!
//! This module contains the lexer and the formatter that turns its tokens
//! into span segments.

mod formatter;
mod lexer;

pub use formatter::{Formatted, format_into};
pub use lexer::{Lexer, Token, TokenKind};
