//! Chat markup engine.
//!
//! Converts chat messages into trees of styled spans for a presentation
//! layer to serialize or render.
//!
//! # Overview
//!
//! Two kinds of input are supported:
//!
//! - legacy-coded strings such as `§cWarning: §lread https://example.com`,
//!   where `§x` codes change the style, `\n` starts a new line and bare
//!   URLs become clickable,
//! - [`RichMessage`]s, an ordered list of parts carrying text, localized
//!   text or achievement/item references, each with an optional click
//!   action and tooltip.
//!
//! Both produce a [`SpanTree`]: one segment per line, each segment a root
//! span whose children are the styled runs of that line.
//!
//! # Usage
//!
//! ```
//! use chat_markup::{SpanTree, parser::format_into};
//! use chat_style::{ChatColor, StyleState};
//!
//! let mut tree = SpanTree::new();
//! let formatted = format_into(&mut tree, Some("§cHello §lWorld"), StyleState::new());
//! let runs = tree.span(formatted.roots[0]).children();
//! assert_eq!(tree.span(runs[1]).style().bold(), Some(true));
//! assert_eq!(tree.span(runs[1]).style().color(), Some(ChatColor::Red));
//! assert_eq!(tree.plain_text(), "Hello World");
//! ```

pub mod assembler;
pub mod error;
pub mod message;
pub mod parser;
pub mod plain;
pub mod resolve;
pub mod span;

// Re-export main types at crate root
pub use assembler::assemble;
pub use error::ChatError;
pub use message::{
    Caption, LocalizedText, MessagePart, PartContent, Reference, ReferenceKind, RichMessage,
};
pub use plain::plain_lines;
pub use resolve::{LocaleTable, Localizer, NoReferences, ReferenceResolver, ResolvedReference};
pub use span::{Span, SpanContent, SpanId, SpanTree};
