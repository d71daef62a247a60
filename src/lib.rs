//! Chat message conversion with memoization.
//!
//! This crate ties the workspace together: [`ChatConverter`] exposes the
//! three conversion entry points and remembers the last result of each in a
//! [`ConversionCache`].
//!
//! - [`ChatConverter::format_plain_string`]: legacy-coded string to span tree
//! - [`ChatConverter::format_rich_message`]: rich message to span tree
//! - [`ChatConverter::to_plain_lines`]: rich message to plain text lines
//!
//! The engine itself lives in `chat_markup`, the style values in
//! `chat_style`; both are re-exported here.

pub mod cache;
pub mod converter;
pub mod error;

pub use chat_markup::{
    Caption, LocaleTable, LocalizedText, Localizer, MessagePart, NoReferences, PartContent,
    Reference, ReferenceKind, ReferenceResolver, ResolvedReference, RichMessage, Span,
    SpanContent, SpanId, SpanTree,
};
pub use chat_style::{ChatColor, ClickAction, FormatCode, Formatting, HoverEvent, StyleState};

pub use cache::{ConversionCache, Slot, fingerprint};
pub use converter::ChatConverter;
pub use error::{ChatError, Result};
