//! The public conversion entry points.

use std::sync::Arc;

use chat_markup::parser::format_into;
use chat_markup::{
    LocaleTable, Localizer, NoReferences, ReferenceResolver, RichMessage, SpanTree, assemble,
    plain_lines,
};
use chat_style::StyleState;

use crate::cache::{ConversionCache, fingerprint};
use crate::error::Result;

/// Converts chat messages, remembering the last result of each entry point.
///
/// The converter owns the host's localization table and reference resolver
/// and a [`ConversionCache`]. It is not meant to be shared between threads
/// without a lock; every method takes `&mut self`.
///
/// # Examples
///
/// ```
/// use chat_markup_rs::ChatConverter;
///
/// let mut converter = ChatConverter::default();
/// let tree = converter.format_plain_string(Some("§aReady\n§7Set"));
/// assert_eq!(tree.lines(), vec!["Ready", "Set"]);
/// ```
#[derive(Debug)]
pub struct ChatConverter<L = LocaleTable, R = NoReferences> {
    localizer: L,
    resolver: R,
    cache: ConversionCache,
}

impl Default for ChatConverter {
    fn default() -> Self {
        Self::new(LocaleTable::new(), NoReferences)
    }
}

impl<L, R> ChatConverter<L, R>
where
    L: Localizer,
    R: ReferenceResolver,
{
    pub fn new(localizer: L, resolver: R) -> Self {
        Self {
            localizer,
            resolver,
            cache: ConversionCache::new(),
        }
    }

    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn cache(&self) -> &ConversionCache {
        &self.cache
    }

    /// Converts a legacy-coded string, one segment per line.
    ///
    /// `None` converts to a single empty segment.
    pub fn format_plain_string(&mut self, message: Option<&str>) -> Arc<SpanTree> {
        let hash = fingerprint(&message);
        self.cache.strings.get_or_insert_with(hash, || {
            log::debug!("formatting plain string of {} bytes", message.map_or(0, str::len));
            let mut tree = SpanTree::new();
            format_into(&mut tree, message, StyleState::new());
            tree
        })
    }

    /// Converts a rich message.
    ///
    /// Fails if a reference cannot be resolved. Failures are not cached.
    pub fn format_rich_message(&mut self, message: &RichMessage) -> Result<Arc<SpanTree>> {
        let hash = fingerprint(message);
        let resolver = &self.resolver;
        self.cache.rich.get_or_try_insert_with(hash, || {
            log::debug!("assembling rich message with {} parts", message.len());
            assemble(message, resolver)
        })
    }

    /// Flattens a rich message into plain text lines.
    pub fn to_plain_lines(&mut self, message: &RichMessage) -> Arc<Vec<String>> {
        let hash = fingerprint(message);
        let localizer = &self.localizer;
        self.cache
            .plain_lines
            .get_or_insert_with(hash, || plain_lines(message, localizer))
    }
}
