//! Collaborators the converter calls into.
//!
//! Translating localization keys and displaying achievements or items are
//! host concerns. The host provides them through [`Localizer`] and
//! [`ReferenceResolver`].

use std::collections::HashMap;

use chat_style::StyleState;

use crate::error::ChatError;
use crate::message::Reference;
use crate::span::SpanContent;

/// Translates localization keys into text.
pub trait Localizer {
    fn translate(&self, key: &str, params: &[String]) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &[String]) -> String,
{
    fn translate(&self, key: &str, params: &[String]) -> String {
        self(key, params)
    }
}

/// How a reference is displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedReference {
    /// The display unit, usually the item or achievement name.
    pub content: SpanContent,
    /// Style of the display unit; its hover is the reference's own tooltip.
    pub style: StyleState,
}

/// Resolves achievement and item references to display units.
pub trait ReferenceResolver {
    /// Fails with [`ChatError::UnsupportedReferenceKind`] for references the
    /// host cannot display.
    fn resolve(&self, reference: &Reference) -> Result<ResolvedReference, ChatError>;
}

impl<F> ReferenceResolver for F
where
    F: Fn(&Reference) -> Result<ResolvedReference, ChatError>,
{
    fn resolve(&self, reference: &Reference) -> Result<ResolvedReference, ChatError> {
        self(reference)
    }
}

/// A resolver for hosts that have no structured content.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReferences;

impl ReferenceResolver for NoReferences {
    fn resolve(&self, reference: &Reference) -> Result<ResolvedReference, ChatError> {
        Err(ChatError::UnsupportedReferenceKind(
            reference.kind.name().to_string(),
        ))
    }
}

/// An in-memory translation table.
///
/// Translations use printf-style placeholders: `%s` takes the next
/// parameter, `%2$s` takes the second one, `%%` is a literal percent sign.
/// Unknown keys translate to the key itself.
///
/// # Examples
///
/// ```
/// use chat_markup::{LocaleTable, Localizer};
///
/// let mut table = LocaleTable::new();
/// table.insert("chat.type.announcement", "[%s] %s");
/// let params = vec!["Server".to_string(), "hello".to_string()];
/// assert_eq!(table.translate("chat.type.announcement", &params), "[Server] hello");
/// assert_eq!(table.translate("missing.key", &[]), "missing.key");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(key.into(), translation.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Localizer for LocaleTable {
    fn translate(&self, key: &str, params: &[String]) -> String {
        match self.get(key) {
            Some(template) => substitute(template, params),
            None => key.to_string(),
        }
    }
}

/// Fills `%s`, `%N$s` and `%%` placeholders.
///
/// Placeholders that refer to a missing parameter are kept as written.
fn substitute(template: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_param = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if let Some(after) = directive.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = directive.strip_prefix('s') {
            match params.get(next_param) {
                Some(param) => out.push_str(param),
                None => out.push_str("%s"),
            }
            next_param += 1;
            rest = after;
        } else if let Some((index, after)) = positional(directive) {
            match index.checked_sub(1).and_then(|i| params.get(i)) {
                Some(param) => out.push_str(param),
                None => out.push_str(&rest[pos..rest.len() - after.len()]),
            }
            rest = after;
        } else {
            out.push('%');
            rest = directive;
        }
    }

    out.push_str(rest);
    out
}

/// Parses `N$s` at the start of `directive`, returning `N` and the remainder.
fn positional(directive: &str) -> Option<(usize, &str)> {
    let digits = directive.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let index = directive[..digits].parse().ok()?;
    let after = directive[digits..].strip_prefix("$s")?;
    Some((index, after))
}
