//! Rich message input types.
//!
//! A [`RichMessage`] is an ordered list of [`MessagePart`]s. Each part has
//! some content plus an optional click action and tooltip that apply to
//! everything the part produces.

use chat_style::ClickAction;

use crate::error::ChatError;

/// A localization key with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub key: String,
    pub params: Vec<String>,
}

impl LocalizedText {
    pub fn new<I, S>(key: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

/// The kinds of structured content a message can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Achievement,
    Item,
}

impl ReferenceKind {
    /// Parses a host-provided kind name, ignoring case.
    pub fn parse(kind: &str) -> Result<Self, ChatError> {
        match kind.to_ascii_lowercase().as_str() {
            "achievement" => Ok(ReferenceKind::Achievement),
            "item" => Ok(ReferenceKind::Item),
            _ => Err(ChatError::UnsupportedReferenceKind(kind.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReferenceKind::Achievement => "achievement",
            ReferenceKind::Item => "item",
        }
    }
}

/// A reference to an achievement or item, displayed by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub id: String,
}

/// Text shown in place of a reference's own display text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Caption {
    /// Legacy-coded text, formatted like a plain text part.
    Text(String),
    /// A localized caption.
    Localized(LocalizedText),
}

/// What a part displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartContent {
    /// Legacy-coded text.
    Text(String),
    /// Localized text, translated by the client.
    Localized(LocalizedText),
    /// An achievement or item, optionally shown under a caption.
    Reference {
        reference: Reference,
        caption: Option<Caption>,
    },
    /// A part with nothing to show.
    Empty,
}

/// One unit of a rich message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessagePart {
    pub content: PartContent,
    pub click: Option<ClickAction>,
    /// Tooltip lines; empty means no tooltip.
    pub tooltip: Vec<String>,
}

impl MessagePart {
    pub fn new(content: PartContent) -> Self {
        Self {
            content,
            click: None,
            tooltip: Vec::new(),
        }
    }

    /// A legacy-coded text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(PartContent::Text(text.into()))
    }

    /// A localized text part.
    pub fn localized<I, S>(key: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(PartContent::Localized(LocalizedText::new(key, params)))
    }

    /// A reference part without a caption.
    pub fn reference(kind: ReferenceKind, id: impl Into<String>) -> Self {
        Self::new(PartContent::Reference {
            reference: Reference {
                kind,
                id: id.into(),
            },
            caption: None,
        })
    }

    pub fn empty() -> Self {
        Self::new(PartContent::Empty)
    }

    /// Sets the caption of a reference part.
    ///
    /// Fails with [`ChatError::MalformedInput`] on any other kind of part.
    pub fn with_caption(mut self, caption: Caption) -> Result<Self, ChatError> {
        match &mut self.content {
            PartContent::Reference { caption: slot, .. } => {
                *slot = Some(caption);
                Ok(self)
            }
            _ => Err(ChatError::MalformedInput(
                "only reference parts take a caption".to_string(),
            )),
        }
    }

    pub fn with_click(mut self, click: ClickAction) -> Self {
        self.click = Some(click);
        self
    }

    pub fn with_tooltip<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tooltip = lines.into_iter().map(Into::into).collect();
        self
    }

    /// The literal text this part shows, if it has any.
    ///
    /// This is the text of a text part or the literal caption of a
    /// reference part.
    pub fn literal_text(&self) -> Option<&str> {
        match &self.content {
            PartContent::Text(text) => Some(text.as_str()),
            PartContent::Reference {
                caption: Some(Caption::Text(text)),
                ..
            } => Some(text.as_str()),
            _ => None,
        }
    }

    /// The localized text this part shows, if it has any.
    pub fn localized_text(&self) -> Option<&LocalizedText> {
        match &self.content {
            PartContent::Localized(text) => Some(text),
            PartContent::Reference {
                caption: Some(Caption::Localized(text)),
                ..
            } => Some(text),
            _ => None,
        }
    }
}

/// An ordered sequence of message parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RichMessage {
    parts: Vec<MessagePart>,
}

impl RichMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part, builder style.
    pub fn then(mut self, part: MessagePart) -> Self {
        self.parts.push(part);
        self
    }

    pub fn push(&mut self, part: MessagePart) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<MessagePart>> for RichMessage {
    fn from(parts: Vec<MessagePart>) -> Self {
        Self { parts }
    }
}

impl FromIterator<MessagePart> for RichMessage {
    fn from_iter<I: IntoIterator<Item = MessagePart>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RichMessage {
    type Item = &'a MessagePart;
    type IntoIter = std::slice::Iter<'a, MessagePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
