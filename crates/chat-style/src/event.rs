//! Click and hover events attached to styled text.

use crate::error::StyleError;

/// What happens when a player clicks a span.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Open a URL in the client's browser.
    OpenUrl(String),
    /// Send the text as a chat message or command.
    RunCommand(String),
    /// Put the text into the chat input without sending it.
    SuggestCommand(String),
}

impl ClickAction {
    /// Builds a click action from a host-provided kind name.
    ///
    /// Accepts `open_url`, `run_command` (or `chat`) and `suggest_command`
    /// (or `suggest_chat`), ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_style::ClickAction;
    ///
    /// let action = ClickAction::parse("chat", "/help").unwrap();
    /// assert_eq!(action, ClickAction::RunCommand("/help".into()));
    /// assert!(ClickAction::parse("copy", "x").is_err());
    /// ```
    pub fn parse(kind: &str, value: impl Into<String>) -> Result<Self, StyleError> {
        match kind.to_ascii_lowercase().as_str() {
            "open_url" => Ok(ClickAction::OpenUrl(value.into())),
            "run_command" | "chat" => Ok(ClickAction::RunCommand(value.into())),
            "suggest_command" | "suggest_chat" => Ok(ClickAction::SuggestCommand(value.into())),
            _ => Err(StyleError::UnknownClickAction(kind.to_string())),
        }
    }

    /// The wire name of this action's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl(_) => "open_url",
            ClickAction::RunCommand(_) => "run_command",
            ClickAction::SuggestCommand(_) => "suggest_command",
        }
    }

    /// The action's payload (URL or command text).
    pub fn value(&self) -> &str {
        match self {
            ClickAction::OpenUrl(v)
            | ClickAction::RunCommand(v)
            | ClickAction::SuggestCommand(v) => v,
        }
    }
}

/// Tooltip content shown while hovering a span.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    /// Free text, one entry per tooltip line.
    ShowText(Vec<String>),
    /// An item tooltip, identified by the host's item id.
    ShowItem(String),
    /// An achievement tooltip, identified by the host's achievement id.
    ShowAchievement(String),
}

impl HoverEvent {
    /// Creates a text tooltip from its lines.
    pub fn text<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HoverEvent::ShowText(lines.into_iter().map(Into::into).collect())
    }

    /// The tooltip text with lines joined by line breaks.
    ///
    /// Item and achievement tooltips have no text of their own and
    /// return `None`.
    pub fn joined_text(&self) -> Option<String> {
        match self {
            HoverEvent::ShowText(lines) => Some(lines.join("\n")),
            HoverEvent::ShowItem(_) | HoverEvent::ShowAchievement(_) => None,
        }
    }
}
