//! Style state for chat spans.
//!
//! A [`StyleState`] is a plain value. The only way to change one is through
//! the consuming `with_*` builders, which return a new value, so a style that
//! has been attached to a span can never be altered by later formatting.

use crate::code::{ChatColor, FormatCode, Formatting};
use crate::event::{ClickAction, HoverEvent};

/// Color, formatting flags, click and hover of a span.
///
/// Formatting flags are tri-state: `None` means "inherit from the parent
/// span at render time", `Some(false)` explicitly turns the flag off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    color: Option<ChatColor>,
    bold: Option<bool>,
    italic: Option<bool>,
    underlined: Option<bool>,
    strikethrough: Option<bool>,
    obfuscated: Option<bool>,
    click: Option<ClickAction>,
    hover: Option<HoverEvent>,
}

impl StyleState {
    /// Create a new style with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn color(&self) -> Option<ChatColor> {
        self.color
    }

    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    pub fn underlined(&self) -> Option<bool> {
        self.underlined
    }

    pub fn strikethrough(&self) -> Option<bool> {
        self.strikethrough
    }

    pub fn obfuscated(&self) -> Option<bool> {
        self.obfuscated
    }

    pub fn click(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverEvent> {
        self.hover.as_ref()
    }

    /// Get the tri-state value of a formatting flag.
    pub fn format(&self, format: Formatting) -> Option<bool> {
        match format {
            Formatting::Obfuscated => self.obfuscated,
            Formatting::Bold => self.bold,
            Formatting::Strikethrough => self.strikethrough,
            Formatting::Underline => self.underlined,
            Formatting::Italic => self.italic,
        }
    }

    /// Returns a copy with the color replaced.
    pub fn with_color(mut self, color: Option<ChatColor>) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with one formatting flag set.
    pub fn with_format(mut self, format: Formatting, value: Option<bool>) -> Self {
        let slot = match format {
            Formatting::Obfuscated => &mut self.obfuscated,
            Formatting::Bold => &mut self.bold,
            Formatting::Strikethrough => &mut self.strikethrough,
            Formatting::Underline => &mut self.underlined,
            Formatting::Italic => &mut self.italic,
        };
        *slot = value;
        self
    }

    /// Returns a copy with the click action replaced.
    pub fn with_click(mut self, click: Option<ClickAction>) -> Self {
        self.click = click;
        self
    }

    /// Returns a copy with the hover event replaced.
    pub fn with_hover(mut self, hover: Option<HoverEvent>) -> Self {
        self.hover = hover;
        self
    }

    /// Applies a format code the way legacy chat text does.
    ///
    /// - reset discards everything,
    /// - a formatting flag is added to the current attributes,
    /// - a color starts over with only that color.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_style::{ChatColor, FormatCode, Formatting, StyleState};
    ///
    /// let style = StyleState::new()
    ///     .apply_code(FormatCode::Color(ChatColor::Red))
    ///     .apply_code(FormatCode::Format(Formatting::Bold));
    /// assert_eq!(style.color(), Some(ChatColor::Red));
    /// assert_eq!(style.bold(), Some(true));
    ///
    /// let style = style.apply_code(FormatCode::Color(ChatColor::Blue));
    /// assert_eq!(style.bold(), None);
    /// ```
    pub fn apply_code(self, code: FormatCode) -> Self {
        match code {
            FormatCode::Reset => StyleState::new(),
            FormatCode::Format(format) => self.with_format(format, Some(true)),
            FormatCode::Color(color) => StyleState::new().with_color(Some(color)),
        }
    }

    /// Fill attributes that are unset here from `parent`.
    ///
    /// This is how a renderer resolves inherited attributes down a span
    /// chain. Values set on `self` always win.
    pub fn inherit(&self, parent: &StyleState) -> StyleState {
        StyleState {
            color: self.color.or(parent.color),
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underlined: self.underlined.or(parent.underlined),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            obfuscated: self.obfuscated.or(parent.obfuscated),
            click: self.click.clone().or_else(|| parent.click.clone()),
            hover: self.hover.clone().or_else(|| parent.hover.clone()),
        }
    }
}
