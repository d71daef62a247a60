//! Formats legacy chat text into span segments.
//!
//! Drives the [`Lexer`] over a string while tracking the current style. Text
//! between tokens becomes a run that carries the style active at that point.

use chat_style::{ClickAction, StyleState};

use crate::span::{Span, SpanId, SpanTree};

use super::lexer::{Lexer, TokenKind};

/// The outcome of formatting one string.
#[derive(Clone, Debug, PartialEq)]
pub struct Formatted {
    /// Segment roots added to the tree, in line order.
    pub roots: Vec<SpanId>,
    /// True if the last thing in the text was a line break.
    pub ends_with_linebreak: bool,
    /// The style in effect at the end of the text.
    pub style: StyleState,
}

/// Formats `text` into `tree`, starting from `initial`.
///
/// `None` produces a single empty segment with no style. Otherwise every
/// line of the text becomes one segment: an empty root span followed by one
/// child span per run.
///
/// # Examples
///
/// ```
/// use chat_markup::SpanTree;
/// use chat_markup::parser::format_into;
/// use chat_style::StyleState;
///
/// let mut tree = SpanTree::new();
/// let formatted = format_into(&mut tree, Some("§aHi\nthere"), StyleState::new());
/// assert_eq!(formatted.roots.len(), 2);
/// assert_eq!(tree.lines(), vec!["Hi", "there"]);
/// ```
pub fn format_into(tree: &mut SpanTree, text: Option<&str>, initial: StyleState) -> Formatted {
    let Some(text) = text else {
        let root = tree.push_root(Span::text("", StyleState::new()));
        return Formatted {
            roots: vec![root],
            ends_with_linebreak: false,
            style: initial,
        };
    };

    let mut formatter = Formatter::new(tree, text, initial);
    for token in Lexer::new(text) {
        formatter.flush(token.start);
        match token.kind {
            TokenKind::StyleCode(code) => {
                formatter.style = std::mem::take(&mut formatter.style).apply_code(code);
            }
            TokenKind::LineBreak => {
                formatter.open_segment();
                formatter.ends_with_linebreak = true;
            }
            TokenKind::BareUrl => {
                let link = ClickAction::OpenUrl(token.text.to_string());
                formatter.style = std::mem::take(&mut formatter.style).with_click(Some(link));
                formatter.flush(token.end);
                formatter.style = std::mem::take(&mut formatter.style).with_click(None);
                formatter.ends_with_linebreak = false;
            }
        }
        formatter.cursor = token.end;
    }

    if formatter.cursor < text.len() {
        formatter.flush(text.len());
        formatter.ends_with_linebreak = false;
    }

    formatter.finish()
}

/// Formatting state for one string.
struct Formatter<'t, 'a> {
    tree: &'t mut SpanTree,
    text: &'a str,
    /// Style for the next run.
    style: StyleState,
    /// Byte offset of the first character not yet emitted.
    cursor: usize,
    /// Root of the segment runs are appended to.
    current: SpanId,
    roots: Vec<SpanId>,
    ends_with_linebreak: bool,
}

impl<'t, 'a> Formatter<'t, 'a> {
    fn new(tree: &'t mut SpanTree, text: &'a str, style: StyleState) -> Self {
        let current = tree.push_root(Span::text("", StyleState::new()));
        Self {
            tree,
            text,
            style,
            cursor: 0,
            current,
            roots: vec![current],
            ends_with_linebreak: false,
        }
    }

    /// Emits the text between the cursor and `index` as a run.
    fn flush(&mut self, index: usize) {
        if index <= self.cursor {
            return;
        }
        let run = Span::text(&self.text[self.cursor..index], self.style.clone());
        let id = self.tree.push(run);
        self.tree.append_child(self.current, id);
        self.cursor = index;
    }

    fn open_segment(&mut self) {
        self.current = self.tree.push_root(Span::text("", StyleState::new()));
        self.roots.push(self.current);
    }

    fn finish(self) -> Formatted {
        Formatted {
            roots: self.roots,
            ends_with_linebreak: self.ends_with_linebreak,
            style: self.style,
        }
    }
}
