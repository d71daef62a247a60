//! Assembles rich messages into span trees.
//!
//! Parts are converted one after another into a single [`SpanTree`]. The
//! style reached at the end of one text part carries over into the next, and
//! a part that continues the previous line is merged into it instead of
//! starting a new segment.

use chat_style::{HoverEvent, StyleState};

use crate::error::ChatError;
use crate::message::{Caption, LocalizedText, MessagePart, PartContent, RichMessage};
use crate::parser::format_into;
use crate::resolve::ReferenceResolver;
use crate::span::{Span, SpanId, SpanTree};

/// Converts `message` into a span tree, resolving references with `resolver`.
///
/// Fails if any reference cannot be resolved; nothing is returned for the
/// parts converted before the failure.
///
/// # Examples
///
/// ```
/// use chat_markup::{MessagePart, NoReferences, RichMessage, assemble};
///
/// let message = RichMessage::new()
///     .then(MessagePart::text("§aHello "))
///     .then(MessagePart::text("World"));
/// let tree = assemble(&message, &NoReferences).unwrap();
/// assert_eq!(tree.lines(), vec!["Hello World"]);
/// ```
pub fn assemble<R>(message: &RichMessage, resolver: &R) -> Result<SpanTree, ChatError>
where
    R: ReferenceResolver + ?Sized,
{
    let mut assembler = Assembler::new(resolver);
    for part in message {
        assembler.push_part(part)?;
    }
    Ok(assembler.tree)
}

struct Assembler<'r, R: ?Sized> {
    resolver: &'r R,
    tree: SpanTree,
    /// Style carried from one text part into the next.
    style: StyleState,
    /// Whether the previous part's text ended with a line break.
    ends_with_linebreak: bool,
}

impl<'r, R> Assembler<'r, R>
where
    R: ReferenceResolver + ?Sized,
{
    fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            tree: SpanTree::new(),
            style: StyleState::new(),
            ends_with_linebreak: false,
        }
    }

    fn push_part(&mut self, part: &MessagePart) -> Result<(), ChatError> {
        if part.content == PartContent::Empty {
            log::trace!("skipping empty message part");
            return Ok(());
        }
        let first = self.tree.segment_count();
        let after_break = std::mem::replace(&mut self.ends_with_linebreak, false);

        let produced = match &part.content {
            PartContent::Text(text) => self.format_text(text),
            PartContent::Localized(text) => vec![self.push_localized(text, None)],
            PartContent::Reference { reference, caption } => {
                let resolved = self.resolver.resolve(reference)?;
                log::trace!("resolved {} reference {:?}", reference.kind.name(), reference.id);
                let hover = resolved.style.hover().cloned();
                match caption {
                    Some(Caption::Localized(text)) => vec![self.push_localized(text, hover)],
                    Some(Caption::Text(text)) => {
                        let roots = self.format_text(text);
                        if let Some(hover) = hover {
                            let owned = self.owned_roots(&roots);
                            self.override_hover(owned, &hover);
                        }
                        roots
                    }
                    None => vec![
                        self.tree
                            .push_root(Span::with_content(resolved.content, resolved.style)),
                    ],
                }
            }
            PartContent::Empty => Vec::new(),
        };

        let owned = self.owned_roots(&produced);
        if !part.tooltip.is_empty() {
            let hover = HoverEvent::ShowText(part.tooltip.clone());
            self.override_hover(owned, &hover);
        }

        if let Some(click) = &part.click {
            for root in owned {
                self.tree
                    .restyle_subtree(*root, |style| style.with_click(Some(click.clone())));
            }
        }

        self.merge_with_previous(first, after_break);
        Ok(())
    }

    /// Formats legacy-coded text, continuing from the running style.
    fn format_text(&mut self, text: &str) -> Vec<SpanId> {
        let formatted = format_into(&mut self.tree, Some(text), self.style.clone());
        self.style = formatted.style;
        self.ends_with_linebreak = formatted.ends_with_linebreak;
        formatted.roots
    }

    fn push_localized(&mut self, text: &LocalizedText, hover: Option<HoverEvent>) -> SpanId {
        let mut style = self.style.clone();
        if hover.is_some() {
            style = style.with_hover(hover);
        }
        self.tree.push_root(Span::translate(
            text.key.clone(),
            text.params.clone(),
            style,
        ))
    }

    /// The roots holding this part's own content.
    ///
    /// Text ending in a line break leaves an empty root open for the next
    /// part. That root belongs to the next line and takes no part-level
    /// style, so nothing leaks into whatever is merged into it later.
    fn owned_roots<'a>(&self, roots: &'a [SpanId]) -> &'a [SpanId] {
        let Some((last, rest)) = roots.split_last() else {
            return roots;
        };
        if self.ends_with_linebreak && self.tree.span(*last).is_blank() {
            rest
        } else {
            roots
        }
    }

    fn override_hover(&mut self, roots: &[SpanId], hover: &HoverEvent) {
        for root in roots {
            self.tree
                .restyle_subtree(*root, |style| style.with_hover(Some(hover.clone())));
        }
    }

    /// Joins the part starting at segment `first` onto the line before it.
    ///
    /// A part continues the previous line unless the previous part's text
    /// ended with a line break. In that case the break left an empty segment
    /// open for the next line, and the part is placed into it.
    fn merge_with_previous(&mut self, first: usize, after_break: bool) {
        if first == 0 || first >= self.tree.segment_count() {
            return;
        }
        let previous = self.tree.span(self.tree.roots()[first - 1]);
        if !after_break || previous.is_blank() {
            log::trace!("merging segment {first} into the previous line");
            self.tree.merge_root_into_previous(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::NoReferences;
    use chat_style::{ChatColor, ClickAction};

    fn assemble_parts(parts: Vec<MessagePart>) -> SpanTree {
        assemble(&RichMessage::from(parts), &NoReferences).unwrap()
    }

    #[test]
    fn style_carries_into_next_part() {
        let tree = assemble_parts(vec![
            MessagePart::text("§cred "),
            MessagePart::text("still red"),
        ]);
        let root = tree.roots()[0];
        let last = *tree.subtree(root).last().unwrap();
        assert_eq!(tree.span(last).own_text(), "still red");
        assert_eq!(tree.span(last).style().color(), Some(ChatColor::Red));
    }

    #[test]
    fn localized_part_uses_running_style() {
        let tree = assemble_parts(vec![
            MessagePart::text("§e"),
            MessagePart::localized("multiplayer.player.joined", ["Alex"]),
        ]);
        assert_eq!(tree.segment_count(), 1);
        let localized = *tree.span(tree.roots()[0]).children().last().unwrap();
        assert_eq!(tree.span(localized).style().color(), Some(ChatColor::Yellow));
    }

    #[test]
    fn click_overrides_url_links() {
        let tree = assemble_parts(vec![
            MessagePart::text("http://a.b").with_click(ClickAction::RunCommand("/x".into())),
        ]);
        for id in tree.subtree(tree.roots()[0]) {
            assert_eq!(
                tree.span(id).style().click(),
                Some(&ClickAction::RunCommand("/x".into()))
            );
        }
    }

    #[test]
    fn references_fail_the_whole_message() {
        let message = RichMessage::new()
            .then(MessagePart::text("before"))
            .then(MessagePart::reference(crate::ReferenceKind::Item, "stone"));
        assert_eq!(
            assemble(&message, &NoReferences),
            Err(ChatError::UnsupportedReferenceKind("item".into()))
        );
    }

    #[test]
    fn empty_message() {
        let tree = assemble_parts(vec![]);
        assert_eq!(tree.segment_count(), 0);
    }
}
