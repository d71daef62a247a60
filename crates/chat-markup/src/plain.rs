//! Flattens rich messages into plain lines.

use crate::message::RichMessage;
use crate::resolve::Localizer;

/// Concatenates the text of every part and splits it into lines.
///
/// Literal text is taken as written, format codes included. Localized text
/// is translated with `localizer`. Parts without text contribute nothing.
/// Trailing empty lines are dropped, but a message without any text still
/// yields one empty line.
///
/// # Examples
///
/// ```
/// use chat_markup::{LocaleTable, MessagePart, RichMessage, plain_lines};
///
/// let table: LocaleTable = [("gui.yes", "Yes")].into_iter().collect();
/// let message = RichMessage::new()
///     .then(MessagePart::text("Continue?\n"))
///     .then(MessagePart::localized("gui.yes", Vec::<String>::new()));
/// assert_eq!(plain_lines(&message, &table), vec!["Continue?", "Yes"]);
/// ```
pub fn plain_lines<L>(message: &RichMessage, localizer: &L) -> Vec<String>
where
    L: Localizer + ?Sized,
{
    let mut text = String::new();
    for part in message {
        if let Some(literal) = part.literal_text() {
            text.push_str(literal);
        } else if let Some(localized) = part.localized_text() {
            text.push_str(&localizer.translate(&localized.key, &localized.params));
        }
    }
    split_lines(&text)
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_trailing_empty_lines() {
        assert_eq!(split_lines("a\nb\n\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn split_empty_and_breaks_only() {
        assert_eq!(split_lines(""), vec![String::new()]);
        assert_eq!(split_lines("\n\n"), vec![String::new()]);
    }
}
