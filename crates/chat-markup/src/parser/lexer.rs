//! Lexer for legacy chat text.
//!
//! Finds the three kinds of tokens in a message: `§x` format codes, line
//! breaks and bare URLs. Text between tokens is not emitted; callers use the
//! token offsets to slice it out themselves.

use chat_style::{COLOR_CHAR, FormatCode};

/// Punctuation that ends a sentence and is not part of a trailing URL.
const URL_TRAILING_PUNCTUATION: [char; 6] = ['.', '?', '!', ',', ';', ':'];

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A format code such as `§c`.
    StyleCode(FormatCode),
    /// A `\n` character.
    LineBreak,
    /// An `http://` or `https://` link.
    BareUrl,
}

/// A token with its byte range in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The matched source text.
    pub text: &'a str,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

/// Lexer for legacy chat text.
///
/// # Examples
///
/// ```
/// use chat_markup::parser::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new("§cHi\nsee https://example.com.").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::LineBreak);
/// assert_eq!(tokens[2].text, "https://example.com");
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Try to match a token at the current position.
    fn match_here(&self) -> Option<(TokenKind, usize)> {
        let rest = self.remaining();
        let mut chars = rest.chars();

        match chars.next()? {
            COLOR_CHAR => {
                let code = chars.next().and_then(FormatCode::from_char)?;
                // Every code char is ASCII.
                Some((TokenKind::StyleCode(code), COLOR_CHAR.len_utf8() + 1))
            }
            '\n' => Some((TokenKind::LineBreak, 1)),
            'h' | 'H' => url_len(rest).map(|len| (TokenKind::BareUrl, len)),
            _ => None,
        }
    }

    /// Advance by one character.
    fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.pos += c.len_utf8();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            if let Some((kind, len)) = self.match_here() {
                let start = self.pos;
                self.pos += len;
                return Some(Token {
                    kind,
                    text: &self.input[start..self.pos],
                    start,
                    end: self.pos,
                });
            }
            self.advance();
        }
        None
    }
}

/// Length in bytes of the URL starting at the beginning of `text`, if any.
///
/// After the scheme at least one non-space character is taken, then the URL
/// grows one character at a time until what follows it is an optional
/// sentence punctuation mark and then a space, a line break or the end of
/// the text.
fn url_len(text: &str) -> Option<usize> {
    let scheme = ["https://", "http://"]
        .into_iter()
        .find(|scheme| starts_with_ignore_case(text, scheme))?;

    let mut end = scheme.len();
    let first = text[end..].chars().next()?;
    if first == ' ' {
        return None;
    }
    end += first.len_utf8();

    while !url_ends_at(&text[end..]) {
        // Not a boundary, so the next char is neither a space nor a line break.
        match text[end..].chars().next() {
            Some(c) => end += c.len_utf8(),
            None => break,
        }
    }

    Some(end)
}

fn url_ends_at(rest: &str) -> bool {
    let rest = rest
        .strip_prefix(URL_TRAILING_PUNCTUATION.as_slice())
        .unwrap_or(rest);
    rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\n')
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_style::{ChatColor, Formatting};

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(input).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn lex_plain_text() {
        assert!(lex("Hello World").is_empty());
    }

    #[test]
    fn lex_style_codes() {
        assert_eq!(
            lex("§cred §Lbold"),
            vec![
                (TokenKind::StyleCode(FormatCode::Color(ChatColor::Red)), "§c"),
                (TokenKind::StyleCode(FormatCode::Format(Formatting::Bold)), "§L"),
            ]
        );
    }

    #[test]
    fn lex_unknown_code_is_text() {
        assert!(lex("§z§").is_empty());
    }

    #[test]
    fn lex_offsets() {
        let tokens: Vec<_> = Lexer::new("ab§r\n").collect();
        assert_eq!(tokens[0].start, 2);
        assert_eq!(tokens[0].end, 5);
        assert_eq!(tokens[1].start, 5);
        assert_eq!(tokens[1].end, 6);
    }

    #[test]
    fn lex_url_trailing_period() {
        assert_eq!(
            lex("see https://example.com/path. Bye"),
            vec![(TokenKind::BareUrl, "https://example.com/path")]
        );
    }

    #[test]
    fn lex_url_keeps_inner_punctuation() {
        assert_eq!(
            lex("http://a.b/c?d=e!"),
            vec![(TokenKind::BareUrl, "http://a.b/c?d=e")]
        );
    }

    #[test]
    fn lex_url_stops_at_line_break() {
        assert_eq!(
            lex("https://x.y\nnext"),
            vec![(TokenKind::BareUrl, "https://x.y"), (TokenKind::LineBreak, "\n")]
        );
    }

    #[test]
    fn lex_url_case_insensitive_scheme() {
        assert_eq!(lex("HTTPS://X.Y"), vec![(TokenKind::BareUrl, "HTTPS://X.Y")]);
    }

    #[test]
    fn lex_scheme_without_body() {
        assert!(lex("http:// and https://").is_empty());
    }

    #[test]
    fn lex_url_swallows_codes() {
        assert_eq!(
            lex("http://a§cb"),
            vec![(TokenKind::BareUrl, "http://a§cb")]
        );
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("日本§a語"),
            vec![(TokenKind::StyleCode(FormatCode::Color(ChatColor::Green)), "§a")]
        );
    }
}
