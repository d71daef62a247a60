//! Legacy format codes.
//!
//! Chat text can carry inline style codes: the marker character `§`
//! followed by a single code character. There are 22 codes:
//!
//! ```text
//! 0-9 a-f   16 colors (a color resets all formatting)
//! k-o       obfuscated, bold, strikethrough, underline, italic
//! r         reset
//! ```
//!
//! Code characters are case-insensitive.

use phf::phf_map;

/// The marker character that introduces a format code.
pub const COLOR_CHAR: char = '\u{00A7}';

/// One of the 16 chat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    /// All colors in code order (`0` through `f`).
    pub const ALL: [ChatColor; 16] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
    ];

    /// The wire name of this color, e.g. `dark_blue`.
    pub fn name(self) -> &'static str {
        match self {
            ChatColor::Black => "black",
            ChatColor::DarkBlue => "dark_blue",
            ChatColor::DarkGreen => "dark_green",
            ChatColor::DarkAqua => "dark_aqua",
            ChatColor::DarkRed => "dark_red",
            ChatColor::DarkPurple => "dark_purple",
            ChatColor::Gold => "gold",
            ChatColor::Gray => "gray",
            ChatColor::DarkGray => "dark_gray",
            ChatColor::Blue => "blue",
            ChatColor::Green => "green",
            ChatColor::Aqua => "aqua",
            ChatColor::Red => "red",
            ChatColor::LightPurple => "light_purple",
            ChatColor::Yellow => "yellow",
            ChatColor::White => "white",
        }
    }

    /// The lowercase code character for this color.
    pub fn code(self) -> char {
        // Variants are declared in code order.
        char::from_digit(self as u32, 16).unwrap_or('f')
    }
}

/// A formatting flag that can be layered on top of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formatting {
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
}

impl Formatting {
    /// The wire name of this flag.
    pub fn name(self) -> &'static str {
        match self {
            Formatting::Obfuscated => "obfuscated",
            Formatting::Bold => "bold",
            Formatting::Strikethrough => "strikethrough",
            Formatting::Underline => "underlined",
            Formatting::Italic => "italic",
        }
    }

    /// The lowercase code character for this flag.
    pub fn code(self) -> char {
        match self {
            Formatting::Obfuscated => 'k',
            Formatting::Bold => 'l',
            Formatting::Strikethrough => 'm',
            Formatting::Underline => 'n',
            Formatting::Italic => 'o',
        }
    }
}

/// The style token a format code stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    Color(ChatColor),
    Format(Formatting),
    Reset,
}

impl FormatCode {
    /// Looks up a code character, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_style::{ChatColor, FormatCode};
    ///
    /// assert_eq!(FormatCode::from_char('C'), Some(FormatCode::Color(ChatColor::Red)));
    /// assert_eq!(FormatCode::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<FormatCode> {
        FORMAT_CODES.get(&c.to_ascii_lowercase()).copied()
    }

    /// The lowercase code character.
    pub fn char(self) -> char {
        match self {
            FormatCode::Color(color) => color.code(),
            FormatCode::Format(format) => format.code(),
            FormatCode::Reset => 'r',
        }
    }

    /// Returns true for the five formatting flags.
    pub fn is_format(self) -> bool {
        matches!(self, FormatCode::Format(_))
    }
}

/// Map of lowercase code characters to their style tokens.
pub static FORMAT_CODES: phf::Map<char, FormatCode> = phf_map! {
    '0' => FormatCode::Color(ChatColor::Black),
    '1' => FormatCode::Color(ChatColor::DarkBlue),
    '2' => FormatCode::Color(ChatColor::DarkGreen),
    '3' => FormatCode::Color(ChatColor::DarkAqua),
    '4' => FormatCode::Color(ChatColor::DarkRed),
    '5' => FormatCode::Color(ChatColor::DarkPurple),
    '6' => FormatCode::Color(ChatColor::Gold),
    '7' => FormatCode::Color(ChatColor::Gray),
    '8' => FormatCode::Color(ChatColor::DarkGray),
    '9' => FormatCode::Color(ChatColor::Blue),
    'a' => FormatCode::Color(ChatColor::Green),
    'b' => FormatCode::Color(ChatColor::Aqua),
    'c' => FormatCode::Color(ChatColor::Red),
    'd' => FormatCode::Color(ChatColor::LightPurple),
    'e' => FormatCode::Color(ChatColor::Yellow),
    'f' => FormatCode::Color(ChatColor::White),
    'k' => FormatCode::Format(Formatting::Obfuscated),
    'l' => FormatCode::Format(Formatting::Bold),
    'm' => FormatCode::Format(Formatting::Strikethrough),
    'n' => FormatCode::Format(Formatting::Underline),
    'o' => FormatCode::Format(Formatting::Italic),
    'r' => FormatCode::Reset,
};

/// Removes every valid format code from `text`.
///
/// A marker that is not followed by a known code character is kept.
///
/// ```
/// use chat_style::strip_codes;
///
/// assert_eq!(strip_codes("§cHello §lWorld"), "Hello World");
/// assert_eq!(strip_codes("100§"), "100§");
/// ```
pub fn strip_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            if let Some(&next) = chars.peek() {
                if FormatCode::from_char(next).is_some() {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_code() {
        assert_eq!(FORMAT_CODES.len(), 22);
        let colors = FORMAT_CODES
            .values()
            .filter(|code| matches!(code, FormatCode::Color(_)))
            .count();
        assert_eq!(colors, 16);
    }

    #[test]
    fn color_codes_round_trip() {
        for color in ChatColor::ALL {
            assert_eq!(FormatCode::from_char(color.code()), Some(FormatCode::Color(color)));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            FormatCode::from_char('L'),
            Some(FormatCode::Format(Formatting::Bold))
        );
        assert_eq!(FormatCode::from_char('R'), Some(FormatCode::Reset));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(FormatCode::from_char('g'), None);
        assert_eq!(FormatCode::from_char('p'), None);
        assert_eq!(FormatCode::from_char(COLOR_CHAR), None);
    }

    #[test]
    fn strip_keeps_dangling_marker() {
        assert_eq!(strip_codes("§zok§"), "§zok§");
        assert_eq!(strip_codes("§a§lgo"), "go");
    }
}
