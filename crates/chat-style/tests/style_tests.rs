//! Tests for format codes and style state transitions.

use chat_style::{
    COLOR_CHAR, ChatColor, ClickAction, FormatCode, Formatting, HoverEvent, StyleState,
    strip_codes,
};
use insta::assert_snapshot;

// ============================================================================
// Code Table
// ============================================================================

#[test]
fn color_codes_in_order() {
    let codes: String = ChatColor::ALL.iter().map(|c| c.code()).collect();
    assert_snapshot!(codes, @"0123456789abcdef");
}

#[test]
fn color_wire_names() {
    let names: Vec<_> = ChatColor::ALL.iter().map(|c| c.name()).collect();
    assert_snapshot!(
        names.join(","),
        @"black,dark_blue,dark_green,dark_aqua,dark_red,dark_purple,gold,gray,dark_gray,blue,green,aqua,red,light_purple,yellow,white"
    );
}

#[test]
fn every_table_char_round_trips() {
    for c in "0123456789abcdefklmnor".chars() {
        let code = FormatCode::from_char(c).unwrap();
        assert_eq!(code.char(), c);
        let upper = FormatCode::from_char(c.to_ascii_uppercase()).unwrap();
        assert_eq!(upper, code);
    }
}

#[test]
fn formatting_codes_are_formats() {
    for c in "klmno".chars() {
        assert!(FormatCode::from_char(c).unwrap().is_format());
    }
    assert!(!FormatCode::Reset.is_format());
    assert!(!FormatCode::Color(ChatColor::Red).is_format());
}

#[test]
fn marker_char() {
    assert_eq!(COLOR_CHAR, '§');
}

// ============================================================================
// Code Application
// ============================================================================

#[test]
fn color_then_format() {
    let style = StyleState::new()
        .apply_code(FormatCode::Color(ChatColor::Green))
        .apply_code(FormatCode::Format(Formatting::Italic));
    assert_eq!(style.color(), Some(ChatColor::Green));
    assert_eq!(style.italic(), Some(true));
    assert_eq!(style.bold(), None);
}

#[test]
fn formats_accumulate() {
    let style = StyleState::new()
        .apply_code(FormatCode::Format(Formatting::Bold))
        .apply_code(FormatCode::Format(Formatting::Strikethrough))
        .apply_code(FormatCode::Format(Formatting::Obfuscated));
    assert_eq!(style.bold(), Some(true));
    assert_eq!(style.strikethrough(), Some(true));
    assert_eq!(style.obfuscated(), Some(true));
    assert_eq!(style.color(), None);
}

#[test]
fn color_clears_formats_and_click() {
    let style = StyleState::new()
        .with_click(Some(ClickAction::OpenUrl("https://example.com".into())))
        .apply_code(FormatCode::Format(Formatting::Underline))
        .apply_code(FormatCode::Color(ChatColor::Yellow));
    assert_eq!(style, StyleState::new().with_color(Some(ChatColor::Yellow)));
}

#[test]
fn format_keeps_click_and_hover() {
    let style = StyleState::new()
        .with_hover(Some(HoverEvent::ShowItem("diamond".into())))
        .apply_code(FormatCode::Format(Formatting::Bold));
    assert_eq!(style.hover(), Some(&HoverEvent::ShowItem("diamond".into())));
}

#[test]
fn reset_after_anything() {
    let style = StyleState::new()
        .apply_code(FormatCode::Color(ChatColor::DarkRed))
        .apply_code(FormatCode::Format(Formatting::Bold))
        .apply_code(FormatCode::Reset);
    assert!(style.is_empty());
}

// ============================================================================
// Stripping
// ============================================================================

#[test]
fn strip_mixed_case_codes() {
    assert_eq!(strip_codes("§CRed §LBold§r plain"), "Red Bold plain");
}

#[test]
fn strip_plain_text_untouched() {
    assert_eq!(strip_codes("no codes here"), "no codes here");
    assert_eq!(strip_codes(""), "");
}
