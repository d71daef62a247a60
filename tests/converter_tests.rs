//! Tests for the cached conversion entry points.

use std::cell::Cell;
use std::sync::Arc;

use chat_markup_rs::{
    ChatConverter, ChatError, ClickAction, LocaleTable, MessagePart, NoReferences, Reference,
    ReferenceKind, ResolvedReference, RichMessage, SpanContent, StyleState,
};
use insta::assert_snapshot;

fn counting_localizer(calls: &Cell<usize>) -> impl Fn(&str, &[String]) -> String + '_ {
    move |key: &str, params: &[String]| {
        calls.set(calls.get() + 1);
        format!("{key}({})", params.join(","))
    }
}

// ============================================================================
// Plain Strings
// ============================================================================

#[test]
fn plain_string_lines() {
    let mut converter = ChatConverter::default();
    let tree = converter.format_plain_string(Some(
        "§6[Server] §fRestarting in 5\n§7see https://status.example.com.",
    ));
    assert_snapshot!(
        tree.lines().join(" / "),
        @"[Server] Restarting in 5 / see https://status.example.com."
    );
}

#[test]
fn absent_string() {
    let mut converter = ChatConverter::default();
    let tree = converter.format_plain_string(None);
    assert_eq!(tree.segment_count(), 1);
    assert_eq!(tree.plain_text(), "");
}

#[test]
fn same_string_is_cached() {
    let mut converter = ChatConverter::default();
    let first = converter.format_plain_string(Some("§chello"));
    let second = converter.format_plain_string(Some("§chello"));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn different_string_replaces_cache() {
    let mut converter = ChatConverter::default();
    let first = converter.format_plain_string(Some("one"));
    let other = converter.format_plain_string(Some("two"));
    let again = converter.format_plain_string(Some("one"));
    assert_eq!(other.plain_text(), "two");
    assert!(!Arc::ptr_eq(&first, &again));
    assert_eq!(*first, *again);
}

#[test]
fn none_and_empty_are_distinct_keys() {
    let mut converter = ChatConverter::default();
    let none = converter.format_plain_string(None);
    let empty = converter.format_plain_string(Some(""));
    assert!(!Arc::ptr_eq(&none, &empty));
}

// ============================================================================
// Rich Messages
// ============================================================================

#[test]
fn rich_message_merges_and_caches() {
    let mut converter = ChatConverter::default();
    let message = RichMessage::new()
        .then(MessagePart::text("§eClick "))
        .then(MessagePart::text("here").with_click(ClickAction::RunCommand("/spawn".into())));

    let first = converter.format_rich_message(&message).unwrap();
    let second = converter.format_rich_message(&message.clone()).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.lines(), vec!["Click here"]);
}

#[test]
fn rich_message_failure_is_not_cached() {
    let mut converter = ChatConverter::default();
    let good = RichMessage::new().then(MessagePart::text("ok"));
    let bad = RichMessage::new().then(MessagePart::reference(ReferenceKind::Item, "stone"));

    let cached = converter.format_rich_message(&good).unwrap();
    let err = converter.format_rich_message(&bad).unwrap_err();
    assert_eq!(err, ChatError::UnsupportedReferenceKind("item".into()));

    let hash = chat_markup_rs::fingerprint(&good);
    assert!(Arc::ptr_eq(&converter.cache().rich.get(hash).unwrap(), &cached));
}

#[test]
fn rich_message_with_resolver() {
    let resolver = |reference: &Reference| -> Result<ResolvedReference, ChatError> {
        Ok(ResolvedReference {
            content: SpanContent::Translate {
                key: format!("achievement.{}", reference.id),
                params: Vec::new(),
            },
            style: StyleState::new(),
        })
    };
    let mut converter = ChatConverter::new(LocaleTable::new(), resolver);
    let message = RichMessage::new()
        .then(MessagePart::text("Alex has just earned "))
        .then(MessagePart::reference(ReferenceKind::Achievement, "openInventory"));

    let tree = converter.format_rich_message(&message).unwrap();
    assert_eq!(tree.segment_count(), 1);
    let last = *tree.subtree(tree.roots()[0]).last().unwrap();
    assert_eq!(
        tree.span(last).content(),
        &SpanContent::Translate {
            key: "achievement.openInventory".into(),
            params: Vec::new(),
        }
    );
}

// ============================================================================
// Plain Lines
// ============================================================================

#[test]
fn plain_lines_translate_and_split() {
    let table: LocaleTable = [("death.fell.accident.ladder", "%s fell off a ladder")]
        .into_iter()
        .collect();
    let mut converter = ChatConverter::new(table, NoReferences);
    let message = RichMessage::new()
        .then(MessagePart::localized("death.fell.accident.ladder", ["Steve"]))
        .then(MessagePart::text("\n§7Respawning..."));

    let lines = converter.to_plain_lines(&message);
    assert_eq!(*lines, vec!["Steve fell off a ladder", "§7Respawning..."]);
}

#[test]
fn plain_lines_are_cached() {
    let calls = Cell::new(0);
    let mut converter = ChatConverter::new(counting_localizer(&calls), NoReferences);
    let message = RichMessage::new().then(MessagePart::localized("gui.done", ["a", "b"]));

    let first = converter.to_plain_lines(&message);
    let second = converter.to_plain_lines(&message);

    assert_eq!(*first, vec!["gui.done(a,b)"]);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.get(), 1);
}

#[test]
fn entry_points_have_separate_slots() {
    let mut converter = ChatConverter::default();
    let message = RichMessage::new().then(MessagePart::text("shared"));

    let tree = converter.format_rich_message(&message).unwrap();
    let lines = converter.to_plain_lines(&message);
    let again = converter.format_rich_message(&message).unwrap();

    assert_eq!(*lines, vec!["shared"]);
    assert!(Arc::ptr_eq(&tree, &again));
    assert!(converter.cache().strings.stored_hash().is_none());
}
