// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use crossterm::event::KeyCode;

use super::testing::HeadlessPanel;
use crate::model::fixtures::{demo_record, sparse_record};
use crate::model::{Anchor, CustomContextItem, DiagnosticRecord};

fn anchor(value: &str) -> Anchor {
    Anchor::new(value).expect("anchor")
}

#[test]
fn mounting_registers_every_visible_section() {
    let panel = HeadlessPanel::new(demo_record());
    let app = panel.app();

    assert_eq!(app.registry.len(), 17);
    assert!(app.registry.contains(&anchor("request")));
    assert!(app.registry.contains(&anchor("custom-error-context")));
    assert!(app.snippets.contains_key(&anchor("request-body")));
    assert!(app.snippets.contains_key(&anchor("context-exception")));
    assert!(app.snippets.contains_key(&anchor("livewire-data")));
}

#[test]
fn top_of_document_activates_the_first_section() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);
    assert_eq!(panel.active_anchor(), Some(anchor("request")));
}

#[test]
fn scrolling_to_the_bottom_moves_the_active_anchor() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);
    panel.press(KeyCode::Tab); // content focus
    panel.press(KeyCode::End);

    let active = panel.active_anchor().expect("active after scroll");
    assert_ne!(active, anchor("request"));
    assert!(panel.app().tracker.is_intersecting(&active));
}

#[test]
fn quit_key_ends_the_loop() {
    let mut panel = HeadlessPanel::new(demo_record());
    assert!(!panel.press(KeyCode::Char('j')));
    assert!(panel.press(KeyCode::Char('q')));
}

#[test]
fn help_overlay_swallows_keys_until_dismissed() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.press(KeyCode::Char('?'));
    assert!(panel.app().show_help);

    let scroll_before = panel.app().scroll_y;
    panel.press(KeyCode::Char('j'));
    assert_eq!(panel.app().scroll_y, scroll_before);

    panel.press(KeyCode::Esc);
    assert!(!panel.app().show_help);
}

#[test]
fn sidebar_selection_skips_group_headers_and_jumps_on_enter() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);

    for _ in 0..3 {
        panel.press(KeyCode::Char('j'));
    }
    assert_eq!(panel.app().selected_nav_anchor(), Some(&anchor("request-body")));

    panel.press(KeyCode::Enter);
    assert_eq!(panel.active_anchor(), Some(anchor("request-body")));
}

#[test]
fn expand_key_reveals_the_selected_snippet() {
    let mut panel = HeadlessPanel::new(demo_record());
    for _ in 0..3 {
        panel.press(KeyCode::Char('j'));
    }

    let body = anchor("request-body");
    assert!(panel.app().snippets[&body].is_overflowing());

    panel.press(KeyCode::Char('e'));
    let snippet = &panel.app().snippets[&body];
    assert!(!snippet.is_collapsed());
    assert!(!snippet.is_overflowing());
}

#[test]
fn copy_key_sends_the_full_snippet_value() {
    let mut panel = HeadlessPanel::new(demo_record());
    for _ in 0..3 {
        panel.press(KeyCode::Char('j'));
    }
    panel.press(KeyCode::Char('c'));

    let copied = panel.copied();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].contains("LAMP-BLUE"));
    // The full value, not the eight collapsed rows.
    assert!(copied[0].split('\n').count() > 8);
}

#[test]
fn regex_search_jumps_to_the_matching_section() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);

    panel.press(KeyCode::Char('/'));
    for ch in "git".chars() {
        panel.press(KeyCode::Char(ch));
    }
    panel.press(KeyCode::Enter);

    assert_eq!(panel.active_anchor(), Some(anchor("context-git")));
}

#[test]
fn fuzzy_search_tolerates_typos() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);

    panel.press(KeyCode::Char('\\'));
    for ch in "versons".chars() {
        panel.press(KeyCode::Char(ch));
    }
    panel.press(KeyCode::Enter);

    assert!(!panel.app().search_results.is_empty(), "fuzzy matches must survive ranking");
    // Best score first.
    assert_eq!(panel.app().search_results[0], anchor("context-versions"));
}

#[test]
fn replacing_the_record_remounts_cleanly() {
    let mut panel = HeadlessPanel::new(demo_record());
    panel.set_viewport_rows(24);
    assert_eq!(panel.active_anchor(), Some(anchor("request")));

    panel.app_mut().set_record(sparse_record());

    let anchors: Vec<&str> = panel
        .app()
        .registry
        .entries()
        .iter()
        .map(|entry| entry.anchor.as_str())
        .collect();
    assert_eq!(anchors, vec!["app-routing", "context-versions"]);
    assert_eq!(panel.active_anchor(), Some(anchor("app-routing")));
    assert!(panel.app().snippets.is_empty());
}

#[test]
fn duplicate_custom_anchors_degrade_with_a_notice() {
    let record = DiagnosticRecord {
        custom_context_items: vec![
            CustomContextItem { name: "Error Context".to_owned(), items: Default::default() },
            CustomContextItem { name: "error context".to_owned(), items: Default::default() },
        ],
        ..DiagnosticRecord::default()
    };
    let panel = HeadlessPanel::new(record);
    let app = panel.app();

    let custom_entries = app
        .registry
        .entries()
        .iter()
        .filter(|entry| entry.anchor.as_str() == "custom-error-context")
        .count();
    assert_eq!(custom_entries, 1, "last registration wins, no duplicate rows");
    assert!(app.toast.is_some(), "the collision is surfaced, not silently swallowed");
}
