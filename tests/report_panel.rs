// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! End-to-end: load a report fixture from disk, compose the context tree,
//! and walk the navigation stores the way the panel does.

use std::path::{Path, PathBuf};

use ctxpanel::compose::compose_context_tree;
use ctxpanel::model::Anchor;
use ctxpanel::nav::{RegistryEntry, SectionRegistry, VisibilityTracker};
use ctxpanel::store::load_report;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn anchor(value: &str) -> Anchor {
    Anchor::new(value).expect("anchor")
}

#[test]
fn full_report_composes_every_group() {
    let record = load_report(fixtures_dir().join("occurrence_full.json")).expect("load report");
    let tree = compose_context_tree(&record);

    let groups: Vec<&str> = tree
        .iter()
        .filter(|group| group.is_visible())
        .map(|group| group.anchor.as_str())
        .collect();
    assert_eq!(groups, vec!["request", "app", "livewire", "context", "custom"]);

    let custom = tree.last().expect("custom group");
    let custom_sections: Vec<(&str, &str)> = custom
        .visible_sections()
        .map(|section| (section.title.as_str(), section.anchor.as_str()))
        .collect();
    assert_eq!(custom_sections, vec![("Billing Flags", "custom-billing-flags")]);
}

#[test]
fn sparse_report_composes_only_populated_groups() {
    let record = load_report(fixtures_dir().join("occurrence_sparse.json")).expect("load report");
    let tree = compose_context_tree(&record);

    let visible: Vec<&str> = tree
        .iter()
        .filter(|group| group.is_visible())
        .flat_map(|group| group.visible_sections())
        .map(|section| section.anchor.as_str())
        .collect();
    assert_eq!(visible, vec!["app-routing", "context-versions"]);
}

#[test]
fn registry_and_tracker_walk_through_matches_document_order() {
    let record = load_report(fixtures_dir().join("occurrence_full.json")).expect("load report");
    let tree = compose_context_tree(&record);

    let mut registry = SectionRegistry::new();
    let mut tracker = VisibilityTracker::new();
    for group in tree.iter().filter(|group| group.is_visible()) {
        for section in group.visible_sections() {
            registry
                .register(RegistryEntry {
                    anchor: section.anchor.clone(),
                    title: section.title.clone(),
                    group_anchor: group.anchor.clone(),
                    icon: section.icon,
                })
                .expect("unique anchors across the composed tree");
            tracker.observe(section.anchor.clone());
        }
    }

    // Sidebar clustering keeps group order and in-group order.
    let grouped = registry.grouped();
    let group_order: Vec<&str> = grouped.iter().map(|(group, _)| group.as_str()).collect();
    assert_eq!(group_order, vec!["request", "app", "livewire", "context", "custom"]);

    // Scroll simulation: the last sections of the request group scroll in,
    // then the viewport moves on into the app group.
    tracker.enter(&anchor("request-cookies"));
    tracker.enter(&anchor("app-routing"));
    assert_eq!(tracker.active(), Some(&anchor("request-cookies")));

    tracker.leave(&anchor("request-cookies"));
    assert_eq!(tracker.active(), Some(&anchor("app-routing")));

    // Everything scrolled out between sections: the highlight stays put.
    tracker.leave(&anchor("app-routing"));
    assert_eq!(tracker.active(), Some(&anchor("app-routing")));
}

#[test]
fn full_report_round_trips_the_snippet_sources() {
    let record = load_report(fixtures_dir().join("occurrence_full.json")).expect("load report");

    let body = record.request_data.as_ref().and_then(|data| data.body.as_deref());
    assert!(body.is_some_and(|body| body.contains("sepa_debit")));

    let trace = record.exception.as_ref().and_then(|exception| exception.trace.as_deref());
    assert!(trace.is_some_and(|trace| trace.starts_with("#0 ")));
}
