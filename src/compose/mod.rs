// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Context tree composition.
//!
//! `compose_context_tree` maps a diagnostic record to the ordered tree of
//! groups and sections the panel shows. Composition is a pure function:
//! identical records yield identical anchors, order, and visibility, which
//! is what keeps navigation state stable across re-renders.

use crate::model::{humanize, Anchor, DiagnosticRecord};

/// Fixed-width glyph shown next to a section title in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Request,
    Headers,
    QueryString,
    Body,
    Files,
    Session,
    Cookies,
    Routing,
    Views,
    LivewireComponent,
    LivewireUpdates,
    LivewireData,
    User,
    Git,
    Versions,
    Exception,
    Custom,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Request => "→",
            Self::Headers => "⇄",
            Self::QueryString => "?",
            Self::Body => "≡",
            Self::Files => "▤",
            Self::Session => "⧖",
            Self::Cookies => "◍",
            Self::Routing => "⤳",
            Self::Views => "▦",
            Self::LivewireComponent => "⚡",
            Self::LivewireUpdates => "⇅",
            Self::LivewireData => "▥",
            Self::User => "◉",
            Self::Git => "⎇",
            Self::Versions => "ⓘ",
            Self::Exception => "⚠",
            Self::Custom => "✦",
        }
    }
}

/// Names the external per-topic renderer a section's content flows through,
/// plus the data slice it receives. The composer passes data down and never
/// inspects rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContent {
    Request,
    Headers,
    QueryString,
    Body,
    Files,
    Session,
    Cookies,
    Routing,
    Views,
    LivewireComponent,
    LivewireUpdates,
    LivewireData,
    User,
    Git,
    Versions,
    Exception,
    /// Index into `custom_context_items`.
    Custom(usize),
}

/// A single titled, anchored content block. Identity = anchor; anchors must
/// be unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: String,
    pub anchor: Anchor,
    pub icon: Icon,
    pub content: SectionContent,
    pub visible: bool,
}

/// A top-level named cluster of sections. A group with zero visible sections
/// is itself invisible: never rendered, never registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub title: String,
    pub anchor: Anchor,
    pub sections: Vec<SectionSpec>,
}

impl GroupSpec {
    pub fn is_visible(&self) -> bool {
        self.sections.iter().any(|section| section.visible)
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionSpec> {
        self.sections.iter().filter(|section| section.visible)
    }
}

/// Composes the ordered group/section tree for one record.
///
/// Visibility is resolved here, not at render time; every access to the
/// record is defensive, so missing optional fields select sections away
/// instead of faulting. Structural validity of the record root is the
/// loader's precondition (see `store`).
pub fn compose_context_tree(record: &DiagnosticRecord) -> Vec<GroupSpec> {
    let mut groups = Vec::with_capacity(5);

    if let (Some(_), Some(_), Some(_)) =
        (record.request_data.as_ref(), record.request.as_ref(), record.headers.as_ref())
    {
        let query_string_populated =
            record.request_data.as_ref().is_some_and(|data| !data.query_string.is_empty());
        let files_populated =
            record.request_data.as_ref().is_some_and(|data| !data.files.is_empty());

        groups.push(GroupSpec {
            title: "Request".to_owned(),
            anchor: static_anchor("request"),
            sections: vec![
                section("Request", "request", Icon::Request, SectionContent::Request, true),
                section(
                    "Headers",
                    "request-headers",
                    Icon::Headers,
                    SectionContent::Headers,
                    true,
                ),
                section(
                    "Query String",
                    "request-query-string",
                    Icon::QueryString,
                    SectionContent::QueryString,
                    query_string_populated,
                ),
                section("Body", "request-body", Icon::Body, SectionContent::Body, true),
                section(
                    "Files",
                    "request-files",
                    Icon::Files,
                    SectionContent::Files,
                    files_populated,
                ),
                section(
                    "Session",
                    "request-session",
                    Icon::Session,
                    SectionContent::Session,
                    !record.session.is_empty(),
                ),
                section(
                    "Cookies",
                    "request-cookies",
                    Icon::Cookies,
                    SectionContent::Cookies,
                    !record.cookies.is_empty(),
                ),
            ],
        });
    }

    if record.route.is_some() || record.view.is_some() {
        groups.push(GroupSpec {
            title: "App".to_owned(),
            anchor: static_anchor("app"),
            sections: vec![
                section(
                    "Routing",
                    "app-routing",
                    Icon::Routing,
                    SectionContent::Routing,
                    record.route.is_some(),
                ),
                section(
                    "Views",
                    "app-views",
                    Icon::Views,
                    SectionContent::Views,
                    record.view.is_some(),
                ),
            ],
        });
    }

    if record.livewire.is_some() {
        groups.push(GroupSpec {
            title: "Livewire".to_owned(),
            anchor: static_anchor("livewire"),
            sections: vec![
                section(
                    "Component",
                    "livewire-component",
                    Icon::LivewireComponent,
                    SectionContent::LivewireComponent,
                    true,
                ),
                section(
                    "Updates",
                    "livewire-updates",
                    Icon::LivewireUpdates,
                    SectionContent::LivewireUpdates,
                    true,
                ),
                section(
                    "Data",
                    "livewire-data",
                    Icon::LivewireData,
                    SectionContent::LivewireData,
                    true,
                ),
            ],
        });
    }

    groups.push(GroupSpec {
        title: "Context".to_owned(),
        anchor: static_anchor("context"),
        sections: vec![
            section(
                "User",
                "context-user",
                Icon::User,
                SectionContent::User,
                record.user.is_some(),
            ),
            section("Git", "context-git", Icon::Git, SectionContent::Git, record.git.is_some()),
            // Versions renders the env map and defaults to empty, so it is
            // unconditional and keeps the Context group materialized.
            section("Versions", "context-versions", Icon::Versions, SectionContent::Versions, true),
            section(
                "Exception",
                "context-exception",
                Icon::Exception,
                SectionContent::Exception,
                record.exception.is_some(),
            ),
        ],
    });

    if !record.custom_context_items.is_empty() {
        let sections = record
            .custom_context_items
            .iter()
            .enumerate()
            .map(|(idx, item)| SectionSpec {
                title: humanize(&item.name),
                anchor: custom_anchor(&item.name),
                icon: Icon::Custom,
                content: SectionContent::Custom(idx),
                visible: true,
            })
            .collect();
        groups.push(GroupSpec {
            title: "Custom".to_owned(),
            anchor: static_anchor("custom"),
            sections,
        });
    }

    groups
}

fn section(
    title: &str,
    anchor: &str,
    icon: Icon,
    content: SectionContent,
    visible: bool,
) -> SectionSpec {
    SectionSpec {
        title: title.to_owned(),
        anchor: static_anchor(anchor),
        icon,
        content,
        visible,
    }
}

fn static_anchor(value: &str) -> Anchor {
    Anchor::new(value).expect("static anchor literal")
}

fn custom_anchor(raw_name: &str) -> Anchor {
    let slug = Anchor::slug(raw_name);
    Anchor::new(format!("custom-{slug}")).expect("custom anchor from slug")
}
