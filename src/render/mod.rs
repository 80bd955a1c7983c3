// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Per-topic section content renderers.
//!
//! Each renderer is a plain field-to-display mapping from its slice of the
//! record to styled lines; none of them carry logic beyond formatting.
//! Raw-text blocks (body, exception trace, Livewire data) are not rendered
//! here — they flow through the snippet viewer, and `snippet_text` extracts
//! the literal text for it.

use std::collections::BTreeMap;

use ratatui::prelude::*;
use serde_json::Value;

use crate::compose::SectionContent;
use crate::model::{DiagnosticRecord, GitInfo, LivewireInfo, RouteInfo};

const KEY_COLOR: Color = Color::Cyan;
const ABSENT_COLOR: Color = Color::DarkGray;

/// Renders the non-snippet part of a section's content.
pub fn section_lines(content: SectionContent, record: &DiagnosticRecord) -> Vec<Line<'static>> {
    match content {
        SectionContent::Request => request_lines(record),
        SectionContent::Headers => match record.headers.as_ref() {
            Some(headers) => string_map_lines(headers),
            None => vec![absent_line("no headers")],
        },
        SectionContent::QueryString => match record.request_data.as_ref() {
            Some(data) => string_map_lines(&data.query_string),
            None => vec![absent_line("no query string")],
        },
        SectionContent::Body => Vec::new(),
        SectionContent::Files => files_lines(record),
        SectionContent::Session => value_map_lines(&record.session),
        SectionContent::Cookies => string_map_lines(&record.cookies),
        SectionContent::Routing => match record.route.as_ref() {
            Some(route) => routing_lines(route),
            None => vec![absent_line("no route")],
        },
        SectionContent::Views => views_lines(record),
        SectionContent::LivewireComponent => match record.livewire.as_ref() {
            Some(livewire) => livewire_component_lines(livewire),
            None => vec![absent_line("no livewire component")],
        },
        SectionContent::LivewireUpdates => match record.livewire.as_ref() {
            Some(livewire) => livewire_update_lines(livewire),
            None => vec![absent_line("no livewire updates")],
        },
        SectionContent::LivewireData => Vec::new(),
        SectionContent::User => match record.user.as_ref() {
            Some(user) => value_map_lines(user),
            None => vec![absent_line("no user")],
        },
        SectionContent::Git => match record.git.as_ref() {
            Some(git) => git_lines(git),
            None => vec![absent_line("no git info")],
        },
        SectionContent::Versions => string_map_lines(&record.env),
        SectionContent::Exception => exception_lines(record),
        SectionContent::Custom(idx) => match record.custom_context_items.get(idx) {
            Some(item) => value_map_lines(&item.items),
            None => vec![absent_line("no custom context")],
        },
    }
}

/// The literal raw-text block for snippet-backed sections, if the section
/// has one.
pub fn snippet_text(content: SectionContent, record: &DiagnosticRecord) -> Option<String> {
    match content {
        SectionContent::Body => {
            record.request_data.as_ref().and_then(|data| data.body.clone())
        }
        SectionContent::Exception => {
            record.exception.as_ref().and_then(|exception| exception.trace.clone())
        }
        SectionContent::LivewireData => {
            let data = &record.livewire.as_ref()?.data;
            if data.is_empty() {
                return None;
            }
            serde_json::to_string_pretty(data).ok()
        }
        _ => None,
    }
}

fn request_lines(record: &DiagnosticRecord) -> Vec<Line<'static>> {
    let Some(request) = record.request.as_ref() else {
        return vec![absent_line("no request")];
    };

    let mut lines = vec![
        key_value_line("url", request.url.clone()),
        key_value_line("method", request.method.clone()),
    ];
    if let Some(ip) = request.ip.as_ref() {
        lines.push(key_value_line("ip", ip.clone()));
    }
    if let Some(useragent) = request.useragent.as_ref() {
        lines.push(key_value_line("useragent", useragent.clone()));
    }
    lines
}

fn files_lines(record: &DiagnosticRecord) -> Vec<Line<'static>> {
    let files = record.request_data.as_ref().map(|data| data.files.as_slice()).unwrap_or(&[]);
    if files.is_empty() {
        return vec![absent_line("no uploaded files")];
    }
    files
        .iter()
        .map(|file| {
            let detail = match file.mime_type.as_ref() {
                Some(mime) => format!("{} bytes, {mime}", file.size),
                None => format!("{} bytes", file.size),
            };
            key_value_line(&file.name, detail)
        })
        .collect()
}

fn routing_lines(route: &RouteInfo) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(name) = route.route.as_ref() {
        lines.push(key_value_line("route", name.clone()));
    }
    if let Some(action) = route.controller_action.as_ref() {
        lines.push(key_value_line("controller", action.clone()));
    }
    if !route.middleware.is_empty() {
        lines.push(key_value_line("middleware", route.middleware.join(", ")));
    }
    for (key, value) in &route.route_parameters {
        lines.push(key_value_line(&format!("param {key}"), value_text(value)));
    }
    if lines.is_empty() {
        lines.push(absent_line("no routing details"));
    }
    lines
}

fn views_lines(record: &DiagnosticRecord) -> Vec<Line<'static>> {
    let Some(view) = record.view.as_ref() else {
        return vec![absent_line("no view")];
    };
    let mut lines = vec![key_value_line("view", view.name.clone())];
    lines.extend(value_map_lines(&view.data));
    lines
}

fn livewire_component_lines(livewire: &LivewireInfo) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(alias) = livewire.component_alias.as_ref() {
        lines.push(key_value_line("alias", alias.clone()));
    }
    if let Some(class) = livewire.component_class.as_ref() {
        lines.push(key_value_line("class", class.clone()));
    }
    if let Some(id) = livewire.component_id.as_ref() {
        lines.push(key_value_line("id", id.clone()));
    }
    if lines.is_empty() {
        lines.push(absent_line("no component details"));
    }
    lines
}

fn livewire_update_lines(livewire: &LivewireInfo) -> Vec<Line<'static>> {
    if livewire.updates.is_empty() {
        return vec![absent_line("no updates")];
    }
    livewire
        .updates
        .iter()
        .map(|update| key_value_line(&update.kind, value_text(&update.payload)))
        .collect()
}

fn git_lines(git: &GitInfo) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(hash) = git.hash.as_ref() {
        lines.push(key_value_line("hash", hash.clone()));
    }
    if let Some(message) = git.message.as_ref() {
        lines.push(key_value_line("message", message.clone()));
    }
    if let Some(tag) = git.tag.as_ref() {
        lines.push(key_value_line("tag", tag.clone()));
    }
    if let Some(remote) = git.remote.as_ref() {
        lines.push(key_value_line("remote", remote.clone()));
    }
    lines.push(key_value_line("dirty", if git.is_dirty { "yes" } else { "no" }.to_owned()));
    lines
}

fn exception_lines(record: &DiagnosticRecord) -> Vec<Line<'static>> {
    let Some(exception) = record.exception.as_ref() else {
        return vec![absent_line("no exception")];
    };
    let mut lines = Vec::new();
    if let Some(class) = exception.class.as_ref() {
        lines.push(key_value_line("class", class.clone()));
    }
    if let Some(message) = exception.message.as_ref() {
        lines.push(key_value_line("message", message.clone()));
    }
    lines.extend(value_map_lines(&exception.context));
    if lines.is_empty() {
        lines.push(absent_line("no exception details"));
    }
    lines
}

fn string_map_lines(map: &BTreeMap<String, String>) -> Vec<Line<'static>> {
    if map.is_empty() {
        return vec![absent_line("empty")];
    }
    map.iter().map(|(key, value)| key_value_line(key, value.clone())).collect()
}

fn value_map_lines(map: &BTreeMap<String, Value>) -> Vec<Line<'static>> {
    if map.is_empty() {
        return vec![absent_line("empty")];
    }
    map.iter().map(|(key, value)| key_value_line(key, value_text(value))).collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn key_value_line(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(KEY_COLOR)),
        Span::raw(value),
    ])
}

fn absent_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(format!("— {label} —"), Style::default().fg(ABSENT_COLOR)))
}
