// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

// Chrome helpers for the panel: borders, footer, help overlay, and the
// sidebar search scoring. Compiled into `tui` via include!.

use regex::RegexBuilder;

fn panel_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn sidebar_highlight_style(focus: Focus) -> Style {
    if focus == Focus::Sidebar {
        Style::default().bg(Color::Rgb(45, 45, 60)).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn view_title(label: &str, focused: bool) -> String {
    if focused {
        format!(" [{label}] ")
    } else {
        format!(" {label} ")
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn help_text() -> Text<'static> {
    let rows: &[(&str, &str)] = &[
        ("Tab", "switch focus between sidebar and report"),
        ("j/k, ↓/↑", "move selection / scroll"),
        ("PgDn/PgUp", "scroll a page"),
        ("g/G", "top / bottom"),
        ("Enter", "jump to the selected section"),
        ("e", "expand the focused snippet"),
        ("c / y", "copy the focused snippet"),
        ("/", "search sections (regex)"),
        ("\\", "search sections (fuzzy)"),
        ("n/N", "next / previous search hit"),
        ("r", "reload the report file"),
        ("?", "toggle this help"),
        ("q", "quit"),
    ];
    let mut text = Text::default();
    for (keys, action) in rows {
        text.lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<10}"), Style::default().fg(FOOTER_KEY_COLOR)),
            Span::raw((*action).to_owned()),
        ]));
    }
    text
}

fn footer_help_line(toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled("q", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" quit  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("Tab", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" focus  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("/", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" search  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("e", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" expand  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("c", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" copy  ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled("?", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::styled(" help", Style::default().fg(FOOTER_LABEL_COLOR)),
    ];
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            toast_suffix.to_owned(),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn search_prompt(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Regular => "/",
        SearchKind::Fuzzy => "\\",
    }
}

fn search_prompt_len(kind: SearchKind) -> u16 {
    search_prompt(kind).chars().count() as u16
}

fn search_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            search_prompt(app.search_kind).to_owned(),
            Style::default().fg(FOOTER_KEY_COLOR),
        ),
        Span::raw(app.search_query.clone()),
    ];
    if app.search_mode == SearchMode::Results {
        spans.push(Span::styled(
            format!(
                "  [{}/{}]  n/N next/prev, Esc clear",
                app.search_result_index + 1,
                app.search_results.len()
            ),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            toast_suffix.to_owned(),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

/// Case-insensitive regex match over section titles and anchors. An invalid
/// pattern falls back to a literal substring match so partially typed
/// patterns still land somewhere.
fn regular_search(query: &str, registry: &SectionRegistry) -> Vec<Anchor> {
    if query.is_empty() {
        return Vec::new();
    }
    let pattern = RegexBuilder::new(query).case_insensitive(true).build();
    registry
        .entries()
        .iter()
        .filter(|entry| {
            let haystack = search_haystack(entry);
            match &pattern {
                Ok(regex) => regex.is_match(&haystack),
                Err(_) => haystack.to_lowercase().contains(&query.to_lowercase()),
            }
        })
        .map(|entry| entry.anchor.clone())
        .collect()
}

/// Fuzzy match over section titles and anchors, best score first. Ties keep
/// document order.
fn fuzzy_search(query: &str, registry: &SectionRegistry) -> Vec<Anchor> {
    // rapidfuzz ratios are normalized to 0.0..=1.0.
    const MIN_SCORE: f64 = 0.55;

    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, Anchor)> = registry
        .entries()
        .iter()
        .filter_map(|entry| {
            // Score title and anchor separately; a concatenated haystack
            // dilutes the ratio for short queries.
            let title = entry.title.to_lowercase();
            let anchor = entry.anchor.as_str().to_lowercase();
            let score = rapidfuzz::fuzz::ratio(needle.chars(), title.chars())
                .max(rapidfuzz::fuzz::ratio(needle.chars(), anchor.chars()));
            (score >= MIN_SCORE).then(|| (score, entry.anchor.clone()))
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, anchor)| anchor).collect()
}

fn search_haystack(entry: &RegistryEntry) -> String {
    format!("{} {}", entry.title, entry.anchor)
}
