// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! Hosts the context panel: a navigation sidebar fed by the section
//! registry, a scrollable content pane whose viewport movements drive the
//! visibility tracker, and snippet expand/copy handling.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::compose::{compose_context_tree, GroupSpec};
use crate::model::{Anchor, DiagnosticRecord};
use crate::nav::{RegistryEntry, SectionRegistry, VisibilityTracker};
use crate::render::{section_lines, snippet_text};
use crate::snippet::{Clipboard, Osc52Clipboard, Snippet};
use crate::store::load_report;

const ACTIVE_COLOR: Color = Color::LightGreen;
const GROUP_COLOR: Color = Color::Yellow;
const SECTION_TITLE_COLOR: Color = Color::White;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const SNIPPET_HINT_COLOR: Color = Color::Magenta;
const COPIED_COLOR: Color = Color::Green;
const TOAST_TTL: Duration = Duration::from_secs(4);
const SIDEBAR_WIDTH: u16 = 32;

/// Runs the interactive panel for one record.
pub fn run(record: DiagnosticRecord, report_path: Option<PathBuf>) -> io::Result<()> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(record);
    app.report_path = report_path;

    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = rows[0];
    let status_area = rows[1];

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main_area);
    let sidebar_area = panes[0];
    let content_area = panes[1];

    app.viewport_rows = content_area.height.saturating_sub(2);
    app.sync_viewport();

    draw_sidebar(frame, app, sidebar_area);
    draw_content(frame, app, content_area);

    let toast_suffix = app.take_toast_suffix();
    if app.search_mode != SearchMode::Inactive {
        let status = Paragraph::new(search_footer_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        if app.search_mode == SearchMode::Editing {
            let cursor_x = status_area
                .x
                .saturating_add(search_prompt_len(app.search_kind))
                .saturating_add(app.search_query.chars().count() as u16)
                .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
            frame.set_cursor(cursor_x, status_area.y);
        }
    } else {
        let status = Paragraph::new(footer_help_line(&toast_suffix));
        frame.render_widget(status, status_area);
    }

    if app.show_help {
        draw_help(frame, main_area);
    }
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let active = app.tracker.active().cloned();
    let items = app
        .nav_rows
        .iter()
        .map(|row| match row {
            NavRow::Group { title } => ListItem::new(Line::from(Span::styled(
                title.to_uppercase(),
                Style::default().fg(GROUP_COLOR).add_modifier(Modifier::BOLD),
            ))),
            NavRow::Section { entry_idx } => {
                let entry = &app.registry.entries()[*entry_idx];
                let is_active = active.as_ref() == Some(&entry.anchor);
                let marker = if is_active { "▸" } else { " " };
                let style = if is_active {
                    Style::default().fg(ACTIVE_COLOR).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SECTION_TITLE_COLOR)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker.to_owned(), Style::default().fg(ACTIVE_COLOR)),
                    Span::raw(" "),
                    Span::styled(format!("{} ", entry.icon.glyph()), style),
                    Span::styled(entry.title.clone(), style),
                ]))
            }
        })
        .collect::<Vec<_>>();

    let border_style = panel_border_style(app.focus == Focus::Sidebar);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Context", app.focus == Focus::Sidebar))
                .border_style(border_style),
        )
        .highlight_style(sidebar_highlight_style(app.focus));
    frame.render_stateful_widget(list, area, &mut app.nav_state);
}

fn draw_content(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let now = Instant::now();
    let text = app.content_text(now);
    let border_style = panel_border_style(app.focus == Focus::Content);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Report", app.focus == Focus::Content))
                .border_style(border_style),
        )
        .scroll((app.scroll_y, 0));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(area, 60, 70);
    frame.render_widget(Clear, popup);
    let help = Paragraph::new(help_text())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Help — press ? or Esc to close "));
    frame.render_widget(help, popup);
}

// Extracted chrome/search/help helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Content,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Sidebar => Self::Content,
            Self::Content => Self::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Regular,
    Fuzzy,
}

/// One row of the navigation sidebar: a group header or a section entry
/// pointing into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NavRow {
    Group { title: String },
    Section { entry_idx: usize },
}

/// Vertical placement of one rendered section inside the content pane.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionExtent {
    anchor: Anchor,
    top: u16,
    height: u16,
}

struct App {
    record: DiagnosticRecord,
    report_path: Option<PathBuf>,
    tree: Vec<GroupSpec>,
    registry: SectionRegistry,
    tracker: VisibilityTracker,
    snippets: BTreeMap<Anchor, Snippet>,
    clipboard: Box<dyn Clipboard>,
    nav_rows: Vec<NavRow>,
    nav_state: ListState,
    focus: Focus,
    scroll_y: u16,
    viewport_rows: u16,
    extents: Vec<SectionExtent>,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    search_results: Vec<Anchor>,
    search_result_index: usize,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(record: DiagnosticRecord) -> Self {
        Self::new_with_clipboard(record, Box::new(Osc52Clipboard))
    }

    fn new_with_clipboard(record: DiagnosticRecord, clipboard: Box<dyn Clipboard>) -> Self {
        let mut app = Self {
            record,
            report_path: None,
            tree: Vec::new(),
            registry: SectionRegistry::new(),
            tracker: VisibilityTracker::new(),
            snippets: BTreeMap::new(),
            clipboard,
            nav_rows: Vec::new(),
            nav_state: ListState::default(),
            focus: Focus::Sidebar,
            scroll_y: 0,
            viewport_rows: 24,
            extents: Vec::new(),
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_query: String::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            toast: None,
            show_help: false,
            should_quit: false,
        };
        app.mount_sections();
        app
    }

    /// Composes the tree for the current record and mounts every visible
    /// section: registry entry, tracker observation, and a snippet instance
    /// for raw-text content.
    fn mount_sections(&mut self) {
        self.tree = compose_context_tree(&self.record);

        let mut collisions: Vec<Anchor> = Vec::new();
        for group in &self.tree {
            if !group.is_visible() {
                continue;
            }
            for section in group.visible_sections() {
                let entry = RegistryEntry {
                    anchor: section.anchor.clone(),
                    title: section.title.clone(),
                    group_anchor: group.anchor.clone(),
                    icon: section.icon,
                };
                if self.registry.register(entry).is_err() {
                    // Anchor collision is a composition defect; the registry
                    // already applied last-wins, so the panel keeps going.
                    collisions.push(section.anchor.clone());
                }
                self.tracker.observe(section.anchor.clone());
                if let Some(text) = snippet_text(section.content, &self.record) {
                    self.snippets.insert(section.anchor.clone(), Snippet::new(text, true));
                }
            }
        }
        for anchor in collisions {
            self.set_toast(format!("duplicate section anchor: {anchor}"));
        }

        self.rebuild_nav_rows();
        self.rebuild_extents();
        self.sync_viewport();
    }

    /// Unmounts every section: unregister and stop observation
    /// synchronously, so nothing can act on stale anchors afterwards.
    fn unmount_sections(&mut self) {
        let anchors: Vec<Anchor> =
            self.registry.entries().iter().map(|entry| entry.anchor.clone()).collect();
        for anchor in &anchors {
            self.registry.unregister(anchor);
            self.tracker.forget(anchor);
            self.snippets.remove(anchor);
        }
        self.nav_rows.clear();
        self.nav_state.select(None);
        self.extents.clear();
    }

    fn set_record(&mut self, record: DiagnosticRecord) {
        self.unmount_sections();
        self.record = record;
        self.scroll_y = 0;
        self.mount_sections();
    }

    fn reload_report(&mut self) {
        let Some(path) = self.report_path.clone() else {
            self.set_toast("No report file to reload");
            return;
        };
        match load_report(&path) {
            Ok(record) => {
                self.set_record(record);
                self.set_toast(format!("Reloaded {}", path.display()));
            }
            Err(err) => self.set_toast(format!("Reload failed: {err}")),
        }
    }

    fn rebuild_nav_rows(&mut self) {
        self.nav_rows.clear();
        for (group_anchor, members) in self.registry.grouped() {
            let title = self
                .tree
                .iter()
                .find(|group| group.anchor == group_anchor)
                .map(|group| group.title.clone())
                .unwrap_or_else(|| group_anchor.to_string());
            self.nav_rows.push(NavRow::Group { title });
            for member in members {
                let entry_idx = self
                    .registry
                    .entries()
                    .iter()
                    .position(|entry| entry.anchor == member.anchor)
                    .unwrap_or(0);
                self.nav_rows.push(NavRow::Section { entry_idx });
            }
        }

        let first_section =
            self.nav_rows.iter().position(|row| matches!(row, NavRow::Section { .. }));
        self.nav_state.select(first_section);
    }

    /// Recomputes each section's vertical placement in the content pane.
    /// Heights depend on snippet collapse state, so this runs again after
    /// every expand.
    fn rebuild_extents(&mut self) {
        self.extents.clear();
        let mut top = 0u16;
        for group in &self.tree {
            if !group.is_visible() {
                continue;
            }
            for section in group.visible_sections() {
                let body_rows = section_lines(section.content, &self.record).len() as u16;
                // Snippets always carry one trailing status row, so heights
                // stay in step with what content_text emits.
                let snippet_rows = match self.snippets.get(&section.anchor) {
                    Some(snippet) => snippet.display_rows().saturating_add(1),
                    None => 0,
                };
                // Title row + body + snippet + trailing blank separator.
                let height = 1 + body_rows + snippet_rows + 1;
                self.extents.push(SectionExtent {
                    anchor: section.anchor.clone(),
                    top,
                    height,
                });
                top = top.saturating_add(height);
            }
        }
    }

    fn content_rows_total(&self) -> u16 {
        self.extents
            .last()
            .map(|extent| extent.top.saturating_add(extent.height))
            .unwrap_or(0)
    }

    /// Diffs section extents against the current viewport and feeds
    /// boundary crossings to the tracker, in document order.
    fn sync_viewport(&mut self) {
        let viewport_top = self.scroll_y;
        let viewport_bottom = self.scroll_y.saturating_add(self.viewport_rows.max(1));

        let crossings: Vec<(Anchor, bool)> = self
            .extents
            .iter()
            .map(|extent| {
                let intersects = extent.top < viewport_bottom
                    && extent.top.saturating_add(extent.height) > viewport_top;
                (extent.anchor.clone(), intersects)
            })
            .collect();

        for (anchor, intersects) in crossings {
            let was_intersecting = self.tracker.is_intersecting(&anchor);
            if intersects && !was_intersecting {
                self.tracker.enter(&anchor);
            } else if !intersects && was_intersecting {
                self.tracker.leave(&anchor);
            }
        }
    }

    fn content_text(&self, now: Instant) -> Text<'static> {
        let mut text = Text::default();
        for group in &self.tree {
            if !group.is_visible() {
                continue;
            }
            for section in group.visible_sections() {
                let is_active = self.tracker.active() == Some(&section.anchor);
                text.lines.push(section_title_line(section, &group.title, is_active));
                text.lines.extend(section_lines(section.content, &self.record));
                if let Some(snippet) = self.snippets.get(&section.anchor) {
                    for line in snippet.display_lines() {
                        text.lines.push(Line::from(Span::raw(line.to_owned())));
                    }
                    text.lines.push(snippet_status_line(snippet, now));
                }
                text.lines.push(Line::from(String::new()));
            }
        }
        text
    }

    fn tick(&mut self, now: Instant) {
        for snippet in self.snippets.values_mut() {
            snippet.tick(now);
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn take_toast_suffix(&mut self) -> String {
        match self.toast.as_ref() {
            Some(toast) if toast.expires_at > Instant::now() => {
                format!(" | {}", toast.message)
            }
            Some(_) => {
                self.toast = None;
                String::new()
            }
            None => String::new(),
        }
    }

    fn selected_nav_anchor(&self) -> Option<&Anchor> {
        let row = self.nav_rows.get(self.nav_state.selected()?)?;
        match row {
            NavRow::Group { .. } => None,
            NavRow::Section { entry_idx } => {
                self.registry.entries().get(*entry_idx).map(|entry| &entry.anchor)
            }
        }
    }

    /// The section snippet actions target: the sidebar selection while the
    /// sidebar has focus, otherwise the tracker's active anchor.
    fn focused_anchor(&self) -> Option<Anchor> {
        match self.focus {
            Focus::Sidebar => self.selected_nav_anchor().cloned(),
            Focus::Content => self.tracker.active().cloned(),
        }
    }

    fn move_nav_selection(&mut self, delta: i32) {
        if self.nav_rows.is_empty() {
            return;
        }
        let mut idx = self.nav_state.selected().unwrap_or(0) as i32;
        loop {
            idx += delta.signum();
            if idx < 0 || idx as usize >= self.nav_rows.len() {
                return;
            }
            if matches!(self.nav_rows[idx as usize], NavRow::Section { .. }) {
                self.nav_state.select(Some(idx as usize));
                return;
            }
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max_scroll = self.content_rows_total().saturating_sub(self.viewport_rows.max(1));
        let next = if delta < 0 {
            self.scroll_y.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.scroll_y.saturating_add(delta as u16)
        };
        self.scroll_y = next.min(max_scroll);
        self.sync_viewport();
    }

    fn scroll_page(&mut self, direction: i32) {
        let page = self.viewport_rows.max(1).saturating_sub(1) as i32;
        self.scroll_by(direction.signum() * page.max(1));
    }

    fn jump_to(&mut self, anchor: &Anchor) {
        let Some(extent) = self.extents.iter().find(|extent| &extent.anchor == anchor) else {
            return;
        };
        let max_scroll = self.content_rows_total().saturating_sub(self.viewport_rows.max(1));
        self.scroll_y = extent.top.min(max_scroll);
        self.sync_viewport();

        if let Some(row_idx) = self.nav_rows.iter().position(|row| match row {
            NavRow::Section { entry_idx } => {
                self.registry.entries().get(*entry_idx).map(|entry| &entry.anchor) == Some(anchor)
            }
            NavRow::Group { .. } => false,
        }) {
            self.nav_state.select(Some(row_idx));
        }
    }

    fn expand_focused_snippet(&mut self) {
        let Some(anchor) = self.focused_anchor() else {
            return;
        };
        let Some(snippet) = self.snippets.get_mut(&anchor) else {
            return;
        };
        snippet.click();
        self.rebuild_extents();
        self.sync_viewport();
    }

    fn copy_focused_snippet(&mut self) {
        let Some(anchor) = self.focused_anchor() else {
            return;
        };
        let Some(snippet) = self.snippets.get_mut(&anchor) else {
            return;
        };
        snippet.copy(self.clipboard.as_mut(), Instant::now());
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        match self.search_mode {
            SearchMode::Editing => {
                self.handle_search_edit_key(code);
                return false;
            }
            SearchMode::Results => {
                if matches!(code, KeyCode::Esc) {
                    self.clear_search();
                    return false;
                }
            }
            SearchMode::Inactive => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.cycle(),
            KeyCode::Char('/') => self.enter_search_mode(SearchKind::Regular),
            KeyCode::Char('\\') => self.enter_search_mode(SearchKind::Fuzzy),
            KeyCode::Char('n') => self.search_step(1),
            KeyCode::Char('N') => self.search_step(-1),
            KeyCode::Char('e') => self.expand_focused_snippet(),
            KeyCode::Char('c') | KeyCode::Char('y') => self.copy_focused_snippet(),
            KeyCode::Char('r') => self.reload_report(),
            KeyCode::Enter if self.focus == Focus::Sidebar => {
                if let Some(anchor) = self.selected_nav_anchor().cloned() {
                    self.jump_to(&anchor);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Sidebar => self.move_nav_selection(1),
                Focus::Content => self.scroll_by(1),
            },
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Sidebar => self.move_nav_selection(-1),
                Focus::Content => self.scroll_by(-1),
            },
            KeyCode::PageDown => self.scroll_page(1),
            KeyCode::PageUp => self.scroll_page(-1),
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_y = 0;
                self.sync_viewport();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll_y =
                    self.content_rows_total().saturating_sub(self.viewport_rows.max(1));
                self.sync_viewport();
            }
            _ => {}
        }

        false
    }

    fn enter_search_mode(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => {
                self.search_results = match self.search_kind {
                    SearchKind::Regular => regular_search(&self.search_query, &self.registry),
                    SearchKind::Fuzzy => fuzzy_search(&self.search_query, &self.registry),
                };
                self.search_result_index = 0;
                if self.search_results.is_empty() {
                    self.set_toast(format!("No match for {:?}", self.search_query));
                    self.clear_search();
                } else {
                    self.search_mode = SearchMode::Results;
                    let anchor = self.search_results[0].clone();
                    self.jump_to(&anchor);
                }
            }
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(ch) => self.search_query.push(ch),
            _ => {}
        }
    }

    fn search_step(&mut self, direction: i32) {
        if self.search_mode != SearchMode::Results || self.search_results.is_empty() {
            return;
        }
        let len = self.search_results.len() as i32;
        let next = (self.search_result_index as i32 + direction.signum()).rem_euclid(len);
        self.search_result_index = next as usize;
        let anchor = self.search_results[self.search_result_index].clone();
        self.jump_to(&anchor);
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }
}

fn section_title_line(
    section: &crate::compose::SectionSpec,
    group_title: &str,
    is_active: bool,
) -> Line<'static> {
    let style = if is_active {
        Style::default().fg(ACTIVE_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SECTION_TITLE_COLOR).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(format!("{} {}", section.icon.glyph(), section.title), style),
        Span::styled(
            format!("  ({group_title} · #{})", section.anchor),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn snippet_status_line(snippet: &Snippet, now: Instant) -> Line<'static> {
    let mut spans = Vec::new();
    if snippet.value().is_empty() {
        spans.push(Span::styled("— empty —".to_owned(), Style::default().fg(Color::DarkGray)));
    } else if snippet.is_overflowing() {
        spans.push(Span::styled(
            format!(
                "⌄ {} more rows, e to expand, c to copy",
                snippet.content_rows() - snippet.display_rows()
            ),
            Style::default().fg(SNIPPET_HINT_COLOR),
        ));
    } else {
        spans.push(Span::styled(
            format!("· {} rows, c to copy", snippet.content_rows()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if snippet.is_copied(now) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("✓ Copied!".to_owned(), Style::default().fg(COPIED_COLOR)));
    }
    Line::from(spans)
}


#[cfg(test)]
mod tests;
