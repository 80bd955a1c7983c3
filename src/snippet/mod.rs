// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Collapsible, copyable raw-text viewer.
//!
//! Every section that shows a large block of text (request body, exception
//! trace, Livewire data) goes through this state machine. Each instance owns
//! its own state; nothing here is shared between snippets.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{execute, style::Print};

/// How long the "Copied!" feedback stays up after a copy.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(3);

/// Default height bound, in terminal rows, for collapsed snippets.
pub const DEFAULT_BOUND_ROWS: u16 = 8;

/// The external copy primitive. The OS-level copy is assumed to succeed or
/// fail atomically; callers do not distinguish failure at the UI level.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Copies via the OSC 52 escape sequence, so it works across SSH and
/// terminal multiplexers without talking to a display server.
#[derive(Debug, Clone, Copy, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        let mut stdout = io::stdout();
        execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())
    }
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// In-memory clipboard for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub copied: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        self.copied.push(text.to_owned());
        Ok(())
    }
}

/// One snippet instance.
///
/// `collapsed` starts true iff a height bound is requested; there is no
/// reverse transition out of `expanded` (reveal, don't re-hide).
/// `overflowing` is derived, never stored stale: it is recomputed on every
/// value or bound change. The copied flag is a deadline rather than a live
/// timer — a newer copy overwrites the deadline (restarting the window, at
/// most one pending reset per instance), and dropping the snippet drops the
/// deadline with it.
#[derive(Debug, Clone)]
pub struct Snippet {
    value: String,
    limit_height: bool,
    bound_rows: u16,
    collapsed: bool,
    overflowing: bool,
    copied_until: Option<Instant>,
}

impl Snippet {
    pub fn new(value: impl Into<String>, limit_height: bool) -> Self {
        let mut snippet = Self {
            value: value.into(),
            limit_height,
            bound_rows: DEFAULT_BOUND_ROWS,
            collapsed: limit_height,
            overflowing: false,
            copied_until: None,
        };
        snippet.remeasure();
        snippet
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.remeasure();
    }

    pub fn set_limit_height(&mut self, limit_height: bool) {
        if self.limit_height == limit_height {
            return;
        }
        self.limit_height = limit_height;
        self.collapsed = limit_height;
        self.remeasure();
    }

    pub fn set_bound_rows(&mut self, bound_rows: u16) {
        self.bound_rows = bound_rows.max(1);
        self.remeasure();
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Full extent of the content, in rows.
    pub fn content_rows(&self) -> u16 {
        let rows = self.value.split('\n').count();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Rows the snippet currently occupies on screen.
    pub fn display_rows(&self) -> u16 {
        if self.collapsed {
            self.content_rows().min(self.bound_rows)
        } else {
            self.content_rows()
        }
    }

    /// The lines currently shown (truncated when collapsed).
    pub fn display_lines(&self) -> impl Iterator<Item = &str> {
        let limit = self.display_rows() as usize;
        self.value.split('\n').take(limit)
    }

    /// A click on the content area: expands only when the content actually
    /// overflows the bound; otherwise a no-op.
    pub fn click(&mut self) {
        if self.collapsed && self.overflowing {
            self.expand();
        }
    }

    /// The explicit expand control. No reverse transition exists.
    pub fn expand(&mut self) {
        self.collapsed = false;
        self.remeasure();
    }

    /// Copies the exact literal value (not the truncated display) through
    /// the clipboard boundary and starts the feedback window. Copy failures
    /// are ignored: the action is non-critical and user-retryable.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        let _ = clipboard.copy(&self.value);
        self.copied_until = Some(now + COPY_FEEDBACK_WINDOW);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| until > now)
    }

    /// Clears the copied flag once the feedback window has elapsed. Called
    /// from the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| until <= now) {
            self.copied_until = None;
        }
    }

    fn remeasure(&mut self) {
        self.overflowing = self.collapsed && self.content_rows() > self.bound_rows;
    }
}
