// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! ctxpanel — terminal context panel for error-occurrence reports.
//!
//! Loads one JSON occurrence report, composes it into an ordered tree of
//! context groups and sections, and shows it in a navigable TUI.

pub mod compose;
pub mod model;
pub mod nav;
pub mod render;
pub mod snippet;
pub mod store;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
