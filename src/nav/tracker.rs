// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::model::Anchor;

/// Tracks which anchored sections currently intersect the viewport and
/// derives the single "active" anchor for navigation highlighting.
///
/// The tracker only sees boundary crossings (enter/leave), not continuous
/// positions. Each event mutates the intersecting set and recomputes the
/// active anchor before the next event is looked at, so observers never see
/// a half-applied transition.
#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    /// Anchors in document order, i.e. observation order, which matches the
    /// composer's output order by construction.
    order: Vec<Anchor>,
    intersecting: BTreeSet<Anchor>,
    active: Option<Anchor>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `anchor`. Sections call this as they mount, in
    /// document order. Observing an already-observed anchor keeps its
    /// original position.
    pub fn observe(&mut self, anchor: Anchor) {
        if !self.order.contains(&anchor) {
            self.order.push(anchor);
        }
    }

    /// Stops observing `anchor` (section unmount). The anchor leaves both
    /// document order and the intersecting set; a forgotten anchor is never
    /// reported as active again.
    pub fn forget(&mut self, anchor: &Anchor) {
        self.order.retain(|known| known != anchor);
        self.intersecting.remove(anchor);
        if self.active.as_ref() == Some(anchor) {
            self.active = None;
        }
        self.recompute_active();
    }

    /// The section for `anchor` crossed into the viewport.
    pub fn enter(&mut self, anchor: &Anchor) {
        if !self.order.contains(anchor) {
            return;
        }
        self.intersecting.insert(anchor.clone());
        self.recompute_active();
    }

    /// The section for `anchor` crossed out of the viewport.
    pub fn leave(&mut self, anchor: &Anchor) {
        self.intersecting.remove(anchor);
        self.recompute_active();
    }

    pub fn active(&self) -> Option<&Anchor> {
        self.active.as_ref()
    }

    pub fn intersecting(&self) -> &BTreeSet<Anchor> {
        &self.intersecting
    }

    pub fn is_intersecting(&self, anchor: &Anchor) -> bool {
        self.intersecting.contains(anchor)
    }

    fn recompute_active(&mut self) {
        // First intersecting anchor in document order wins; with nothing
        // intersecting the previous active anchor is retained (sticky-last)
        // so navigation highlighting does not flicker between sections.
        if let Some(first) = self.order.iter().find(|anchor| self.intersecting.contains(*anchor)) {
            self.active = Some(first.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilityTracker;
    use crate::model::Anchor;

    fn anchor(value: &str) -> Anchor {
        Anchor::new(value).expect("anchor")
    }

    fn tracker_with(anchors: &[&str]) -> VisibilityTracker {
        let mut tracker = VisibilityTracker::new();
        for value in anchors {
            tracker.observe(anchor(value));
        }
        tracker
    }

    #[test]
    fn starts_with_no_active_anchor() {
        let tracker = tracker_with(&["a", "b"]);
        assert_eq!(tracker.active(), None);
        assert!(tracker.intersecting().is_empty());
    }

    #[test]
    fn first_in_document_order_wins() {
        let mut tracker = tracker_with(&["a", "b"]);
        // B enters first; document order still puts A on top once it enters.
        tracker.enter(&anchor("b"));
        assert_eq!(tracker.active(), Some(&anchor("b")));
        tracker.enter(&anchor("a"));
        assert_eq!(tracker.active(), Some(&anchor("a")));
    }

    #[test]
    fn leave_promotes_next_intersecting() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.enter(&anchor("a"));
        tracker.enter(&anchor("b"));
        tracker.leave(&anchor("a"));
        assert_eq!(tracker.active(), Some(&anchor("b")));
    }

    #[test]
    fn sticky_last_when_nothing_intersects() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.enter(&anchor("a"));
        tracker.enter(&anchor("b"));
        tracker.leave(&anchor("a"));
        tracker.leave(&anchor("b"));
        assert!(tracker.intersecting().is_empty());
        assert_eq!(tracker.active(), Some(&anchor("b")));
    }

    #[test]
    fn unobserved_anchor_enter_is_ignored() {
        let mut tracker = tracker_with(&["a"]);
        tracker.enter(&anchor("ghost"));
        assert_eq!(tracker.active(), None);
        assert!(tracker.intersecting().is_empty());
    }

    #[test]
    fn forget_clears_stale_active() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.enter(&anchor("a"));
        tracker.leave(&anchor("a"));
        assert_eq!(tracker.active(), Some(&anchor("a")));

        // Unmounting the sticky anchor must not leave it reported as active.
        tracker.forget(&anchor("a"));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn forget_falls_back_to_remaining_intersections() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.enter(&anchor("a"));
        tracker.enter(&anchor("b"));
        tracker.forget(&anchor("a"));
        assert_eq!(tracker.active(), Some(&anchor("b")));
    }
}
