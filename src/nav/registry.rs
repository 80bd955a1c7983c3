// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::compose::Icon;
use crate::model::Anchor;

/// Read-only projection of a mounted section, kept for the navigation
/// sidebar. The component tree owns entries; the registry is a derived
/// index, never authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub anchor: Anchor,
    pub title: String,
    pub group_anchor: Anchor,
    pub icon: Icon,
}

/// Registering an anchor that is already present. Anchors are a uniqueness
/// invariant of the composed tree, so a collision is a defect elsewhere;
/// the registry still applies the registration (last wins) so a production
/// panel degrades instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorCollision {
    pub anchor: Anchor,
}

impl fmt::Display for AnchorCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section anchor registered twice: {}", self.anchor)
    }
}

impl std::error::Error for AnchorCollision {}

/// Live catalogue of mounted sections in append order.
///
/// Append order equals document order because sections register in the
/// composer's output order, so queries never sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<RegistryEntry>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry keyed by anchor. On a duplicate anchor the stale entry
    /// is replaced in place and `Err(AnchorCollision)` is returned.
    pub fn register(&mut self, entry: RegistryEntry) -> Result<(), AnchorCollision> {
        if let Some(existing) =
            self.entries.iter_mut().find(|existing| existing.anchor == entry.anchor)
        {
            let anchor = entry.anchor.clone();
            *existing = entry;
            return Err(AnchorCollision { anchor });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry for `anchor`, if present. Unknown anchors are a
    /// no-op: an unmount may race a replacement registration and must not
    /// fault.
    pub fn unregister(&mut self, anchor: &Anchor) {
        self.entries.retain(|entry| &entry.anchor != anchor);
    }

    pub fn contains(&self, anchor: &Anchor) -> bool {
        self.entries.iter().any(|entry| &entry.anchor == anchor)
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entries clustered by owning group anchor, both levels in document
    /// order.
    pub fn grouped(&self) -> Vec<(Anchor, Vec<&RegistryEntry>)> {
        let mut out: Vec<(Anchor, Vec<&RegistryEntry>)> = Vec::new();
        for entry in &self.entries {
            match out.iter_mut().find(|(group, _)| group == &entry.group_anchor) {
                Some((_, members)) => members.push(entry),
                None => out.push((entry.group_anchor.clone(), vec![entry])),
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
