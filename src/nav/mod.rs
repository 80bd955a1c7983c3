// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Navigation state: the section registry and the viewport visibility
//! tracker.
//!
//! Both are panel-instance-wide stores. Sections mutate them only through
//! register/unregister and enter/leave/forget; the sidebar reads them
//! through their query methods.

pub mod registry;
pub mod tracker;

pub use registry::{AnchorCollision, RegistryEntry, SectionRegistry};
pub use tracker::VisibilityTracker;
