// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! The diagnostic record is the sparse, externally supplied description of
//! one error occurrence; anchors are the stable section identifiers that
//! navigation is keyed on.

pub mod anchor;
pub mod fixtures;
pub mod record;

pub use anchor::{humanize, Anchor, AnchorError};
pub use record::{
    CustomContextItem, DiagnosticRecord, ExceptionInfo, GitInfo, LivewireInfo, LivewireUpdate,
    RequestData, RequestInfo, RouteInfo, UploadedFile, ViewInfo,
};
