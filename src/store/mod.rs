// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! Report loading.
//!
//! The panel consumes one occurrence report: a JSON object supplied by the
//! external error-reporting source. The loader is the caller-facing boundary
//! that enforces the single structural precondition — the record root must
//! be an object. Everything below the root is optional and handled by the
//! composer's visibility policy.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::model::DiagnosticRecord;

#[derive(Debug)]
pub enum ReportError {
    Io { path: PathBuf, source: io::Error },
    Json { source: serde_json::Error },
    /// The record root is not a JSON object. This is the data-shape defect
    /// the panel refuses to recover from; the host's isolating boundary
    /// contains it.
    NotAnObject,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read report {}: {source}", path.display())
            }
            Self::Json { source } => write!(f, "failed to parse report JSON: {source}"),
            Self::NotAnObject => f.write_str("report root must be a JSON object"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            Self::NotAnObject => None,
        }
    }
}

pub fn load_report(path: impl AsRef<Path>) -> Result<DiagnosticRecord, ReportError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|source| ReportError::Io { path: path.to_owned(), source })?;
    parse_report(&raw)
}

pub fn parse_report(raw: &str) -> Result<DiagnosticRecord, ReportError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| ReportError::Json { source })?;
    record_from_value(value)
}

pub fn record_from_value(value: Value) -> Result<DiagnosticRecord, ReportError> {
    if !value.is_object() {
        return Err(ReportError::NotAnObject);
    }
    serde_json::from_value(value).map_err(|source| ReportError::Json { source })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;

    use super::{load_report, parse_report, ReportError};

    static TEMP_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempReport {
        path: PathBuf,
    }

    impl TempReport {
        fn write(contents: &str) -> Self {
            let idx = TEMP_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
            let path = std::env::temp_dir()
                .join(format!("ctxpanel-report-{}-{idx}.json", std::process::id()));
            std::fs::write(&path, contents).expect("write temp report");
            Self { path }
        }
    }

    impl Drop for TempReport {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    #[test]
    fn loads_a_report_file() {
        let report = TempReport::write(r#"{"cookies": {"k": "v"}}"#);
        let record = load_report(&report.path).expect("load");
        assert_eq!(record.cookies.get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_report("/nonexistent/ctxpanel-report.json").expect_err("must fail");
        let message = err.to_string();
        assert!(message.contains("/nonexistent/ctxpanel-report.json"), "got: {message}");
    }

    #[rstest]
    #[case::array("[]")]
    #[case::string("\"report\"")]
    #[case::number("42")]
    #[case::null("null")]
    fn non_object_roots_are_rejected(#[case] raw: &str) {
        let err = parse_report(raw).expect_err("must reject non-object root");
        assert!(matches!(err, ReportError::NotAnObject), "got: {err}");
    }

    #[rstest]
    #[case::query_string(r#"{"request_data": {"queryString": []}}"#)]
    #[case::session(r#"{"session": []}"#)]
    #[case::headers(r#"{"headers": []}"#)]
    fn empty_php_arrays_in_map_fields_parse(#[case] raw: &str) {
        parse_report(raw).expect("an empty list in a map position is valid sparse data");
    }

    #[test]
    fn empty_query_string_list_hides_the_section() {
        let raw = r#"{
            "request": {"url": "https://x.test/", "method": "GET"},
            "request_data": {"queryString": []},
            "headers": {"host": "x.test"}
        }"#;
        let record = parse_report(raw).expect("parse");
        let tree = crate::compose::compose_context_tree(&record);

        let request = tree
            .iter()
            .find(|group| group.anchor.as_str() == "request")
            .expect("request group materializes");
        assert!(request
            .visible_sections()
            .all(|section| section.anchor.as_str() != "request-query-string"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_report("{not json").expect_err("must fail");
        assert!(matches!(err, ReportError::Json { .. }));
    }

    #[test]
    fn empty_object_is_a_valid_sparse_record() {
        let record = parse_report("{}").expect("parse");
        assert!(record.request.is_none());
    }
}
