//! Submission handling — validate, then conditionally render.
//!
//! The single entry point the form UI calls. Control flow is explicit:
//! Validator first, Renderer only when every section passes. A blocked export
//! is not an error; the outcome carries the report either way.

use bytes::Bytes;
use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::ExportError;
use crate::form::{dmp_word_limits, Submission};
use crate::render;
use crate::validation::{validate, ValidationReport};

/// Filename the PDF is offered under.
pub const EXPORT_FILENAME: &str = "dmp_submission.pdf";
pub const EXPORT_MIME: &str = "application/pdf";

/// A finished document ready for delivery to the requester.
#[derive(Debug, Clone)]
pub struct PdfExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Bytes,
}

/// Result of one submission-evaluation cycle.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub report: ValidationReport,
    /// Present only when the report's aggregate flag is true.
    pub export: Option<PdfExport>,
}

/// Validates the submission against the fixed DMP word limits and renders
/// the PDF when every section passes.
///
/// Word-limit violations come back as data in the report; only rendering
/// problems (missing font asset, layout-engine failure) are errors.
pub fn handle_submission(
    submission: &Submission,
    config: &Config,
) -> Result<SubmissionOutcome, ExportError> {
    let limits = dmp_word_limits();
    let report = validate(submission.sections(), &limits);

    if !report.all_ok {
        let failing: Vec<&str> = report
            .sections
            .iter()
            .filter(|r| !r.ok)
            .map(|r| r.title.as_str())
            .collect();
        warn!(?failing, "submission exceeds word limits; export withheld");
        return Ok(SubmissionOutcome {
            report,
            export: None,
        });
    }

    let bytes = render::render(submission.sections(), Local::now(), config)?;
    info!(size = bytes.len(), "submission exported as {EXPORT_FILENAME}");

    Ok(SubmissionOutcome {
        report,
        export: Some(PdfExport {
            filename: EXPORT_FILENAME,
            mime: EXPORT_MIME,
            bytes: Bytes::from(bytes),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_section_withholds_export_without_error() {
        let long = vec!["word"; 151].join(" ");
        let submission = Submission::dmp([
            "fine", "fine", &long, "fine", "fine", "ranking", "ok", "ok", "ok", "ok",
        ]);
        let outcome =
            handle_submission(&submission, &Config::default()).expect("not a render error");
        assert!(!outcome.report.all_ok);
        assert!(outcome.export.is_none(), "no document for a failing report");
        let failing: Vec<&str> = outcome
            .report
            .sections
            .iter()
            .filter(|r| !r.ok)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(failing, vec!["Access and Security"]);
    }

    #[test]
    fn test_ranking_field_never_blocks_export_decision() {
        let huge_ranking = vec!["topic"; 1000].join(" ");
        let submission = Submission::dmp([
            "a", "b", "c", "d", "e", &huge_ranking, "f", "g", "h", "i",
        ]);
        let limits = dmp_word_limits();
        let report = validate(submission.sections(), &limits);
        assert!(report.all_ok, "unbounded ranking content must not fail");
    }
}
