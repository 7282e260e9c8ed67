//! DMP submission exporter.
//!
//! Turns a completed Data Management Plan form into a downloadable PDF:
//!
//! 1. **Validate** — count words per section and compare against the fixed
//!    per-section limits ([`validation`]).
//! 2. **Render** — lay the validated sections out as a paginated PDF via
//!    genpdf ([`render`]).
//!
//! The interactive form UI is an external collaborator: it calls
//! [`handle_submission`] with the raw answers and gets back a structured
//! validation report plus, when every limit is satisfied, the finished PDF
//! bytes. Nothing is persisted; each call is an isolated transform.

pub mod config;
pub mod errors;
pub mod form;
pub mod render;
pub mod submission;
pub mod validation;

pub use config::Config;
pub use errors::ExportError;
pub use form::{dmp_word_limits, FieldSpec, Section, Submission, DMP_FIELDS};
pub use render::fonts::FontStrategy;
pub use submission::{handle_submission, PdfExport, SubmissionOutcome};
pub use validation::{validate, word_count, SectionValidation, ValidationReport};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for the embedding host.
///
/// `RUST_LOG` takes precedence; `default_filter` is used when it is unset.
/// Call at most once per process.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
