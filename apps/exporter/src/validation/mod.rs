//! Validator — word counts and limit checks for a submission.
//!
//! Pure functions of their inputs. A limit violation is never an error: it is
//! reported as per-section data so the form UI can surface a warning and
//! withhold the export until the student shortens the answer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::form::Section;

/// Counts words by splitting on runs of whitespace.
///
/// Leading/trailing whitespace is ignored and consecutive whitespace
/// collapses to one separator, so only non-empty tokens are counted.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validation outcome for a single section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionValidation {
    pub title: String,
    pub word_count: usize,
    /// The limit applied; `None` means the section is unconstrained.
    pub limit: Option<u32>,
    /// `true` iff the section is unconstrained or `word_count <= limit`.
    pub ok: bool,
}

/// Per-section results in input order, plus the aggregate flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub sections: Vec<SectionValidation>,
    /// Logical AND over all per-section `ok` flags. An empty submission is
    /// trivially valid.
    pub all_ok: bool,
}

/// Validates every section against the word-limit mapping.
///
/// A title absent from `limits` is treated as unconstrained. Strict integer
/// comparison: exactly `limit` words passes, one more fails.
pub fn validate(sections: &[Section], limits: &HashMap<String, Option<u32>>) -> ValidationReport {
    let results: Vec<SectionValidation> = sections
        .iter()
        .map(|section| {
            let limit = limits.get(&section.title).copied().flatten();
            let count = word_count(&section.body);
            let ok = match limit {
                Some(max) => count <= max as usize,
                None => true,
            };
            SectionValidation {
                title: section.title.clone(),
                word_count: count,
                limit,
                ok,
            }
        })
        .collect();

    let all_ok = results.iter().all(|r| r.ok);
    ValidationReport {
        sections: results,
        all_ok,
    }
}
