//! Document plan — the deterministic block sequence for one submission.
//!
//! Pure layer between the submission model and the PDF backend: given the
//! ordered sections and a generation timestamp, produce the exact ordered
//! list of styled text blocks the layout engine will draw. Everything
//! observable about the document (titles, placeholder text, long-token
//! rewrapping, block order) is decided here, which keeps it testable without
//! a font asset on disk.

use chrono::{DateTime, Local};

use crate::form::Section;

/// Fixed first line of every exported document.
pub const DOCUMENT_TITLE: &str = "Data Management Plan Submission";

/// Printed in place of an empty or whitespace-only section body.
pub const EMPTY_BODY_PLACEHOLDER: &str = "[No response provided]";

/// Longest run of non-whitespace characters the layout engine is asked to
/// word-wrap on its own.
pub const DEFAULT_WRAP_THRESHOLD: usize = 80;

/// One styled text block, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Fixed document title, centered.
    Title(String),
    /// Generation-timestamp line.
    Metadata(String),
    /// Section heading. Never rewrapped — headings are assumed short.
    Heading(String),
    /// One line of section body text, already rewrapped for long tokens.
    Body(String),
}

/// Builds the block sequence for a submission.
///
/// Structure: title, timestamp line, then per section (in input order) a
/// heading followed by one body block per line of the answer. Empty bodies
/// become [`EMPTY_BODY_PLACEHOLDER`]. A zero-length section sequence yields
/// the two header blocks only.
pub fn plan_document(
    sections: &[Section],
    generated_at: DateTime<Local>,
    wrap_threshold: usize,
) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(2 + sections.len() * 2);
    blocks.push(Block::Title(DOCUMENT_TITLE.to_string()));
    blocks.push(Block::Metadata(format!(
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M")
    )));

    for section in sections {
        blocks.push(Block::Heading(section.title.clone()));

        let trimmed = section.body.trim();
        let body = if trimmed.is_empty() {
            EMPTY_BODY_PLACEHOLDER.to_string()
        } else {
            break_long_tokens(trimmed, wrap_threshold)
        };
        // The layout engine treats each paragraph as one flow; embedded
        // newlines in the answer become separate body blocks.
        for line in body.split('\n') {
            blocks.push(Block::Body(line.to_string()));
        }
    }

    blocks
}

/// Inserts a space every `max_len` characters into any run of non-whitespace
/// characters longer than `max_len`, so the layout engine can break it
/// across lines.
///
/// Counted in characters, not bytes, so multibyte text is never split inside
/// a UTF-8 sequence. `max_len = 0` disables rewrapping.
pub fn break_long_tokens(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return text.to_string();
    }

    fn flush(token: &mut String, out: &mut String, max_len: usize) {
        if token.chars().count() > max_len {
            for (i, c) in token.chars().enumerate() {
                if i > 0 && i % max_len == 0 {
                    out.push(' ');
                }
                out.push(c);
            }
        } else {
            out.push_str(token);
        }
        token.clear();
    }

    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            flush(&mut token, &mut out, max_len);
            out.push(c);
        } else {
            token.push(c);
        }
    }
    flush(&mut token, &mut out, max_len);
    out
}
