//! Document Renderer — ordered sections to paginated PDF bytes.
//!
//! The caller is expected to gate this behind a passing validation; rendering
//! itself never inspects word limits. Either a complete document is produced
//! or an error is returned — there is no partial output.

pub mod fonts;
pub mod plan;

use chrono::{DateTime, Local};
use genpdf::{elements, style, Alignment, Element as _};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ExportError;
use crate::form::Section;

use self::fonts::FontStrategy;
use self::plan::{plan_document, Block};

const TITLE_SIZE: u8 = 12;
const METADATA_SIZE: u8 = 10;
const HEADING_SIZE: u8 = 11;
const BODY_SIZE: u8 = 10;
/// Margin in millimeters, reapplied by the page decorator on every page.
const PAGE_MARGIN_MM: i32 = 15;

/// Renders the sections into a finished PDF, in input order.
///
/// `generated_at` is embedded in the document header; callers pass
/// `Local::now()` in production and a fixed value in tests.
pub fn render(
    sections: &[Section],
    generated_at: DateTime<Local>,
    config: &Config,
) -> Result<Vec<u8>, ExportError> {
    let family = fonts::load_font_family(config)?;

    let mut blocks = plan_document(sections, generated_at, config.wrap_threshold);
    if config.strategy == FontStrategy::Core {
        let mut replaced = 0;
        for block in &mut blocks {
            let (Block::Title(text)
            | Block::Metadata(text)
            | Block::Heading(text)
            | Block::Body(text)) = block;
            let (sanitized, count) = fonts::sanitize_latin1(text);
            *text = sanitized;
            replaced += count;
        }
        if replaced > 0 {
            warn!(
                replaced,
                "core font strategy replaced characters outside Latin-1 with '?'"
            );
        }
    }

    let mut doc = genpdf::Document::new(family);
    doc.set_title(plan::DOCUMENT_TITLE);
    doc.set_minimal_conformance();

    // The decorator reapplies the margins on every page the content flows
    // onto, so overlong submissions break to new pages instead of overflowing.
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    doc.set_page_decorator(decorator);

    for block in blocks {
        match block {
            Block::Title(text) => {
                doc.push(
                    elements::Paragraph::new(text)
                        .aligned(Alignment::Center)
                        .styled(style::Style::new().with_font_size(TITLE_SIZE)),
                );
                doc.push(elements::Break::new(0.5));
            }
            Block::Metadata(text) => {
                doc.push(
                    elements::Paragraph::new(text)
                        .styled(style::Style::new().with_font_size(METADATA_SIZE)),
                );
                doc.push(elements::Break::new(0.5));
            }
            Block::Heading(text) => {
                doc.push(elements::Break::new(0.5));
                doc.push(
                    elements::Paragraph::new(text)
                        .styled(style::Style::new().bold().with_font_size(HEADING_SIZE)),
                );
            }
            Block::Body(text) => {
                doc.push(
                    elements::Paragraph::new(text)
                        .styled(style::Style::new().with_font_size(BODY_SIZE)),
                );
            }
        }
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    debug!(
        size = bytes.len(),
        sections = sections.len(),
        "rendered submission PDF"
    );
    Ok(bytes)
}
