//! # Page Extraction
//!
//! Splits a parsed page into the fields of an [`ExtractionResult`].
//!
//! ## Stages
//!
//! 1. **Title**: first level-1 heading anywhere in the page
//! 2. **`attributes`**: strips every table, reading attributes from marked ones
//! 3. **`toc`**: level-2/level-3 headings of what is left become sections
//! 4. **`body`**: the table-free prefix before the first level-2 heading
//!    becomes `shortDescription` and `textContent`
//!
//! Extraction is a pure function of its input; nothing is cached between calls.

pub mod attributes;
pub mod body;
pub mod slug;
pub mod toc;

use crate::error::ExtractError;
use crate::models::ExtractionResult;
use crate::options::ExtractOptions;
use crate::parsing::parse_document;

use attributes::{AttributeTables, extract_attributes};
use body::{RenderedBody, render_body};
use toc::build_sections;

/// Extracts page data using the default options.
pub fn extract(source: &str) -> Result<ExtractionResult, ExtractError> {
    extract_with_options(source, &ExtractOptions::default())
}

pub fn extract_with_options(
    source: &str,
    options: &ExtractOptions,
) -> Result<ExtractionResult, ExtractError> {
    let doc = parse_document(source, options);

    let name = doc
        .blocks
        .iter()
        .find_map(|block| block.heading_text(1))
        .map(str::to_string);

    let AttributeTables {
        attributes,
        remaining,
    } = extract_attributes(doc.blocks, source, options)?;

    let sections = build_sections(&remaining);

    let intro_len = remaining
        .iter()
        .position(|block| block.heading_level() == Some(2))
        .unwrap_or(remaining.len());
    let RenderedBody {
        short_description,
        text_content,
    } = render_body(&remaining[..intro_len], source, options);

    log::debug!(
        "extracted page {name:?}: {} sections, {} attributes",
        sections.len(),
        attributes.len()
    );

    Ok(ExtractionResult {
        name,
        short_description,
        sections,
        attributes,
        text_content,
    })
}
