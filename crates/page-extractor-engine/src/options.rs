use serde::{Deserialize, Serialize};

/// How retained body blocks are written into `textContent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Each block is reproduced from its exact source text.
    #[default]
    Markdown,
    /// Each block is rendered with pulldown-cmark's HTML writer.
    Html,
}

/// Knobs for a single extraction run.
///
/// Every field has a default, so a partial `[extract]` table in a config
/// file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub body_format: BodyFormat,
    /// Boolean attribute marking a `<table>` as an attribute definition.
    pub attributes_marker: String,
    /// Boolean attribute marking the defined attribute as required.
    pub required_marker: String,
    /// Class put on the `<figure>` wrapping captioned code blocks.
    pub figure_class: String,
    /// Parse GFM pipe tables (they are stripped from the body either way).
    pub tables: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            body_format: BodyFormat::Markdown,
            attributes_marker: "data-attributes".to_string(),
            required_marker: "data-attributes-required".to_string(),
            figure_class: "highlight-figure".to_string(),
            tables: true,
        }
    }
}
