use serde::{Deserialize, Serialize};

use crate::extract::slug::slugify;

/// Everything extracted from one documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Text of the first level-1 heading.
    pub name: Option<String>,
    /// Plain text of the opening paragraph; `""` if the body opens with something else.
    pub short_description: Option<String>,
    pub sections: Vec<Section>,
    pub attributes: Vec<Attribute>,
    /// Introductory body before the first level-2 heading.
    pub text_content: String,
}

/// A level-2 heading and the level-3 headings beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub header: String,
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn new(header: &str) -> Self {
        Self {
            id: slugify(header),
            header: header.to_string(),
            subsections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub id: String,
    pub header: String,
}

impl Subsection {
    pub fn new(header: &str) -> Self {
        Self {
            id: slugify(header),
            header: header.to_string(),
        }
    }
}

/// One attribute defined by a marked HTML table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub is_required: bool,
    /// Description cell as HTML, wrapped in a `<div>`.
    pub text_content: String,
}
