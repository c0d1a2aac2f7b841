use pulldown_cmark::Event;

use super::span::Span;

/// The kind of a top-level block, carrying only what the extraction stages read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX or setext heading with its plain text (inline formatting stripped).
    Heading { level: u8, text: String },
    /// A paragraph with its plain text (inline formatting stripped).
    Paragraph { text: String },
    /// A fenced or indented code block.
    CodeBlock {
        fenced: bool,
        /// First word of the fence info string, if any.
        language: Option<String>,
        code: String,
    },
    /// A raw HTML block, verbatim.
    Html { html: String },
    /// A GFM pipe table.
    Table,
    /// Lists, block quotes, rules and anything else the extractor passes through.
    Other,
}

/// A parsed top-level block with its source span and its own event stream.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Every event from the block's `Start` to its matching `End`.
    pub events: Vec<Event<'static>>,
}

impl BlockNode {
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Text of this block if it is a heading of exactly `level`.
    pub fn heading_text(&self, level: u8) -> Option<&str> {
        match &self.kind {
            BlockKind::Heading { level: l, text } if *l == level => Some(text),
            _ => None,
        }
    }

    /// Renders this block alone with pulldown-cmark's HTML writer.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, self.events.iter().cloned());
        html
    }
}
