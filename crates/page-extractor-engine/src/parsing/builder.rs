use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Tag};

use super::blocks::{BlockKind, BlockNode};
use super::span::Span;

/// Groups pulldown-cmark's flat event stream into top-level `BlockNode`s.
///
/// A block opens on a `Start` at depth zero and closes on the `End` that
/// brings the depth back to zero. Standalone top-level events (thematic
/// breaks) become `BlockKind::Other` blocks on their own.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<BlockNode>,
    open: Option<OpenBlock>,
}

#[derive(Debug)]
struct OpenBlock {
    tag: Tag<'static>,
    span: Span,
    depth: usize,
    /// Plain text for headings and paragraphs, verbatim code for code blocks.
    text: String,
    raw_html: String,
    events: Vec<Event<'static>>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event<'_>, range: Range<usize>) {
        let event = event.into_static();

        let Some(open) = self.open.as_mut() else {
            self.start_block(event, range);
            return;
        };

        match &event {
            Event::Start(_) => open.depth += 1,
            Event::End(_) => open.depth = open.depth.saturating_sub(1),
            other => open.collect_text(other),
        }
        open.events.push(event);

        if open.depth == 0
            && let Some(closed) = self.open.take()
        {
            self.blocks.push(closed.close());
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // pulldown-cmark always balances its events; this only guards
        // against a truncated stream.
        if let Some(open) = self.open.take() {
            self.blocks.push(open.close());
        }
        self.blocks
    }

    fn start_block(&mut self, event: Event<'static>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                self.open = Some(OpenBlock {
                    tag: tag.clone(),
                    span: range.into(),
                    depth: 1,
                    text: String::new(),
                    raw_html: String::new(),
                    events: vec![Event::Start(tag)],
                });
            }
            other => self.blocks.push(BlockNode {
                kind: BlockKind::Other,
                span: range.into(),
                events: vec![other],
            }),
        }
    }
}

impl OpenBlock {
    fn collect_text(&mut self, event: &Event<'_>) {
        match event {
            Event::Text(text) | Event::Code(text) => self.text.push_str(text),
            Event::SoftBreak => self.text.push(' '),
            Event::HardBreak => self.text.push('\n'),
            Event::Html(html) => self.raw_html.push_str(html),
            _ => {}
        }
    }

    fn close(self) -> BlockNode {
        let kind = match self.tag {
            Tag::Heading { level, .. } => BlockKind::Heading {
                level: level as u8,
                text: self.text.trim().to_string(),
            },
            Tag::Paragraph => BlockKind::Paragraph {
                text: self.text.trim().to_string(),
            },
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => BlockKind::CodeBlock {
                fenced: true,
                language: info.split_whitespace().next().map(str::to_string),
                code: self.text,
            },
            Tag::CodeBlock(CodeBlockKind::Indented) => BlockKind::CodeBlock {
                fenced: false,
                language: None,
                code: self.text,
            },
            Tag::HtmlBlock => BlockKind::Html {
                html: self.raw_html,
            },
            Tag::Table(_) => BlockKind::Table,
            _ => BlockKind::Other,
        };

        BlockNode {
            kind,
            span: self.span,
            events: self.events,
        }
    }
}
