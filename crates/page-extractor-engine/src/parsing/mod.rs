//! # Block Parsing
//!
//! Turns markdown source into an ordered list of top-level [`BlockNode`]s.
//!
//! pulldown-cmark does the actual markdown work; [`BlockBuilder`] groups its
//! event stream into one node per top-level block and classifies it into the
//! closed [`BlockKind`] enum the extraction stages match on.
//!
//! ## Modules
//!
//! - **`blocks`**: Core types (`BlockNode`, `BlockKind`)
//! - **`builder`**: `BlockBuilder` grouping events into blocks
//! - **`span`**: Byte spans into the source
//!
//! ## Key Invariants
//!
//! - Only top-level blocks become nodes; nested content stays in `events`
//! - Every node's span lies within the source
//! - Nodes appear in document order

pub mod blocks;
pub mod builder;
pub mod span;

use pulldown_cmark::{Options, Parser};

use crate::options::ExtractOptions;

pub use blocks::{BlockKind, BlockNode};
pub use builder::BlockBuilder;
pub use span::Span;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(source: &str, options: &ExtractOptions) -> ParsedDoc {
    let mut parser_options = Options::empty();
    if options.tables {
        parser_options.insert(Options::ENABLE_TABLES);
    }

    let mut builder = BlockBuilder::new();
    for (event, range) in Parser::new_ext(source, parser_options).into_offset_iter() {
        builder.push(event, range);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
