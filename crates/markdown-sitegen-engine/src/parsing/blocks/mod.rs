//! # Block Parsing
//!
//! Block-level structure of a document.
//!
//! ## Modules
//!
//! - **`segment`**: `markdown_to_blocks` splits a document on blank lines
//! - **`classify`**: `classify_block` assigns a `BlockKind`, first matching rule wins
//! - **`kinds`**: block-specific types that own their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`transform`**: `block_to_html_node` builds the subtree for one block
//!
//! ## Key Invariants
//!
//! - Blocks are trimmed and never empty
//! - Fenced code is a raw zone: no inline parsing inside
//! - A block has exactly one kind, decided once

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod transform;

pub use classify::{BlockKind, classify_block};
pub use segment::markdown_to_blocks;
pub use transform::block_to_html_node;

/// One blank-line delimited block of the source and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    /// Classifies `text`, which must already be a trimmed block.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: classify_block(text),
        }
    }
}
