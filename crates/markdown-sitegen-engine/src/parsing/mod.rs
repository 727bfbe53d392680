//! # Markdown Parsing
//!
//! Turns a markdown document into an [`HtmlNode`] tree in three steps:
//!
//! 1. **Segmentation** (`blocks::segment`): split on blank lines into trimmed blocks
//! 2. **Classification** (`blocks::classify`): give each block one [`BlockKind`]
//! 3. **Transformation** (`blocks::transform`): build a subtree per block, running
//!    the inline tokenizer (`inline`) over the block's text where it applies
//!
//! The resulting subtrees become the children of a single root `<div>`.
//! The first error aborts the whole document; no partial tree is returned.

pub mod blocks;
pub mod inline;

use crate::html::HtmlNode;

use blocks::{Block, BlockKind, block_to_html_node, markdown_to_blocks};

/// Errors raised while converting markdown into a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An inline delimiter (`**`, `*` or `` ` ``) was opened but never closed.
    #[error("invalid markdown: matching delimiter '{delimiter}' not found")]
    MalformedInlineMarkup { delimiter: String },
    /// An extracted image or link could not be found again in its source text.
    #[error("invalid markdown: section {markup:?} not closed")]
    MalformedLinkOrImage { markup: String },
    #[error("invalid {kind} block: {block:?}")]
    InvalidBlockStructure { kind: &'static str, block: String },
    #[error("invalid heading level {0}, expected 1 to 6")]
    InvalidHeadingLevel(usize),
    /// The document produced no blocks, so the root container would be empty.
    #[error("parent node <{tag}> must have children")]
    MissingChildren { tag: String },
}

/// A segmented document with every block classified.
#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    ParsedDoc {
        blocks: markdown_to_blocks(markdown)
            .into_iter()
            .map(Block::new)
            .collect(),
    }
}

/// Converts a whole markdown document into a `<div>` rooted node tree.
///
/// # Errors
/// Returns the first [`ParseError`] raised by any block. A document with no
/// blocks (empty or whitespace only) fails with [`ParseError::MissingChildren`].
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let doc = parse_document(markdown);
    if doc.blocks.is_empty() {
        return Err(ParseError::MissingChildren {
            tag: ROOT_TAG.to_string(),
        });
    }

    let children = doc
        .blocks
        .iter()
        .map(|block| block_to_html_node(block.text, block.kind))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}

const ROOT_TAG: &str = "div";

/// Convenience: the kinds of every block in a document, in order.
pub fn block_kinds(markdown: &str) -> Vec<BlockKind> {
    parse_document(markdown)
        .blocks
        .into_iter()
        .map(|block| block.kind)
        .collect()
}

#[cfg(test)]
mod tests;
