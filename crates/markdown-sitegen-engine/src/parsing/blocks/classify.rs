use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space, with the marker count as level.
    Heading(usize),
    /// Opens and closes with a ``` fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading(_) => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered list",
            BlockKind::OrderedList => "ordered list",
        }
    }
}

/// Classifies a trimmed block.
///
/// Rules are tried in a fixed order and the first match wins, so a block
/// that satisfies several rules (e.g. a fenced block whose lines all start
/// with `- `) takes the earliest kind.
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockKind::Code;
    }
    if block.lines().all(BlockQuote::is_quote_line) {
        return BlockKind::Quote;
    }
    if block.lines().all(UnorderedList::is_item) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::is_sequential(block.lines()) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
