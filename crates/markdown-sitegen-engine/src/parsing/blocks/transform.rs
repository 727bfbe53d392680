use crate::html::HtmlNode;
use crate::parsing::{ParseError, inline::text_to_children};

use super::{
    classify::BlockKind,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
};

/// Builds the subtree for one classified block.
///
/// Markers are re-checked here even though the classifier already matched
/// them; a block handed in with the wrong kind fails with
/// [`ParseError::InvalidBlockStructure`] rather than producing a bogus tree.
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode, ParseError> {
    match kind {
        BlockKind::Heading(level) => heading_to_node(block, level),
        BlockKind::Code => code_to_node(block),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => list_to_node(block, kind, "ul", UnorderedList::strip_item),
        BlockKind::OrderedList => list_to_node(block, kind, "ol", OrderedList::strip_item),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

fn heading_to_node(block: &str, level: usize) -> Result<HtmlNode, ParseError> {
    if !(Heading::MIN_LEVEL..=Heading::MAX_LEVEL).contains(&level) {
        return Err(ParseError::InvalidHeadingLevel(level));
    }
    let text =
        Heading::strip(block, level).ok_or_else(|| invalid(BlockKind::Heading(level), block))?;
    Ok(HtmlNode::parent(Heading::tag(level), text_to_children(text)?))
}

fn code_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let code = CodeFence::inner(block).ok_or_else(|| invalid(BlockKind::Code, block))?;
    let code = HtmlNode::parent("code", vec![HtmlNode::text(code)]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let lines = block
        .lines()
        .map(|line| BlockQuote::strip_line(line).ok_or_else(|| invalid(BlockKind::Quote, block)))
        .collect::<Result<Vec<_>, _>>()?;
    let text = Paragraph::join(lines);
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn list_to_node(
    block: &str,
    kind: BlockKind,
    tag: &str,
    strip_item: fn(&str) -> Option<&str>,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            let text = strip_item(line).ok_or_else(|| invalid(kind, block))?;
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = Paragraph::join(block.lines());
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn invalid(kind: BlockKind, block: &str) -> ParseError {
    ParseError::InvalidBlockStructure {
        kind: kind.name(),
        block: block.to_string(),
    }
}
