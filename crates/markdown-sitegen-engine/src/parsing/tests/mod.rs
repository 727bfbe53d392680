//! Document-level tests for the parsing module.
//!
//! Rendered output is compared with inline insta snapshots.

use crate::parsing::{
    ParseError, blocks::BlockKind, block_kinds, markdown_to_html_node, parse_document,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn to_html(md: &str) -> String {
    markdown_to_html_node(md).unwrap().render().unwrap()
}

#[rstest]
#[case("# Title", "<div><h1>Title</h1></div>")]
#[case(
    "This is **bold** and *italic* text.",
    "<div><p>This is <b>bold</b> and <i>italic</i> text.</p></div>"
)]
#[case("```\ncode here\n```", "<div><pre><code>code here</code></pre></div>")]
#[case("- a\n- b", "<div><ul><li>a</li><li>b</li></ul></div>")]
#[case("1. a\n2. b", "<div><ol><li>a</li><li>b</li></ol></div>")]
#[case("This is a simple paragraph.", "<div><p>This is a simple paragraph.</p></div>")]
#[case(
    "# Heading 1\n\n## Heading 2\n\n### Heading 3",
    "<div><h1>Heading 1</h1><h2>Heading 2</h2><h3>Heading 3</h3></div>"
)]
fn converts_documents(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(to_html(md), expected);
}

#[test]
fn full_document() {
    let md = "# Welcome

This is a **paragraph**.

- Item 1
- Item 2

```
code here
```";
    assert_snapshot!(
        to_html(md),
        @"<div><h1>Welcome</h1><p>This is a <b>paragraph</b>.</p><ul><li>Item 1</li><li>Item 2</li></ul><pre><code>code here</code></pre></div>"
    );
}

#[test]
fn every_block_kind_in_one_document() {
    let md = "## Links & images

Visit [the docs](/docs) or see ![logo](/logo.png).

> Quoted *text*
> over two lines

1. one
2. `two`

```
**raw** <b>
```";
    assert_snapshot!(
        to_html(md),
        @r#"<div><h2>Links & images</h2><p>Visit <a href="/docs">the docs</a> or see <img src="/logo.png" alt="logo"></img>.</p><blockquote>Quoted <i>text</i> over two lines</blockquote><ol><li>one</li><li><code>two</code></li></ol><pre><code>**raw** <b></code></pre></div>"#
    );
}

#[test]
fn unclosed_bold_fails_whole_document() {
    let md = "# Fine\n\nThis is **unclosed bold";
    assert_eq!(
        markdown_to_html_node(md),
        Err(ParseError::MalformedInlineMarkup {
            delimiter: "**".to_string()
        })
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\n\n")]
fn empty_document_is_an_error(#[case] md: &str) {
    assert_eq!(
        markdown_to_html_node(md),
        Err(ParseError::MissingChildren {
            tag: "div".to_string()
        })
    );
}

#[test]
fn seven_hashes_fall_through_to_paragraph() {
    assert_eq!(
        to_html("####### Not a heading"),
        "<div><p>####### Not a heading</p></div>"
    );
}

#[test]
fn block_kinds_in_order() {
    let md = "# h\n\npara\n\n```\nx\n```\n\n> q\n\n- u\n\n1. o";
    assert_eq!(
        block_kinds(md),
        vec![
            BlockKind::Heading(1),
            BlockKind::Paragraph,
            BlockKind::Code,
            BlockKind::Quote,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
        ]
    );
}

#[test]
fn parse_document_keeps_block_text() {
    let doc = parse_document("  # Title  \n\n\n\nBody\ntext  ");
    let texts: Vec<&str> = doc.blocks.iter().map(|block| block.text).collect();
    assert_eq!(texts, vec!["# Title", "Body\ntext"]);
}

#[test]
fn html_is_not_escaped() {
    assert_eq!(
        to_html("a < b && c > d"),
        "<div><p>a < b && c > d</p></div>"
    );
}

#[test]
fn rendering_twice_is_identical() {
    let node = markdown_to_html_node("# A\n\n- b\n- *c*").unwrap();
    assert_eq!(node.render().unwrap(), node.render().unwrap());
}
