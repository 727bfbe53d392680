use crate::html::HtmlNode;
use crate::parsing::ParseError;

use super::{
    kinds::{Delimiter, Media},
    types::Fragment,
};

/// Tokenizes a run of inline text into [`Fragment`]s.
///
/// Passes run in a fixed order: `**`, `*`, `` ` ``, images, links. Each pass
/// only splits fragments that are still plain, so styles never nest. Because
/// `**` goes first, `**bold***italic*` yields a bold run directly followed by
/// an italic run.
///
/// # Errors
/// - [`ParseError::MalformedInlineMarkup`] for an unclosed delimiter
/// - [`ParseError::MalformedLinkOrImage`] if an extracted link or image cannot
///   be located again in its text
pub fn text_to_fragments(text: &str) -> Result<Vec<Fragment>, ParseError> {
    let fragments = Delimiter::PASSES.into_iter().try_fold(
        vec![Fragment::Plain(text.to_string())],
        split_delimiter,
    )?;
    let fragments = split_images(fragments)?;
    split_links(fragments)
}

/// Tokenizes `text` and converts every fragment into a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(text_to_fragments(text)?
        .into_iter()
        .map(Fragment::into_node)
        .collect())
}

/// Splits every plain fragment on `delimiter`.
///
/// Parts alternate plain / styled starting and ending with plain, so a valid
/// split has an odd number of parts. Empty parts are dropped.
pub fn split_delimiter(
    fragments: Vec<Fragment>,
    delimiter: Delimiter,
) -> Result<Vec<Fragment>, ParseError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let Fragment::Plain(text) = fragment else {
            out.push(fragment);
            continue;
        };

        let parts: Vec<&str> = text.split(marker).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::MalformedInlineMarkup {
                delimiter: marker.to_string(),
            });
        }

        out.extend(
            parts
                .into_iter()
                .enumerate()
                .filter(|(_, part)| !part.is_empty())
                .map(|(index, part)| {
                    if index % 2 == 0 {
                        Fragment::Plain(part.to_string())
                    } else {
                        delimiter.style(part.to_string())
                    }
                }),
        );
    }

    Ok(out)
}

/// `(alt, url)` for every `![alt](url)` in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    Media::Image.extract(text)
}

/// `(text, url)` for every `[text](url)` in `text` that is not an image.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    Media::Link.extract(text)
}

pub fn split_images(fragments: Vec<Fragment>) -> Result<Vec<Fragment>, ParseError> {
    split_media(fragments, Media::Image)
}

/// Must run after [`split_images`] so images are not re-read as links.
pub fn split_links(fragments: Vec<Fragment>) -> Result<Vec<Fragment>, ParseError> {
    split_media(fragments, Media::Link)
}

fn split_media(fragments: Vec<Fragment>, media: Media) -> Result<Vec<Fragment>, ParseError> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let Fragment::Plain(text) = fragment else {
            out.push(fragment);
            continue;
        };

        let matches = media.extract(&text);
        if matches.is_empty() {
            out.push(Fragment::Plain(text));
            continue;
        }

        let mut rest = text.as_str();
        for (label, url) in matches {
            let markup = media.markup(&label, &url);
            let (before, after) = rest
                .split_once(markup.as_str())
                .ok_or_else(|| ParseError::MalformedLinkOrImage { markup: markup.clone() })?;
            if !before.is_empty() {
                out.push(Fragment::Plain(before.to_string()));
            }
            out.push(media.fragment(label, url));
            rest = after;
        }

        if !rest.is_empty() {
            out.push(Fragment::Plain(rest.to_string()));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Fragment {
        Fragment::Plain(text.to_string())
    }

    fn bold(text: &str) -> Fragment {
        Fragment::Bold(text.to_string())
    }

    fn italic(text: &str) -> Fragment {
        Fragment::Italic(text.to_string())
    }

    fn code(text: &str) -> Fragment {
        Fragment::Code(text.to_string())
    }

    fn link(text: &str, url: &str) -> Fragment {
        Fragment::Link {
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    fn image(alt: &str, url: &str) -> Fragment {
        Fragment::Image {
            alt: alt.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn split_delimiter_code() {
        let out = split_delimiter(
            vec![plain("This is text with a `code block` word")],
            Delimiter::Code,
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is text with a "),
                code("code block"),
                plain(" word")
            ]
        );
    }

    #[test]
    fn split_delimiter_drops_empty_parts() {
        let out =
            split_delimiter(vec![plain("`code` and `more code`")], Delimiter::Code).unwrap();
        assert_eq!(out, vec![code("code"), plain(" and "), code("more code")]);
    }

    #[test]
    fn split_delimiter_without_marker() {
        let out = split_delimiter(vec![plain("Just plain text")], Delimiter::Code).unwrap();
        assert_eq!(out, vec![plain("Just plain text")]);
    }

    #[test]
    fn split_delimiter_passes_styled_fragments_through() {
        let out = split_delimiter(vec![bold("Already `bold`")], Delimiter::Code).unwrap();
        assert_eq!(out, vec![bold("Already `bold`")]);
    }

    #[test]
    fn split_delimiter_unclosed() {
        let err =
            split_delimiter(vec![plain("This is `invalid markdown")], Delimiter::Code).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedInlineMarkup {
                delimiter: "`".to_string()
            }
        );
    }

    #[test]
    fn extract_links_skips_images() {
        let text = "![rick roll](https://i.imgur.com/aKaOqIh.gif) and [to boot dev](https://www.boot.dev)";
        assert_eq!(
            extract_images(text),
            vec![(
                "rick roll".to_string(),
                "https://i.imgur.com/aKaOqIh.gif".to_string()
            )]
        );
        assert_eq!(
            extract_links(text),
            vec![("to boot dev".to_string(), "https://www.boot.dev".to_string())]
        );
    }

    #[test]
    fn split_images_between_text() {
        let out = split_images(vec![plain(
            "This is text with an ![image](https://i.imgur.com/zcew34n.png) and another ![second](https://i.imgur.com/3elNhQu.png)",
        )])
        .unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is text with an "),
                image("image", "https://i.imgur.com/zcew34n.png"),
                plain(" and another "),
                image("second", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links_between_text() {
        let out = split_links(vec![plain(
            "This is text with a [link](https://www.example.com) and [another](https://www.example.com/another)",
        )])
        .unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is text with a "),
                link("link", "https://www.example.com"),
                plain(" and "),
                link("another", "https://www.example.com/another"),
            ]
        );
    }

    #[test]
    fn split_links_at_start() {
        let out = split_links(vec![plain("[link](https://boot.dev) is at the start")]).unwrap();
        assert_eq!(
            out,
            vec![link("link", "https://boot.dev"), plain(" is at the start")]
        );
    }

    #[test]
    fn repeated_link_is_split_in_order() {
        let out = split_links(vec![plain("[a](b) and [a](b)")]).unwrap();
        assert_eq!(out, vec![link("a", "b"), plain(" and "), link("a", "b")]);
    }

    #[test]
    fn all_types_combined() {
        let out = text_to_fragments(
            "This is **bold** and *italic* and `code` and an ![image](https://url.com/img.png) and a [link](https://url.com)",
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is "),
                bold("bold"),
                plain(" and "),
                italic("italic"),
                plain(" and "),
                code("code"),
                plain(" and an "),
                image("image", "https://url.com/img.png"),
                plain(" and a "),
                link("link", "https://url.com"),
            ]
        );
    }

    #[test]
    fn single_constructs() {
        assert_eq!(
            text_to_fragments("Just plain text").unwrap(),
            vec![plain("Just plain text")]
        );
        assert_eq!(
            text_to_fragments("**bold text**").unwrap(),
            vec![bold("bold text")]
        );
        assert_eq!(
            text_to_fragments("*italic text*").unwrap(),
            vec![italic("italic text")]
        );
        assert_eq!(
            text_to_fragments("`code block`").unwrap(),
            vec![code("code block")]
        );
        assert_eq!(
            text_to_fragments("![alt text](https://example.com/img.png)").unwrap(),
            vec![image("alt text", "https://example.com/img.png")]
        );
        assert_eq!(
            text_to_fragments("[click here](https://example.com)").unwrap(),
            vec![link("click here", "https://example.com")]
        );
    }

    #[test]
    fn repeated_styles() {
        assert_eq!(
            text_to_fragments("**first** and **second**").unwrap(),
            vec![bold("first"), plain(" and "), bold("second")]
        );
        assert_eq!(
            text_to_fragments("*one* *two* *three*").unwrap(),
            vec![
                italic("one"),
                plain(" "),
                italic("two"),
                plain(" "),
                italic("three")
            ]
        );
        assert_eq!(
            text_to_fragments("![one](https://a.com) ![two](https://b.com)").unwrap(),
            vec![
                image("one", "https://a.com"),
                plain(" "),
                image("two", "https://b.com")
            ]
        );
    }

    #[test]
    fn bold_and_italic_adjacent() {
        assert_eq!(
            text_to_fragments("**bold***italic*").unwrap(),
            vec![bold("bold"), italic("italic")]
        );
    }

    #[test]
    fn styles_are_not_reparsed() {
        assert_eq!(
            text_to_fragments("**[not](a link)** and `*raw*`").unwrap_err(),
            ParseError::MalformedInlineMarkup {
                delimiter: "`".to_string()
            },
            "italic runs before code and swallows the text between the backticks"
        );
        assert_eq!(
            text_to_fragments("**[not](a link)**").unwrap(),
            vec![bold("[not](a link)")]
        );
    }

    #[test]
    fn code_with_special_chars() {
        assert_eq!(
            text_to_fragments("run `print('hello')`").unwrap(),
            vec![plain("run "), code("print('hello')")]
        );
    }

    #[test]
    fn empty_text_has_no_fragments() {
        assert_eq!(text_to_fragments("").unwrap(), vec![]);
    }

    #[test]
    fn link_with_formatting_around() {
        assert_eq!(
            text_to_fragments("**bold** [link](https://url.com) *italic*").unwrap(),
            vec![
                bold("bold"),
                plain(" "),
                link("link", "https://url.com"),
                plain(" "),
                italic("italic"),
            ]
        );
    }

    #[test]
    fn unclosed_delimiters() {
        for (text, marker) in [
            ("This is **unclosed bold", "**"),
            ("This is *unclosed italic", "*"),
            ("This is `unclosed code", "`"),
        ] {
            assert_eq!(
                text_to_fragments(text).unwrap_err(),
                ParseError::MalformedInlineMarkup {
                    delimiter: marker.to_string()
                }
            );
        }
    }

    #[test]
    fn fragments_preserve_text_order() {
        let text = "a **b** c *d* e `f` g ![h](i) j [k](l) m";
        let joined: String = text_to_fragments(text)
            .unwrap()
            .iter()
            .map(Fragment::text)
            .collect();
        assert_eq!(joined, "a b c d e f g h j k m");
    }

    #[test]
    fn text_to_children_builds_leaves() {
        let nodes = text_to_children("x **y**").unwrap();
        assert_eq!(nodes, vec![HtmlNode::text("x "), HtmlNode::leaf("b", "y")]);
    }
}
