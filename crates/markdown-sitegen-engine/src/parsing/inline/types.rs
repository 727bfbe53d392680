use crate::html::HtmlNode;

/// A typed run of inline text.
///
/// Only links and images carry a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text not (yet) claimed by any construct.
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Fragment {
    /// The visible text: link text, image alt text, or the styled run itself.
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(text)
            | Fragment::Bold(text)
            | Fragment::Italic(text)
            | Fragment::Code(text)
            | Fragment::Link { text, .. } => text,
            Fragment::Image { alt, .. } => alt,
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            Fragment::Link { url, .. } | Fragment::Image { url, .. } => Some(url),
            Fragment::Plain(_) | Fragment::Bold(_) | Fragment::Italic(_) | Fragment::Code(_) => {
                None
            }
        }
    }

    /// Converts the fragment into its leaf node.
    ///
    /// Images become an empty-valued `img` leaf with `src` then `alt`.
    pub fn into_node(self) -> HtmlNode {
        match self {
            Fragment::Plain(text) => HtmlNode::text(text),
            Fragment::Bold(text) => HtmlNode::leaf("b", text),
            Fragment::Italic(text) => HtmlNode::leaf("i", text),
            Fragment::Code(text) => HtmlNode::leaf("code", text),
            Fragment::Link { text, url } => HtmlNode::leaf("a", text).with_attr("href", url),
            Fragment::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
        }
    }
}
