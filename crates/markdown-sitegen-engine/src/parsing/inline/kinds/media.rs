use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::types::Fragment;

// Labels exclude brackets and destinations exclude parentheses, so neither
// construct nests.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});

// The regex crate has no lookbehind, so an optional `!` is captured and
// image-shaped matches are discarded afterwards.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid")
});

/// Bracketed inline constructs with a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    /// `![alt](url)`
    Image,
    /// `[text](url)`, not preceded by `!`
    Link,
}

impl Media {
    /// All non-overlapping `(label, url)` pairs in `text`, left to right.
    pub fn extract(self, text: &str) -> Vec<(String, String)> {
        match self {
            Media::Image => IMAGE_PATTERN
                .captures_iter(text)
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
                .collect(),
            Media::Link => LINK_PATTERN
                .captures_iter(text)
                .filter(|caps| caps[1].is_empty())
                .map(|caps| (caps[2].to_string(), caps[3].to_string()))
                .collect(),
        }
    }

    /// Reassembles the source markup for a `(label, url)` pair.
    pub fn markup(self, label: &str, url: &str) -> String {
        match self {
            Media::Image => format!("![{label}]({url})"),
            Media::Link => format!("[{label}]({url})"),
        }
    }

    pub fn fragment(self, label: String, url: String) -> Fragment {
        match self {
            Media::Image => Fragment::Image { alt: label, url },
            Media::Link => Fragment::Link { text: label, url },
        }
    }
}
