/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn strip_item(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// `1. item` lists, numbered consecutively from one.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The marker expected on the `position`th line (1-based).
    pub fn marker(position: usize) -> String {
        format!("{position}{}", Self::SEPARATOR)
    }

    /// Whether the lines are numbered `1. `, `2. `, ... with no gaps.
    pub fn is_sequential<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .zip(1..)
            .all(|(line, position)| line.starts_with(&Self::marker(position)))
    }

    /// Returns the text after the first `". "`, whatever the number's width.
    pub fn strip_item(line: &str) -> Option<&str> {
        line.split_once(Self::SEPARATOR).map(|(_, text)| text)
    }
}
