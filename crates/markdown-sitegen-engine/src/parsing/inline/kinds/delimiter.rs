use crate::parsing::inline::types::Fragment;

/// An inline style written as text between two identical markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Pass order. `**` must be split before `*`.
    pub const PASSES: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    /// Wraps delimited text in the matching fragment.
    pub fn style(self, text: String) -> Fragment {
        match self {
            Delimiter::Bold => Fragment::Bold(text),
            Delimiter::Italic => Fragment::Italic(text),
            Delimiter::Code => Fragment::Code(text),
        }
    }
}
