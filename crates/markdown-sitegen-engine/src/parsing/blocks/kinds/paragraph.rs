/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Their lines are joined into one run of inline text.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines.into_iter().collect::<Vec<_>>().join(Self::LINE_JOIN)
    }
}
