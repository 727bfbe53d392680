/// Fenced code block type with owned delimiter constant.
///
/// Code blocks are raw zones: their content is emitted verbatim, with no
/// inline parsing.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether `block` opens and closes with a fence.
    ///
    /// The two fences may not overlap, so the shortest fenced block is six
    /// backticks.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Returns the text between the fences with surrounding whitespace removed.
    pub fn inner(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        block
            .strip_prefix(Self::FENCE)
            .and_then(|rest| rest.strip_suffix(Self::FENCE))
            .map(str::trim)
    }
}
