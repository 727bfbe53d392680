use crate::parsing::blocks::kinds::Heading;

/// Returns the text of the first line starting with `# `, trimmed.
///
/// Only the top level counts: `## Sub` lines are skipped.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(Heading::PREFIXES[0]))
        .map(str::trim)
}
