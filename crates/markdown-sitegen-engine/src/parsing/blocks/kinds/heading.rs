/// ATX heading block type with owned prefix constants.
pub struct Heading;

impl Heading {
    /// The only accepted openers: one to six markers and a single space.
    pub const PREFIXES: [&'static str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];

    pub const MIN_LEVEL: usize = 1;
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with one of [`Self::PREFIXES`].
    ///
    /// Seven or more markers never match, nor does a marker run without a
    /// following space.
    pub fn level(block: &str) -> Option<usize> {
        Self::PREFIXES
            .iter()
            .position(|prefix| block.starts_with(prefix))
            .map(|index| index + 1)
    }

    /// Strips the prefix for `level` from `block`.
    ///
    /// Returns `None` if `level` is out of range or the prefix is absent.
    pub fn strip(block: &str, level: usize) -> Option<&str> {
        if !(Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        block.strip_prefix(Self::PREFIXES[level - 1])
    }

    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}
