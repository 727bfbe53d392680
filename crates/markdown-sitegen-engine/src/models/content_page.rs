use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

/// A markdown source file inside the content directory, and where its page goes.
///
/// `blog/post.md` under the content root becomes `blog/post.html` under the
/// output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPage {
    source: RelativePathBuf,
    output: RelativePathBuf,
}

impl ContentPage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new ContentPage from a path relative to the content root
    pub fn new(source: RelativePathBuf) -> Self {
        let output = source.with_extension(Self::OUTPUT_EXTENSION);
        Self { source, output }
    }

    /// Create from an absolute path found under `content_root`.
    ///
    /// Returns `None` if `path` is not inside `content_root` or is not valid UTF-8.
    pub fn from_path(path: &Path, content_root: &Path) -> Option<Self> {
        let relative = path.strip_prefix(content_root).ok()?;
        RelativePathBuf::from_path(relative).ok().map(Self::new)
    }

    /// Get the source path, relative to the content root
    pub fn source(&self) -> &RelativePath {
        &self.source
    }

    /// Get the output path, relative to the output root
    pub fn output(&self) -> &RelativePath {
        &self.output
    }

    pub fn source_path(&self, content_root: &Path) -> PathBuf {
        self.source.to_path(content_root)
    }

    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        self.output.to_path(output_root)
    }
}

impl From<&str> for ContentPage {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
