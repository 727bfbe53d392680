use std::path::Path;

use crate::io;

use super::SiteError;

/// An HTML page template with title and content placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Wraps template text without checking for placeholders.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Loads a template file, requiring both placeholders to be present.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = io::read_file(path)?;
        for placeholder in [Self::TITLE, Self::CONTENT] {
            if !source.contains(placeholder) {
                return Err(SiteError::MissingPlaceholder {
                    path: path.to_path_buf(),
                    placeholder,
                });
            }
        }
        Ok(Self { source })
    }

    /// Replaces every occurrence of both placeholders.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}
