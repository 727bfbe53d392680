//! # Site Generation
//!
//! Turns a content directory of markdown files into HTML pages.
//!
//! ## Modules
//!
//! - **`title`**: `extract_title` finds the page title (first `# ` line)
//! - **`template`**: `Template` with `{{ Title }}` / `{{ Content }}` placeholders
//! - **`base_path`**: `BasePath` rewrites root-relative `href`/`src` for sites
//!   served below the domain root
//! - **`generate`**: `generate_page` for one file, `generate_pages_recursive`
//!   for a whole tree
//!
//! Conversion errors are per-document; whether a failing page stops the run
//! is decided by the caller through [`OnError`].

pub mod base_path;
pub mod generate;
pub mod template;
pub mod title;

use std::path::PathBuf;

use crate::html::RenderError;
use crate::io::IoError;
use crate::parsing::ParseError;

pub use base_path::BasePath;
pub use generate::{GenerationReport, OnError, generate_page, generate_pages_recursive};
pub use template::Template;
pub use title::extract_title;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("No title found: {path} has no top-level '# ' heading")]
    MissingTitle { path: PathBuf },
    #[error("Template {path} is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        path: PathBuf,
        placeholder: &'static str,
    },
    #[error("Failed to convert {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
    #[error(transparent)]
    Io(#[from] IoError),
}
