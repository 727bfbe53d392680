use std::path::{Path, PathBuf};

use crate::io;
use crate::parsing::markdown_to_html_node;

use super::{BasePath, SiteError, Template, extract_title};

/// What to do when one page in a tree fails to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Log the failure and carry on with the remaining pages.
    Skip,
}

/// Outcome of generating a whole content tree.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Output files written, in generation order.
    pub generated: Vec<PathBuf>,
    /// Source files that failed, only populated with [`OnError::Skip`].
    pub failed: Vec<(PathBuf, SiteError)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders the page body and title for one markdown document.
pub fn render_page(markdown: &str, source: &Path) -> Result<(String, String), SiteError> {
    let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;
    let node = markdown_to_html_node(markdown).map_err(|source_err| SiteError::Parse {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let content = node.render().map_err(|source_err| SiteError::Render {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    Ok((title.to_string(), content))
}

/// Generates one HTML page from a markdown file.
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    base_path: &BasePath,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        from.display(),
        dest.display()
    );

    let markdown = io::read_file(from)?;
    let (title, content) = render_page(&markdown, from)?;
    let page = base_path.apply(&template.fill(&title, &content));
    io::write_file(dest, &page)?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_dir`.
///
/// `content_dir/a/b.md` is written to `dest_dir/a/b.html`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &BasePath,
    on_error: OnError,
) -> Result<GenerationReport, SiteError> {
    let pages = io::scan_content_pages(content_dir)?;
    log::debug!(
        "Found {} markdown files under {}",
        pages.len(),
        content_dir.display()
    );

    let mut report = GenerationReport::default();
    for page in pages {
        let from = page.source_path(content_dir);
        let dest = page.output_path(dest_dir);
        match generate_page(&from, template, &dest, base_path) {
            Ok(()) => report.generated.push(dest),
            Err(err) => match on_error {
                OnError::Abort => return Err(err),
                OnError::Skip => {
                    log::error!("Skipping {}: {err}", from.display());
                    report.failed.push((from, err));
                }
            },
        }
    }

    Ok(report)
}
