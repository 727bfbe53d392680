pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, RenderError};
pub use models::ContentPage;
pub use parsing::{ParseError, markdown_to_html_node};
pub use site::{BasePath, OnError, SiteError, Template};

/// Errors from converting and rendering a markdown document in one step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a markdown document into an HTML node tree.
pub fn convert(markdown: &str) -> Result<HtmlNode, ParseError> {
    markdown_to_html_node(markdown)
}

/// Converts a markdown document and renders it to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(convert(markdown)?.render()?)
}
