/// The URL path a site is served from, e.g. `/` or `/my-project/`.
///
/// Pages link to assets and other pages with root-relative URLs
/// (`href="/blog"`). When the site lives below the domain root those links
/// are rewritten to start with the base path instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub const ROOT: &'static str = "/";

    const ATTRIBUTES: [&'static str; 2] = ["href", "src"];

    /// Normalizes `path` to start and end with `/`.
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(Self::ROOT.to_string())
        } else {
            Self(format!("/{trimmed}/"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Rewrites `href="/` and `src="/` to point below the base path.
    pub fn apply(&self, html: &str) -> String {
        if self.is_root() {
            return html.to_string();
        }
        Self::ATTRIBUTES
            .iter()
            .fold(html.to_string(), |html, attribute| {
                html.replace(
                    &format!("{attribute}=\"/"),
                    &format!("{attribute}=\"{}", self.0),
                )
            })
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::new(Self::ROOT)
    }
}
