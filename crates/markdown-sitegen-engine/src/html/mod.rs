//! # HTML Node Tree
//!
//! A small generic element tree and its string renderer.
//!
//! ## Variants
//!
//! - **`Leaf`**: a tag (optional) and a value, no children. A leaf without a
//!   tag renders as its raw value, which is how plain inline text is carried.
//! - **`Parent`**: a tag and an ordered, non-empty list of children.
//!
//! Both variants carry [`Attributes`], rendered in insertion order.
//!
//! ## Escaping
//!
//! Nothing is escaped: text values and attribute values are emitted verbatim.
//! Markdown sources that contain `<`, `>` or `&` pass straight through.

mod attributes;

pub use attributes::Attributes;

/// Errors raised while rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("parent node must have a tag")]
    MissingTag,
    #[error("parent node <{tag}> must have children")]
    MissingChildren { tag: String },
    #[error("leaf node {} must have a value", describe_tag(.tag))]
    MissingValue { tag: Option<String> },
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("<{tag}>"),
        None => "(text)".to_string(),
    }
}

/// A node in the HTML element tree.
///
/// Trees are built bottom-up and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// A leaf element, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A tagless leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Returns the node with `key="value"` added to its attributes.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.insert(key, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Renders the node and its subtree to an HTML string.
    ///
    /// # Errors
    /// - [`RenderError::MissingValue`] for a leaf without a value (an empty
    ///   value is fine)
    /// - [`RenderError::MissingTag`] for a parent without a tag
    /// - [`RenderError::MissingChildren`] for a parent with no children
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value
                    .as_deref()
                    .ok_or_else(|| RenderError::MissingValue { tag: tag.clone() })?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, attrs);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                if children.is_empty() {
                    return Err(RenderError::MissingChildren {
                        tag: tag.to_string(),
                    });
                }
                open_tag(out, tag, attrs);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attrs: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attrs.to_html());
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
