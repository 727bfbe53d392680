//! # Block Kinds
//!
//! Block-specific types that own their syntax markers.
//!
//! ## Types
//!
//! - **`Heading`**: `PREFIXES = ["# ", .., "###### "]`
//! - **`CodeFence`**: `FENCE = "```"`, a raw zone
//! - **`BlockQuote`**: `PREFIX = '>'`
//! - **`UnorderedList`**: `MARKER = "- "`
//! - **`OrderedList`**: `"{n}. "` numbered from 1, `SEPARATOR = ". "`
//! - **`Paragraph`**: no markers, the fallback
//!
//! Marker constants live here; the classifier and transformer call them and
//! never hardcode `#`, `>` or fences themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
