//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers `**` (bold), `*` (italic), `` ` `` (code)
//! - **`Media`**: bracketed `![alt](url)` images and `[text](url)` links
//!
//! The parser calls these types; it never hardcodes a marker or pattern.

pub mod delimiter;
pub mod media;

pub use delimiter::Delimiter;
pub use media::Media;
