//! # Inline Parsing
//!
//! Split-pass tokenizer for the text inside a block.
//!
//! ## Architecture
//!
//! A run of text starts as one plain [`Fragment`]. Five passes then run in
//! order, each only touching fragments that are still plain:
//!
//! 1. `**` → bold
//! 2. `*` → italic
//! 3. `` ` `` → code
//! 4. `![alt](url)` → image
//! 5. `[text](url)` → link
//!
//! Once a fragment is typed it is never split again, so styles do not nest.
//!
//! ## Modules
//!
//! - **`types`**: `Fragment` enum and its leaf-node conversion
//! - **`kinds`**: `Delimiter` and `Media`, which own the markers and patterns
//! - **`parser`**: `text_to_fragments()` main entry point with the `split_*` passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_images, extract_links, split_delimiter, split_images, split_links, text_to_children,
    text_to_fragments,
};
pub use types::Fragment;
