//! # Inline Parsing
//!
//! Cursor-based parsing of the three inline constructs the blog format
//! supports: `**strong**`, `*emphasis*` and `[label](url)`.
//!
//! ## Precedence
//!
//! At a `*`, strong is tried before emphasis. While looking for the end of
//! an emphasis, complete `**strong**` spans are stepped over, so
//! `*a **b** c*` is one emphasis containing a strong. Link urls are raw:
//! asterisks inside `(...)` are not emphasis. Unclosed constructs are text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
