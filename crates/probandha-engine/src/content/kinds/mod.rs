//! # Block Kinds
//!
//! Each block kind owns its syntax: the fence delimiter and info-string
//! grammar live in [`CodeFence`], the directive keywords and patterns in
//! [`Directive`]. The classifier and builder call into these; they never
//! hardcode ```` ``` ```` or `!GALLERY:`.

pub mod code_fence;
pub mod directive;

pub use code_fence::{CodeFence, FenceInfo};
pub use directive::Directive;
