//! # Render Support
//!
//! UI-independent pieces of the block renderers: the gallery cursor, the
//! callout style table and the per-locale labels and styles. The Dioxus
//! components and the terminal previewer both read from here.

pub mod callout;
pub mod gallery;
pub mod locale;
