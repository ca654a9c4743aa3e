pub mod content;
pub mod io;
pub mod markdown;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{ContentBlock, ScanOptions, parse_content, parse_content_with};
pub use markdown::{MarkdownOptions, render_markdown, render_markdown_with};
pub use models::{blog_post::*, post_file::*};
pub use render::{
    callout::{CalloutStyle, CalloutType},
    gallery::GalleryCursor,
    locale::{Labels, Locale, LocaleStyle},
};
