//! # Content Blocks
//!
//! Turns an authored post body into an ordered list of [`ContentBlock`]s.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified as a fence
//!    marker, a well-formed directive, or text.
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the one open
//!    block (text or code fence) and emits blocks as they close.
//!
//! ## Directive Syntax
//!
//! ```text
//! ```javascript My Title      code fence open (language, optional title)
//! ```                         code fence close
//! !GALLERY: <title> [<url>, <url>, ...]
//! !IMAGE: <alt text> [<url>]
//! !CALLOUT: <type> [<content>]
//! ```
//!
//! ## Key Invariants
//!
//! - Blocks come out in document order.
//! - Directives and fences are only recognized at the start of a line.
//! - Fenced code is a raw zone: directives inside a fence are code.
//! - Malformed directives (no bracketed payload) are kept as text.
//! - Nothing is dropped at end of input: an unterminated fence is still
//!   emitted as a code block holding everything after its opening line.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{ContentLineClassifier, LineClass};
pub use types::ContentBlock;

/// Language used for fences that do not name one.
pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub default_language: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}

/// Parses one locale's post body into blocks. Total over all inputs.
pub fn parse_content(content: &str) -> Vec<ContentBlock> {
    parse_content_with(content, &ScanOptions::default())
}

pub fn parse_content_with(content: &str, options: &ScanOptions) -> Vec<ContentBlock> {
    let classifier = ContentLineClassifier;
    let mut builder = BlockBuilder::new(options.default_language.as_str());

    for line in content.lines() {
        builder.push(line, classifier.classify(line));
    }

    builder.finish()
}
