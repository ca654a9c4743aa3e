use super::{
    kinds::{CodeFence, Directive},
    types::ContentBlock,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of content scanning: each line is classified on its own,
/// without knowing whether a code fence is open. The builder decides what a
/// class means in context (a directive inside a fence is just code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A fence marker; the info string is whatever follows the backticks.
    Fence { info: &'a str },
    /// A well-formed directive, already parsed into its block.
    Directive(ContentBlock),
    /// Anything else, including malformed directives.
    Text,
}

/// Classifies individual lines for the scanning phase.
pub struct ContentLineClassifier;

impl ContentLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(info) = CodeFence::info_string(line) {
            return LineClass::Fence { info };
        }
        if let Some(block) = Directive::parse(line) {
            return LineClass::Directive(block);
        }
        if Directive::has_keyword(line) {
            log::debug!("malformed directive kept as text: {line:?}");
        }
        LineClass::Text
    }
}
