/// A parsed inline node.
///
/// Unlike block content, inline nodes own their text: they only live for
/// the duration of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any construct.
    Text(String),
    /// `**strong**`
    Strong(Vec<InlineNode>),
    /// `*emphasis*`
    Emphasis(Vec<InlineNode>),
    /// `[label](url)`; the url is taken verbatim.
    Link { label: Vec<InlineNode>, url: String },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }
}
