//! # Markdown Rendering
//!
//! A deliberately narrow micro-formatter for post prose. It is not a general
//! markdown parser; its rule set is the contract that authored content
//! relies on:
//!
//! 1. `### `, `## `, `# ` at line start become `<h3>`, `<h2>`, `<h1>`.
//! 2. `**bold**` becomes `<strong>`.
//! 3. `*italic*` becomes `<em>`.
//! 4. `[label](url)` becomes a link opened in a new tab with
//!    `rel="noopener noreferrer"`.
//! 5. Lines starting with `* ` or `- ` become `<li>` (no `<ul>` unless
//!    [`MarkdownOptions::wrap_lists`] is set).
//! 6. Every remaining bare line is wrapped in its own `<p>`; blank lines
//!    emit nothing.
//! 7. No empty paragraphs, and paragraphs never wrap headings or list items.
//!
//! Rules 2-4 apply inside headings, list items and paragraphs alike.
//! Rendering is line-oriented: lines are classified (`line`), then inline
//! content is parsed (`inline`) and written out.

pub mod inline;
pub mod line;

use inline::{InlineNode, kinds::Link, parse_inline};
use line::MarkdownLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkdownOptions {
    /// Escape text and urls. Off by default: authored content may carry HTML.
    pub escape_html: bool,
    /// Wrap runs of adjacent list items in `<ul>`.
    pub wrap_lists: bool,
}

/// Renders markdown-like text to an HTML string. Empty input gives an empty string.
pub fn render_markdown(text: &str) -> String {
    render_markdown_with(text, &MarkdownOptions::default())
}

pub fn render_markdown_with(text: &str, options: &MarkdownOptions) -> String {
    let mut writer = HtmlWriter::new(*options);

    for line in text.lines() {
        match MarkdownLine::classify(line) {
            MarkdownLine::Blank => writer.end_list(),
            MarkdownLine::Heading { level, text } => {
                writer.end_list();
                writer.heading(level, text);
            }
            MarkdownLine::ListItem { text } => writer.list_item(text),
            MarkdownLine::Bare(text) => {
                writer.end_list();
                writer.paragraph(text);
            }
        }
    }
    writer.end_list();

    writer.finish()
}

struct HtmlWriter {
    options: MarkdownOptions,
    fragments: Vec<String>,
    in_list: bool,
}

impl HtmlWriter {
    fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
            fragments: vec![],
            in_list: false,
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        let inner = self.inline(text);
        self.fragments.push(format!("<h{level}>{inner}</h{level}>"));
    }

    fn list_item(&mut self, text: &str) {
        if self.options.wrap_lists && !self.in_list {
            self.fragments.push("<ul>".to_string());
            self.in_list = true;
        }
        let inner = self.inline(text);
        self.fragments.push(format!("<li>{inner}</li>"));
    }

    fn end_list(&mut self) {
        if self.in_list {
            self.fragments.push("</ul>".to_string());
            self.in_list = false;
        }
    }

    fn paragraph(&mut self, text: &str) {
        let inner = self.inline(text);
        self.fragments.push(format!("<p>{inner}</p>"));
    }

    fn inline(&self, text: &str) -> String {
        let mut out = String::new();
        self.write_nodes(&mut out, &parse_inline(text));
        out
    }

    fn write_nodes(&self, out: &mut String, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(text) => {
                    if self.options.escape_html {
                        out.push_str(&html_escape::encode_text(text));
                    } else {
                        out.push_str(text);
                    }
                }
                InlineNode::Strong(children) => {
                    out.push_str("<strong>");
                    self.write_nodes(out, children);
                    out.push_str("</strong>");
                }
                InlineNode::Emphasis(children) => {
                    out.push_str("<em>");
                    self.write_nodes(out, children);
                    out.push_str("</em>");
                }
                InlineNode::Link { label, url } => {
                    let href = if self.options.escape_html {
                        html_escape::encode_double_quoted_attribute(url)
                    } else {
                        url.as_str().into()
                    };
                    out.push_str(&format!(
                        r#"<a href="{href}" target="{}" rel="{}">"#,
                        Link::TARGET,
                        Link::REL
                    ));
                    self.write_nodes(out, label);
                    out.push_str("</a>");
                }
            }
        }
    }

    fn finish(self) -> String {
        self.fragments.join("\n")
    }
}
