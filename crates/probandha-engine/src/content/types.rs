use serde::Serialize;

use crate::render::callout::CalloutType;

/// One typed unit of parsed post content.
///
/// Blocks are produced in document order by [`parse_content`](super::parse_content)
/// and never mutated afterwards; renderers transform them at render time.
/// The serialized shape (`type` tag, camelCase fields) matches what the web
/// front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    /// Markdown-like prose, rendered through [`render_markdown`](crate::markdown::render_markdown).
    Text { content: String },
    /// A fenced code block.
    Code {
        content: String,
        /// First token of the opening fence, or the configured default.
        language: String,
        /// Free text after the language token; empty when absent.
        title: String,
    },
    /// `!GALLERY: <title> [<url>, <url>, ...]`
    Gallery { title: String, images: Vec<String> },
    /// `!IMAGE: <alt> [<url>]`
    Image { src: String, alt: String },
    /// `!CALLOUT: <type> [<content>]`
    Callout {
        #[serde(rename = "calloutType")]
        callout_type: CalloutType,
        content: String,
    },
}

impl ContentBlock {
    /// Short lowercase name of the block variant, used for the wrapper CSS class.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Code { .. } => "code",
            ContentBlock::Gallery { .. } => "gallery",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Callout { .. } => "callout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let block = ContentBlock::Callout {
            callout_type: CalloutType::Warning,
            content: "Careful".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "callout",
                "calloutType": "warning",
                "content": "Careful",
            })
        );
    }

    #[test]
    fn kind_names() {
        let text = ContentBlock::Text {
            content: "x".to_string(),
        };
        let image = ContentBlock::Image {
            src: "a.jpg".to_string(),
            alt: String::new(),
        };
        assert_eq!(text.kind_name(), "text");
        assert_eq!(image.kind_name(), "image");
    }
}
