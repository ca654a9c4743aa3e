use std::sync::LazyLock;

use regex::Regex;

use crate::content::types::ContentBlock;
use crate::render::callout::CalloutType;

static GALLERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!GALLERY:\s*(.*?)\s*\[(.+)\]\s*$").unwrap());
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!IMAGE:\s*(.*?)\s*\[(.+)\]\s*$").unwrap());
static CALLOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!CALLOUT:\s*(.*?)\s*\[(.+)\]\s*$").unwrap());

/// Single-line directives: `!KEYWORD: <label> [<payload>]`.
pub struct Directive;

impl Directive {
    pub const GALLERY: &'static str = "!GALLERY:";
    pub const IMAGE: &'static str = "!IMAGE:";
    pub const CALLOUT: &'static str = "!CALLOUT:";

    /// True if the line starts with a directive keyword, well-formed or not.
    pub fn has_keyword(line: &str) -> bool {
        [Self::GALLERY, Self::IMAGE, Self::CALLOUT]
            .iter()
            .any(|kw| line.starts_with(kw))
    }

    /// Parses a directive line into its block.
    ///
    /// Returns `None` for ordinary lines and for malformed directives (no
    /// bracketed payload); both are accumulated as text by the caller.
    pub fn parse(line: &str) -> Option<ContentBlock> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(caps) = GALLERY.captures(line) {
            let images = caps[2]
                .split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect();
            return Some(ContentBlock::Gallery {
                title: caps[1].to_string(),
                images,
            });
        }
        if let Some(caps) = IMAGE.captures(line) {
            return Some(ContentBlock::Image {
                src: caps[2].trim().to_string(),
                alt: caps[1].to_string(),
            });
        }
        if let Some(caps) = CALLOUT.captures(line) {
            return Some(ContentBlock::Callout {
                callout_type: CalloutType::from_label(&caps[1]),
                content: caps[2].trim().to_string(),
            });
        }
        None
    }
}
