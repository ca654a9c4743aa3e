/// Language and title taken from an opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceInfo {
    pub language: String,
    pub title: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string (text after the backticks) if `line` is a fence marker.
    ///
    /// Markers are only recognized at column zero. Backticks beyond the
    /// first three belong to the marker, not the info string.
    pub fn info_string(line: &str) -> Option<&str> {
        line.trim_end_matches(['\r', '\n'])
            .strip_prefix(Self::BACKTICKS)
            .map(|rest| rest.trim_start_matches('`').trim())
    }

    /// Splits an info string into language (first token) and title (the rest).
    pub fn parse_info(info: &str, default_language: &str) -> FenceInfo {
        let info = info.trim();
        match info.split_once(char::is_whitespace) {
            Some((language, title)) => FenceInfo {
                language: language.to_string(),
                title: title.trim().to_string(),
            },
            None if info.is_empty() => FenceInfo {
                language: default_language.to_string(),
                title: String::new(),
            },
            None => FenceInfo {
                language: info.to_string(),
                title: String::new(),
            },
        }
    }

    /// Fence body as emitted in a block: leading blank lines and trailing
    /// whitespace removed, indentation of the first code line kept.
    pub fn trim_body(body: &str) -> String {
        let mut rest = body;
        while let Some((first, tail)) = rest.split_once('\n') {
            if !first.trim().is_empty() {
                break;
            }
            rest = tail;
        }
        rest.trim_end().to_string()
    }
}
