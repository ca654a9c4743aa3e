/// A line of markdown-like text, classified by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownLine<'a> {
    /// Empty or whitespace-only; emits nothing and ends a list.
    Blank,
    /// `# `, `## ` or `### ` at line start.
    Heading { level: u8, text: &'a str },
    /// `* ` or `- ` at line start.
    ListItem { text: &'a str },
    /// Anything else; one paragraph per line.
    Bare(&'a str),
}

const HEADINGS: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];
const BULLETS: [&str; 2] = ["* ", "- "];

impl<'a> MarkdownLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return MarkdownLine::Blank;
        }
        for (prefix, level) in HEADINGS {
            if let Some(text) = line.strip_prefix(prefix) {
                return MarkdownLine::Heading { level, text };
            }
        }
        for bullet in BULLETS {
            if let Some(text) = line.strip_prefix(bullet) {
                return MarkdownLine::ListItem { text };
            }
        }
        MarkdownLine::Bare(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", MarkdownLine::Heading { level: 1, text: "Title" })]
    #[case("## Sub", MarkdownLine::Heading { level: 2, text: "Sub" })]
    #[case("### Small", MarkdownLine::Heading { level: 3, text: "Small" })]
    #[case("#### Too deep", MarkdownLine::Bare("#### Too deep"))]
    #[case("#NoSpace", MarkdownLine::Bare("#NoSpace"))]
    #[case("* item", MarkdownLine::ListItem { text: "item" })]
    #[case("- item", MarkdownLine::ListItem { text: "item" })]
    #[case("-not a bullet", MarkdownLine::Bare("-not a bullet"))]
    #[case("  ", MarkdownLine::Blank)]
    #[case("", MarkdownLine::Blank)]
    #[case("text\r", MarkdownLine::Bare("text"))]
    fn classifies(#[case] line: &str, #[case] expected: MarkdownLine<'_>) {
        assert_eq!(MarkdownLine::classify(line), expected);
    }
}
