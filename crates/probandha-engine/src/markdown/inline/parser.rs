use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link, Strong},
    types::InlineNode,
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// Text between constructs is emitted as `InlineNode::Text`. Adjacent text
/// is merged, so unclosed delimiters do not fragment the output.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        let node = match cur.peek() {
            Some(Emphasis::DELIM) => {
                try_parse_strong(&mut cur).or_else(|| try_parse_emphasis(&mut cur))
            }
            Some(Link::LABEL_OPEN) => try_parse_link(&mut cur),
            _ => None,
        };

        match node {
            Some(node) => {
                push_text(&mut out, &s[text_start..start]);
                out.push(node);
                text_start = cur.pos();
            }
            None => {
                cur.bump();
            }
        }
    }

    push_text(&mut out, &s[text_start..]);
    out
}

fn push_text(out: &mut Vec<InlineNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(InlineNode::text(text));
    }
}

/// End of a complete `**...**` span starting at the cursor, if there is one.
fn strong_end(cur: &Cursor<'_>) -> Option<usize> {
    if !cur.starts_with(Strong::DELIM.as_bytes()) {
        return None;
    }
    let mut probe = cur.clone();
    probe.bump_n(Strong::DELIM.len());
    if !probe.seek(Strong::DELIM) {
        return None;
    }
    Some(probe.pos() + Strong::DELIM.len())
}

/// Attempts to parse `**strong**`. The first closing `**` ends it.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let end = strong_end(cur)?;
    let inner = &cur.s[cur.pos() + Strong::DELIM.len()..end - Strong::DELIM.len()];
    cur.i = end;
    Some(InlineNode::Strong(parse_inline(inner)))
}

/// Attempts to parse `*emphasis*`, stepping over complete strong spans while
/// looking for the closing `*`. On failure the cursor is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // *
    let inner_start = cur.pos();

    while !cur.eof() {
        if let Some(end) = strong_end(cur) {
            cur.i = end;
            continue;
        }
        if cur.peek() == Some(Emphasis::DELIM) {
            break;
        }
        cur.bump();
    }

    if cur.peek() != Some(Emphasis::DELIM) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump(); // closing *

    Some(InlineNode::Emphasis(parse_inline(inner)))
}

/// Attempts to parse `[label](url)`. The label must be non-empty and free of
/// `]`; the url must be non-empty and free of `)`.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();
    if !cur.seek(Link::LABEL_CLOSE) {
        *cur = saved;
        return None;
    }
    let label = cur.slice_from(label_start);
    cur.bump(); // ]

    if label.is_empty() || cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let url_start = cur.pos();
    if !cur.seek(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    let url = cur.slice_from(url_start);
    if url.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        label: parse_inline(label),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> InlineNode {
        InlineNode::text(s)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![t("hello world")]);
    }

    #[test]
    fn parse_strong() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![t("a "), InlineNode::Strong(vec![t("b")]), t(" c")]
        );
    }

    #[test]
    fn parse_emphasis() {
        assert_eq!(
            parse_inline("*it*"),
            vec![InlineNode::Emphasis(vec![t("it")])]
        );
    }

    #[test]
    fn emphasis_inside_strong() {
        assert_eq!(
            parse_inline("**a *b* c**"),
            vec![InlineNode::Strong(vec![
                t("a "),
                InlineNode::Emphasis(vec![t("b")]),
                t(" c")
            ])]
        );
    }

    #[test]
    fn strong_inside_emphasis() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![InlineNode::Emphasis(vec![
                t("a "),
                InlineNode::Strong(vec![t("b")]),
                t(" c")
            ])]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("see [docs](https://example.com)"),
            vec![
                t("see "),
                InlineNode::Link {
                    label: vec![t("docs")],
                    url: "https://example.com".to_string(),
                }
            ]
        );
    }

    #[test]
    fn link_label_is_inline_parsed() {
        assert_eq!(
            parse_inline("[**x**](u)"),
            vec![InlineNode::Link {
                label: vec![InlineNode::Strong(vec![t("x")])],
                url: "u".to_string(),
            }]
        );
    }

    #[test]
    fn link_url_is_raw() {
        assert_eq!(
            parse_inline("[a](http://x/*y*)"),
            vec![InlineNode::Link {
                label: vec![t("a")],
                url: "http://x/*y*".to_string(),
            }]
        );
    }

    #[test]
    fn unclosed_constructs_become_text() {
        assert_eq!(parse_inline("2 * 3 = 6"), vec![t("2 * 3 = 6")]);
        assert_eq!(parse_inline("[not a link]"), vec![t("[not a link]")]);
        assert_eq!(parse_inline("[a] (b)"), vec![t("[a] (b)")]);
        assert_eq!(parse_inline("[a](b"), vec![t("[a](b")]);
    }

    #[test]
    fn bangla_text_with_strong() {
        assert_eq!(
            parse_inline("আমার **সোনার** বাংলা"),
            vec![
                t("আমার "),
                InlineNode::Strong(vec![t("সোনার")]),
                t(" বাংলা")
            ]
        );
    }
}
