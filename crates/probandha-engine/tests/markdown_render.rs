use probandha_engine::{
    ContentBlock, MarkdownOptions, parse_content, render_markdown, render_markdown_with,
};

#[test]
fn bold_and_italic_keep_surrounding_text() {
    insta::assert_snapshot!(
        render_markdown("**bold** and *italic*"),
        @"<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn link_inside_emphasis() {
    insta::assert_snapshot!(
        render_markdown("*read [this](https://example.com/a)*"),
        @r#"<p><em>read <a href="https://example.com/a" target="_blank" rel="noopener noreferrer">this</a></em></p>"#
    );
}

#[test]
fn text_block_from_scanner_renders() {
    let blocks = parse_content("## অধ্যায় ১\n\nপ্রথম **লাইন**\n!IMAGE: x [x.png]");
    let ContentBlock::Text { content } = &blocks[0] else {
        panic!("expected text block first");
    };
    assert_eq!(
        render_markdown(content),
        "<h2>অধ্যায় ১</h2>\n<p>প্রথম <strong>লাইন</strong></p>"
    );
}

#[test]
fn adversarial_input_does_not_panic() {
    let inputs = [
        "***",
        "**",
        "*",
        "[",
        "[](",
        "[]()",
        "# ",
        "- ",
        "*** nested ** mess * [a](",
        "\r\n\r\n",
        "ক*খ**গ",
    ];
    for input in inputs {
        let _ = render_markdown(input);
        let _ = render_markdown_with(
            input,
            &MarkdownOptions {
                escape_html: true,
                wrap_lists: true,
            },
        );
    }
}

#[test]
fn empty_heading_and_item_render_empty_tags() {
    assert_eq!(render_markdown("# \n- "), "<h1></h1>\n<li></li>");
}
