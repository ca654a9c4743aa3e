use dioxus::prelude::*;
use probandha_engine::{MarkdownOptions, render_markdown_with};

#[component]
pub fn TextBlock(content: String, markdown: MarkdownOptions) -> Element {
    let html = render_markdown_with(&content, &markdown);

    rsx! {
        div {
            class: "text-block prose",
            dangerous_inner_html: "{html}"
        }
    }
}
