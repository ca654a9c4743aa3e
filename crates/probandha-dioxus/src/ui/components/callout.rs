use dioxus::prelude::*;
use probandha_engine::{CalloutType, MarkdownOptions, render_markdown_with};

#[component]
pub fn Callout(callout_type: CalloutType, content: String, markdown: MarkdownOptions) -> Element {
    let style = callout_type.style();
    let html = render_markdown_with(&content, &markdown);

    rsx! {
        aside {
            class: "{style.class}",
            role: "note",
            span { class: "callout-icon", "{style.icon}" }
            div {
                class: "callout-content",
                dangerous_inner_html: "{html}"
            }
        }
    }
}
