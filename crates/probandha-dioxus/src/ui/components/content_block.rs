use dioxus::prelude::*;
use probandha_engine::{ContentBlock, Locale, MarkdownOptions};

use super::{Callout, CodeBlock, Gallery, ImageBlock, TextBlock};

#[component]
pub fn ContentBlockView(block: ContentBlock, locale: Locale, markdown: MarkdownOptions) -> Element {
    let kind = block.kind_name();
    let inner = match block {
        ContentBlock::Text { content } => rsx! {
            TextBlock { content, markdown }
        },
        ContentBlock::Code {
            content,
            language,
            title,
        } => rsx! {
            CodeBlock { content, language, title, locale }
        },
        ContentBlock::Gallery { title, images } => rsx! {
            Gallery { title, images, locale }
        },
        ContentBlock::Image { src, alt } => rsx! {
            ImageBlock { src, alt }
        },
        ContentBlock::Callout {
            callout_type,
            content,
        } => rsx! {
            Callout { callout_type, content, markdown }
        },
    };

    rsx! {
        div { class: "block block-{kind}", {inner} }
    }
}
