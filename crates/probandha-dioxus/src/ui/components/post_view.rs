use dioxus::prelude::*;
use probandha_engine::{BlogPost, Locale, MarkdownOptions, ScanOptions};

use super::ContentBlockView;

#[component]
pub fn PostView(
    post: BlogPost,
    locale: Locale,
    scan: ScanOptions,
    markdown: MarkdownOptions,
) -> Element {
    let style = locale.style();
    let title = post.title.get(locale).to_string();
    let excerpt = post.excerpt.get(locale).to_string();
    let blocks = post.blocks(locale, &scan);
    let status = post.status.as_str();
    let shows_fallback = post.shows_fallback(locale);

    rsx! {
        article {
            class: "post {style.font_class}",
            lang: style.lang,
            header {
                class: "post-header",
                if let Some(ref category) = post.category {
                    span { class: "post-category", "{category}" }
                }
                if !post.status.is_published() {
                    span { class: "post-status post-status-{status}", "{status}" }
                }
                h1 { class: "post-title", "{title}" }
                if !excerpt.is_empty() {
                    p { class: "post-excerpt", "{excerpt}" }
                }
            }
            if let Some(ref image) = post.featured_image {
                img { class: "post-featured-image", src: "{image}", alt: "{title}" }
            }
            if shows_fallback {
                p { class: "post-untranslated", "{locale.labels().untranslated}" }
            }
            div {
                class: "post-body",
                for (i, block) in blocks.into_iter().enumerate() {
                    ContentBlockView {
                        key: "{post.slug}-{locale}-{i}",
                        block,
                        locale,
                        markdown,
                    }
                }
            }
        }
    }
}
