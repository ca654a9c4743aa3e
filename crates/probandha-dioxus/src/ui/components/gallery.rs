use dioxus::prelude::*;
use probandha_engine::{GalleryCursor, Locale};

/// Carousel over a gallery's images, one visible at a time.
#[component]
pub fn Gallery(title: String, images: Vec<String>, locale: Locale) -> Element {
    // Only the index is state; the length always comes from the current images.
    let mut selected = use_signal(|| 0usize);
    let labels = locale.labels();

    if images.is_empty() {
        return rsx! {};
    }

    let cursor = GalleryCursor::at(images.len(), selected());
    let current = cursor.index();
    let src = images.get(current).cloned().unwrap_or_default();
    let position = cursor.position_label();

    rsx! {
        section {
            class: "gallery",
            if !title.is_empty() {
                h3 { class: "gallery-title", "{title}" }
            }
            div {
                class: "gallery-stage",
                button {
                    class: "gallery-nav gallery-prev",
                    r#type: "button",
                    aria_label: labels.previous,
                    onclick: move |_| {
                        let mut cursor = cursor;
                        cursor.previous();
                        selected.set(cursor.index());
                    },
                    "‹"
                }
                img {
                    class: "gallery-image",
                    src: "{src}",
                    alt: "{title} {position}"
                }
                button {
                    class: "gallery-nav gallery-next",
                    r#type: "button",
                    aria_label: labels.next,
                    onclick: move |_| {
                        let mut cursor = cursor;
                        cursor.next();
                        selected.set(cursor.index());
                    },
                    "›"
                }
            }
            div {
                class: "gallery-dots",
                for (i, number) in (0..images.len()).zip(1..) {
                    button {
                        key: "{i}",
                        class: if i == current { "gallery-dot active" } else { "gallery-dot" },
                        r#type: "button",
                        aria_label: "{labels.go_to_image} {number}",
                        onclick: move |_| selected.set(i),
                    }
                }
            }
            span { class: "gallery-position", "{position}" }
        }
    }
}
