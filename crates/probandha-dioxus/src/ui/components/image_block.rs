use dioxus::prelude::*;

/// A single image; the alt text doubles as the caption when present.
#[component]
pub fn ImageBlock(src: String, alt: String) -> Element {
    rsx! {
        figure {
            class: "image-block",
            img {
                src: "{src}",
                alt: "{alt}"
            }
            if !alt.is_empty() {
                figcaption { class: "image-caption", "{alt}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_image(src: &str, alt: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            ImageBlock,
            ImageBlockProps {
                src: src.to_string(),
                alt: alt.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn caption_shown_for_alt_text() {
        let html = render_image("https://cdn.example.com/river.jpg", "Padma river");
        assert!(html.contains("https://cdn.example.com/river.jpg"));
        assert!(html.contains("<figcaption"));
        assert!(html.contains("Padma river"));
    }

    #[test]
    fn no_caption_without_alt_text() {
        let html = render_image("x.png", "");
        assert!(html.contains("x.png"));
        assert!(!html.contains("<figcaption"));
    }
}
