use dioxus::prelude::*;
use probandha_engine::{BlogPost, PostFile, io};

use super::components::{ErrorScreen, PostList, PostView};
use crate::Settings;

const BLOG_CSS: &str = include_str!("assets/blog.css");

#[component]
pub fn App(settings: Settings) -> Element {
    let posts = use_signal(|| match io::scan_posts(&settings.posts_path) {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Error scanning posts folder: {e}");
            vec![]
        }
    });

    let mut selected_file = use_signal(|| None::<PostFile>);
    let mut current_post = use_signal(|| None::<BlogPost>);
    let mut load_error = use_signal(|| None::<String>);
    let mut locale = use_signal(|| settings.locale);

    let toggle_label = locale().toggled().code();

    let on_select = {
        let posts_path = settings.posts_path.clone();
        move |post_file: PostFile| match io::read_post(post_file.relative_path(), &posts_path) {
            Ok(post) => {
                log::info!("Opened post {}", post_file.relative_path());
                current_post.set(Some(post));
                load_error.set(None);
                selected_file.set(Some(post_file));
            }
            Err(e) => {
                log::error!("Error reading post {}: {e}", post_file.relative_path());
                current_post.set(None);
                load_error.set(Some(e.to_string()));
                selected_file.set(Some(post_file));
            }
        }
    };

    rsx! {
        style { {BLOG_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                button {
                    class: "locale-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let next = locale().toggled();
                        log::debug!("Switching locale to {next}");
                        locale.set(next);
                    },
                    "{toggle_label}"
                }
                h2 { "Posts" }
                PostList {
                    posts: posts(),
                    selected: selected_file(),
                    on_select,
                }
            }
            div {
                class: "main-content",
                if let Some(message) = load_error() {
                    ErrorScreen {
                        title: "Could not open post",
                        message,
                        details: selected_file().map(|f| f.relative_path().to_string()),
                    }
                } else if let Some(post) = current_post() {
                    PostView {
                        post,
                        locale: locale(),
                        scan: settings.scan.clone(),
                        markdown: settings.markdown,
                    }
                } else {
                    p { class: "empty-state", "Select a post to preview it." }
                }
            }
        }
    }
}
