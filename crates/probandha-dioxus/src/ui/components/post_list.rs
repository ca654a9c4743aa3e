use dioxus::prelude::*;
use probandha_engine::PostFile;

#[component]
pub fn PostList(
    posts: Vec<PostFile>,
    selected: Option<PostFile>,
    on_select: EventHandler<PostFile>,
) -> Element {
    rsx! {
        ul {
            class: "post-list",
            for post in posts {
                li {
                    key: "{post.relative_path()}",
                    class: if selected.as_ref() == Some(&post) { "post-item selected" } else { "post-item" },
                    onclick: {
                        let post = post.clone();
                        move |_| on_select.call(post.clone())
                    },
                    "{post.display_name()}"
                }
            }
        }
    }
}
