use dioxus::prelude::*;
use probandha_engine::Locale;

const COPIED_RESET_MS: u32 = 2000;

/// Writes `text` to the system clipboard through the webview.
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let eval = document::eval(
        r#"
        const text = await dioxus.recv();
        await navigator.clipboard.writeText(text);
        return true;
        "#,
    );
    eval.send(text).map_err(|e| e.to_string())?;
    eval.join::<bool>().await.map(|_| ()).map_err(|e| e.to_string())
}

async fn sleep_ms(ms: u32) {
    let script = format!("await new Promise(r => setTimeout(r, {ms})); return true;");
    if let Err(e) = document::eval(&script).join::<bool>().await {
        log::debug!("copy label timer failed: {e}");
    }
}

#[component]
pub fn CodeBlock(content: String, language: String, title: String, locale: Locale) -> Element {
    let mut copied = use_signal(|| false);
    let labels = locale.labels();
    let code_class = format!("language-{language}");

    let on_copy = {
        let code = content.clone();
        move |_| {
            let code = code.clone();
            spawn(async move {
                match copy_to_clipboard(&code).await {
                    Ok(()) => {
                        copied.set(true);
                        sleep_ms(COPIED_RESET_MS).await;
                        copied.set(false);
                    }
                    Err(e) => log::error!("Failed to copy code to clipboard: {e}"),
                }
            });
        }
    };

    rsx! {
        div {
            class: "code-block",
            div {
                class: "code-block-header",
                if !title.is_empty() {
                    span { class: "code-block-title", "{title}" }
                }
                span { class: "code-block-language", "{language}" }
                button {
                    class: "copy-button",
                    r#type: "button",
                    title: labels.code,
                    onclick: on_copy,
                    if copied() { "{labels.copied}" } else { "{labels.copy}" }
                }
            }
            pre {
                code {
                    class: "{code_class}",
                    "{content}"
                }
            }
        }
    }
}
