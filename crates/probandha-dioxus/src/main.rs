use dioxus::prelude::*;
use probandha_dioxus::Settings;
use probandha_dioxus::ui::App;
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("probandha starting up");

    let args: Vec<String> = env::args().collect();
    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            let program_name = args
                .first()
                .cloned()
                .unwrap_or_else(|| "probandha-dioxus".to_string());
            eprintln!("Error: {e:#}");
            eprintln!("Usage: {program_name} [posts-folder-path]");
            process::exit(1);
        }
    };
    log::info!("Previewing posts from {}", settings.posts_path.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(settings)
        .launch(app_root);
}

fn app_root() -> Element {
    let settings = use_context::<Settings>();

    rsx! {
        App { settings }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("probandha")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
