//! Dioxus renderers for post content blocks, plus the desktop previewer shell.

pub mod settings;
pub mod ui;

pub use settings::Settings;
