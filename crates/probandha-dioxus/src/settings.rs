use anyhow::{Context, Result, bail};
use probandha_config::Config;
use probandha_engine::{Locale, MarkdownOptions, ScanOptions, io};
use std::path::{Path, PathBuf};

/// Everything the previewer needs, resolved from the command line and the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub posts_path: PathBuf,
    pub locale: Locale,
    pub scan: ScanOptions,
    pub markdown: MarkdownOptions,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        let locale = config.default_locale.parse().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to English");
            Locale::En
        });
        Self {
            posts_path: config.posts_path.clone(),
            locale,
            scan: ScanOptions {
                default_language: config.render.default_code_language.clone(),
            },
            markdown: MarkdownOptions {
                escape_html: config.render.escape_html,
                wrap_lists: config.render.wrap_lists,
            },
        }
    }

    /// Resolves settings from `[program, posts-folder?]`.
    ///
    /// A folder argument overrides the config file's `posts_path`; the rest of
    /// the config still applies when a config file exists.
    pub fn resolve(args: &[String]) -> Result<Self> {
        Self::resolve_with_config(args, &Config::config_path())
    }

    pub fn resolve_with_config(args: &[String], config_path: &Path) -> Result<Self> {
        let config = Config::load_from_path(config_path)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

        let settings = match (args.get(1), config) {
            (Some(path), config) if args.len() == 2 => {
                log::info!("Using posts path from CLI argument: {path}");
                let config = config.unwrap_or_else(|| Config::new(PathBuf::from(path)));
                Self {
                    posts_path: PathBuf::from(path),
                    ..Self::from_config(&config)
                }
            }
            (None, Some(config)) => {
                log::info!(
                    "Loaded posts path from config: {}",
                    config.posts_path.display()
                );
                Self::from_config(&config)
            }
            (None, None) => bail!(
                "No posts path provided and no config file found. \
                 Pass a posts folder or create {}",
                config_path.display()
            ),
            _ => bail!("Usage: probandha-dioxus [posts-folder-path]"),
        };

        io::validate_posts_dir(&settings.posts_path).with_context(|| {
            format!(
                "Posts path '{}' is invalid",
                settings.posts_path.display()
            )
        })?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_maps_render_options() {
        let mut config = Config::new(PathBuf::from("/srv/posts"));
        config.default_locale = "bn".to_string();
        config.render.default_code_language = "rust".to_string();
        config.render.wrap_lists = true;

        let settings = Settings::from_config(&config);

        assert_eq!(settings.locale, Locale::Bn);
        assert_eq!(settings.scan.default_language, "rust");
        assert!(settings.markdown.wrap_lists);
        assert!(!settings.markdown.escape_html);
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let mut config = Config::new(PathBuf::from("/srv/posts"));
        config.default_locale = "fr".to_string();

        assert_eq!(Settings::from_config(&config).locale, Locale::En);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_rejects_missing_directory() {
        let config_dir = tempfile::tempdir().unwrap();
        let result = Settings::resolve_with_config(
            &args(&["probandha-dioxus", "/this/path/does/not/exist"]),
            &config_dir.path().join("config.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn resolve_accepts_existing_directory() {
        let config_dir = tempfile::tempdir().unwrap();
        let posts_dir = tempfile::tempdir().unwrap();
        let posts_arg = posts_dir.path().to_string_lossy().to_string();

        let settings = Settings::resolve_with_config(
            &args(&["probandha-dioxus", &posts_arg]),
            &config_dir.path().join("config.toml"),
        )
        .unwrap();

        assert_eq!(settings.posts_path, posts_dir.path());
        assert_eq!(settings.locale, Locale::En);
    }

    #[test]
    fn argument_overrides_config_path_but_keeps_render_options() {
        let config_dir = tempfile::tempdir().unwrap();
        let posts_dir = tempfile::tempdir().unwrap();
        let config_file = config_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "posts_path = \"/elsewhere\"\ndefault_locale = \"bn\"\n[render]\nescape_html = true\n",
        )
        .unwrap();
        let posts_arg = posts_dir.path().to_string_lossy().to_string();

        let settings =
            Settings::resolve_with_config(&args(&["probandha-dioxus", &posts_arg]), &config_file)
                .unwrap();

        assert_eq!(settings.posts_path, posts_dir.path());
        assert_eq!(settings.locale, Locale::Bn);
        assert!(settings.markdown.escape_html);
    }

    #[test]
    fn missing_argument_and_config_is_an_error() {
        let config_dir = tempfile::tempdir().unwrap();
        let result = Settings::resolve_with_config(
            &args(&["probandha-dioxus"]),
            &config_dir.path().join("config.toml"),
        );
        assert!(result.is_err());
    }
}
