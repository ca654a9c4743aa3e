use serde::{Deserialize, Serialize};

use crate::content::{ContentBlock, ScanOptions, parse_content_with};
use crate::render::locale::Locale;

/// A string in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub bn: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    /// The text for `locale`. Untranslated Bangla falls back to English.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Bn if !self.bn.trim().is_empty() => &self.bn,
            _ => &self.en,
        }
    }

    pub fn has_translation(&self, locale: Locale) -> bool {
        match locale {
            Locale::En => !self.en.trim().is_empty(),
            Locale::Bn => !self.bn.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn is_published(self) -> bool {
        self == PostStatus::Published
    }
}

/// A blog post as the backend API stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub excerpt: LocalizedText,
    pub content: LocalizedText,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl BlogPost {
    /// Parses the post body for `locale` into blocks.
    ///
    /// Blocks are derived fresh on every call; nothing is cached.
    pub fn blocks(&self, locale: Locale, options: &ScanOptions) -> Vec<ContentBlock> {
        parse_content_with(self.content.get(locale), options)
    }

    /// True when the body for `locale` is the English fallback.
    pub fn shows_fallback(&self, locale: Locale) -> bool {
        locale != Locale::En && !self.content.has_translation(locale)
    }
}
