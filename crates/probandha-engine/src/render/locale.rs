use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two languages every content field and UI string comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bn,
}

/// UI strings the block renderers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub copy: &'static str,
    pub copied: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub code: &'static str,
    pub go_to_image: &'static str,
    /// Shown when the post body has no translation for the locale.
    pub untranslated: &'static str,
}

/// Presentation attributes applied around localized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStyle {
    /// Value for the `lang` attribute.
    pub lang: &'static str,
    /// Extra CSS class selecting the script's font.
    pub font_class: &'static str,
}

const EN_LABELS: Labels = Labels {
    copy: "Copy",
    copied: "Copied!",
    previous: "Previous image",
    next: "Next image",
    code: "Code",
    go_to_image: "Go to image",
    untranslated: "This post has no translation yet.",
};

const BN_LABELS: Labels = Labels {
    copy: "কপি",
    copied: "কপি হয়েছে!",
    previous: "আগের ছবি",
    next: "পরের ছবি",
    code: "কোড",
    go_to_image: "ছবিতে যান",
    untranslated: "এই লেখাটি এখনও অনূদিত হয়নি, ইংরেজি সংস্করণ দেখানো হচ্ছে।",
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bn];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN_LABELS,
            Locale::Bn => &BN_LABELS,
        }
    }

    pub fn style(self) -> LocaleStyle {
        match self {
            Locale::En => LocaleStyle {
                lang: "en",
                font_class: "font-latin",
            },
            Locale::Bn => LocaleStyle {
                lang: "bn",
                font_class: "font-bangla",
            },
        }
    }

    /// The other locale; used by the previewers' language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Bn,
            Locale::Bn => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}' (expected 'en' or 'bn')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bn" => Ok(Locale::Bn),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
