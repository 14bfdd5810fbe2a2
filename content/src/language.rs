//! Display language and the localized text pairs keyed by it.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language {0:?} (expected \"en\" or \"zh\")")]
pub struct ParseLanguageError(pub String);

/// Display language. Chinese is the default, as on the live site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Short code used in config and on the wire.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// The other language; backs the EN/ZH toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::En),
            "zh" | "zh-cn" | "chinese" => Ok(Self::Zh),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// A string with an English and a Chinese rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Localized {
    #[must_use]
    pub const fn new(en: &'static str, zh: &'static str) -> Self {
        Self { en, zh }
    }

    /// Same text in both languages.
    #[must_use]
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, zh: text }
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}

/// A list of strings with an English and a Chinese rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedList {
    pub en: &'static [&'static str],
    pub zh: &'static [&'static str],
}

impl LocalizedList {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}
