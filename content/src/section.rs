#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Top-level page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Overview,
    Research,
    Projects,
    Contact,
}

/// Error returned when parsing an unknown section id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section {0:?} (expected overview, research, projects, or contact)")]
pub struct ParseSectionError(pub String);

impl SectionId {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Research, Self::Projects, Self::Contact];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Research => "research",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label. Chinese labels keep the English word as a suffix.
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Overview) => "Overview",
            (Language::En, Self::Research) => "Research",
            (Language::En, Self::Projects) => "Projects",
            (Language::En, Self::Contact) => "Contact",
            (Language::Zh, Self::Overview) => "概览 Overview",
            (Language::Zh, Self::Research) => "研究 Research",
            (Language::Zh, Self::Projects) => "项目 Projects",
            (Language::Zh, Self::Contact) => "联系 Contact",
        }
    }

    /// Two-digit index shown next to the label.
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Overview => 1,
            Self::Research => 2,
            Self::Projects => 3,
            Self::Contact => 4,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}
