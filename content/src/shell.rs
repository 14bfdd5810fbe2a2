#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::catalog;
use crate::language::Language;
use crate::section::SectionId;

/// Error returned by [`ShellState::open`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("{section} has no detail #{index} (available: {available})")]
    UnknownDetail { section: SectionId, index: usize, available: usize },
}

/// Navigation state: active section, open detail view, display language.
///
/// A detail view belongs to the section it was opened in, so navigating
/// away closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub section: SectionId,
    pub language: Language,
    pub detail: Option<usize>,
}

impl ShellState {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language, ..Self::default() }
    }

    pub fn navigate(&mut self, section: SectionId) {
        if self.section != section {
            debug!(from = %self.section, to = %section, "navigate");
            self.detail = None;
        }
        self.section = section;
    }

    /// Flip between English and Chinese. Returns the new language.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Open the `index`-th detail view of the active section.
    pub fn open(&mut self, index: usize) -> Result<(), ShellError> {
        let available = catalog().detail_count(self.section);
        if index >= available {
            return Err(ShellError::UnknownDetail { section: self.section, index, available });
        }
        self.detail = Some(index);
        Ok(())
    }

    /// Close the open detail view. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        self.detail.take().is_some()
    }
}
