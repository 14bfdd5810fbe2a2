//! # content
//!
//! Bilingual portfolio content: papers, projects, profile, contact channels,
//! and the UI strings every section renders. Everything here is static data
//! behind typed accessors, keyed by [`Language`].
//!
//! [`shell::ShellState`] holds the little navigation state a front-end needs
//! (active section, open detail view, language toggle).

pub mod catalog;
pub mod language;
pub mod section;
pub mod shell;
pub mod strings;

pub use catalog::{Catalog, catalog};
pub use language::{Language, Localized, LocalizedList, ParseLanguageError};
pub use section::{ParseSectionError, SectionId};
pub use shell::{ShellError, ShellState};
