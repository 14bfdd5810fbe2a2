//! Plain-text rendering of the sort widget and the portfolio sections.
//!
//! Everything here returns `String`s so the terminal layer only decides where
//! and when to write them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use content::catalog::{Catalog, ContactChannel, OverviewCard, Paper, Project};
use content::{Language, SectionId, strings};
use sorter::SortState;

/// Glyph for a bar in its default state.
pub const BAR: char = '█';
/// Glyph for a bar under comparison.
pub const BAR_COMPARING: char = '▒';
/// Glyph for a settled bar.
pub const BAR_SETTLED: char = '▓';

/// Rows of the bar chart, top row first.
///
/// Each bar is one glyph followed by a space. Heights scale across `range`,
/// the configured value bounds, and every bar shows at least one cell.
#[must_use]
pub fn bar_rows(state: &SortState, range: &RangeInclusive<i64>, height: usize) -> Vec<String> {
    let heights: Vec<usize> = state.values.iter().map(|&v| bar_height(v, range, height)).collect();
    let comparing = state.comparing();

    (1..=height)
        .rev()
        .map(|level| {
            let mut row = String::with_capacity(state.len() * 2);
            for (index, &h) in heights.iter().enumerate() {
                let glyph = if h < level {
                    ' '
                } else if state.is_settled(index) {
                    BAR_SETTLED
                } else if comparing.is_some_and(|(l, r)| index == l || index == r) {
                    BAR_COMPARING
                } else {
                    BAR
                };
                row.push(glyph);
                row.push(' ');
            }
            row.trim_end().to_string()
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar_height(value: i64, range: &RangeInclusive<i64>, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let (min, max) = (*range.start() as f64, *range.end() as f64);
    if max <= min {
        return height;
    }
    let ratio = ((value as f64 - min) / (max - min)).clamp(0.0, 1.0);
    ((ratio * height as f64).ceil() as usize).clamp(1, height)
}

/// `N=20  CMP: [3] vs [4]  STATUS: ACTIVE` footer line.
#[must_use]
pub fn status_line(state: &SortState, language: Language) -> String {
    let cmp = match state.comparing() {
        Some((left, right)) => format!("[{left}] vs [{right}]"),
        None => strings::text(language, "sort.idle").to_string(),
    };
    let status_key = if state.running {
        "sort.status.active"
    } else if state.is_complete() {
        "sort.status.done"
    } else {
        "sort.status.ready"
    };
    format!(
        "N={}  CMP: {cmp}  {}: {}",
        state.len(),
        strings::text(language, "sort.status"),
        strings::text(language, status_key),
    )
}

/// Key hint under the chart. Blank unless a run can be halted.
#[must_use]
pub fn controls_line(state: &SortState, language: Language) -> String {
    if state.running {
        format!("[Ctrl-C] {}", strings::text(language, "sort.halt"))
    } else {
        String::new()
    }
}

/// Header, chart, controls, and footer of the sort widget.
///
/// The line count depends only on `height`, so frames overwrite each other cleanly.
#[must_use]
pub fn sort_frame(state: &SortState, range: &RangeInclusive<i64>, height: usize, language: Language) -> String {
    let mut out = format!(
        "{} :: {}    {}\n",
        strings::text(language, "sort.title"),
        strings::text(language, "sort.subtitle"),
        strings::text(language, "sort.widget_id"),
    );
    for row in bar_rows(state, range, height) {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&controls_line(state, language));
    out.push('\n');
    out.push_str(&status_line(state, language));
    out.push('\n');
    out
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Render a section, optionally expanding one detail view.
#[must_use]
pub fn section(catalog: &Catalog, section: SectionId, detail: Option<usize>, language: Language) -> String {
    let mut out = format!(
        "{} {:02} // {}\n\n",
        strings::text(language, "shell.section"),
        section.ordinal(),
        section.label(language)
    );
    match section {
        SectionId::Overview => overview(&mut out, catalog, detail, language),
        SectionId::Research => research(&mut out, catalog, detail, language),
        SectionId::Projects => projects(&mut out, catalog, detail, language),
        SectionId::Contact => contact(&mut out, catalog, detail, language),
    }
    out
}

fn overview(out: &mut String, catalog: &Catalog, detail: Option<usize>, language: Language) {
    let profile = &catalog.profile;
    let _ = writeln!(out, "{}  [{}]", profile.name.get(language), strings::text(language, "overview.available"));
    let _ = writeln!(out, "{}\n", strings::text(language, "shell.tagline"));
    let _ = writeln!(out, "{}\n\n{}\n", profile.headline.get(language), profile.intro.get(language));
    let _ = writeln!(
        out,
        "> {}: cassette show research    > {}: cassette show contact\n",
        strings::text(language, "overview.read_papers"),
        strings::text(language, "overview.contact_me")
    );
    for (index, card) in catalog.cards.iter().enumerate() {
        overview_card(out, card, detail == Some(index), language);
    }
    let _ = writeln!(out, "[{}] {}", strings::text(language, "overview.toolkit"), profile.toolkit.join(" / "));
    let _ = writeln!(out, "\n[{}]", strings::text(language, "overview.kernel_log"));
    for entry in catalog.timeline {
        let _ = writeln!(out, "  {}  {:<32} {}", entry.date, entry.event.get(language), entry.status);
    }
}

fn overview_card(out: &mut String, card: &OverviewCard, expanded: bool, language: Language) {
    let _ = writeln!(out, "[{}] {}", card.code, card.title.get(language));
    for line in card.summary.get(language) {
        let _ = writeln!(out, "  - {line}");
    }
    if expanded {
        let _ = writeln!(out, "\n  {}", card.details.get(language));
        for (label, value) in card.facts {
            let _ = writeln!(out, "  {}: {}", label.get(language), value.get(language));
        }
    }
    out.push('\n');
}

fn research(out: &mut String, catalog: &Catalog, detail: Option<usize>, language: Language) {
    let _ = writeln!(
        out,
        "{}  {}\n",
        strings::text(language, "research.title"),
        strings::text(language, "research.subtitle")
    );
    for (index, paper) in catalog.papers.iter().enumerate() {
        paper_entry(out, paper, detail == Some(index), language);
    }
}

fn paper_entry(out: &mut String, paper: &Paper, expanded: bool, language: Language) {
    let _ = writeln!(out, "{} [{}] {}", paper.year, paper.venue, paper.title);
    let _ = writeln!(
        out,
        "  {}: {}  {}: {}",
        strings::text(language, "research.status"),
        paper.status.label(language),
        strings::text(language, "research.authors"),
        paper.authors.join(", ")
    );
    if expanded {
        let _ = writeln!(out, "\n  // {}", strings::text(language, "research.archive"));
        let _ = writeln!(out, "  {}:\n  {}\n", strings::text(language, "research.abstract"), paper.summary);
        let _ = writeln!(out, "  {}: {}", strings::text(language, "research.keywords"), paper.tags.join(", "));
        if let Some(url) = paper.pdf_url {
            let _ = writeln!(out, "  {}: {url}", strings::text(language, "research.download"));
        }
        if let Some(url) = paper.source_url {
            let _ = writeln!(out, "  {}: {url}", strings::text(language, "research.view_source"));
        }
    }
    out.push('\n');
}

fn projects(out: &mut String, catalog: &Catalog, detail: Option<usize>, language: Language) {
    let _ = writeln!(
        out,
        "{}  {}\n",
        strings::text(language, "projects.title"),
        strings::text(language, "projects.subtitle")
    );
    for (index, project) in catalog.projects.iter().enumerate() {
        project_entry(out, project, detail == Some(index), language);
    }
}

fn project_entry(out: &mut String, project: &Project, expanded: bool, language: Language) {
    let _ = writeln!(out, "{} <{}>", project.title.get(language), project.status.label(language));
    let _ = writeln!(out, "  {}", project.description.get(language));
    let _ = writeln!(out, "  [{}]", project.tech.join("] ["));
    if expanded {
        if let Some(details) = project.details {
            let _ = writeln!(out, "\n  {}:\n  {}", strings::text(language, "projects.problem"), details.problem.get(language));
            let _ = writeln!(out, "\n  {}:\n  {}", strings::text(language, "projects.solution"), details.solution.get(language));
            let _ = writeln!(out, "\n  {}:", strings::text(language, "projects.capabilities"));
            for feature in details.features.get(language) {
                let _ = writeln!(out, "    - {feature}");
            }
        }
        if let Some(url) = project.repo_url {
            let _ = writeln!(out, "  {}: {url}", strings::text(language, "projects.view_repo"));
        }
        if let Some(url) = project.demo_url {
            let _ = writeln!(out, "  {}: {url}", strings::text(language, "projects.live_demo"));
        }
    }
    out.push('\n');
}

fn contact(out: &mut String, catalog: &Catalog, detail: Option<usize>, language: Language) {
    let _ = writeln!(
        out,
        "{}  {}\n",
        strings::text(language, "contact.title"),
        strings::text(language, "contact.subtitle")
    );
    let profile = &catalog.profile;
    let _ = writeln!(out, "{}", profile.name.get(language));
    if detail.is_some() {
        let _ = writeln!(out, "  {}: {}", strings::text(language, "contact.role"), profile.role.get(language));
        let _ = writeln!(out, "  {}: {}", strings::text(language, "contact.unit"), profile.unit.get(language));
    }
    let _ = writeln!(out, "\n{}", strings::text(language, "contact.frequencies"));
    for channel in catalog.contacts {
        contact_line(out, channel, language);
    }
}

fn contact_line(out: &mut String, channel: &ContactChannel, language: Language) {
    match channel.href {
        Some(href) => {
            let _ = writeln!(out, "  {:<16} {}  ({href})", channel.label.get(language), channel.value);
        }
        None => {
            let _ = writeln!(out, "  {:<16} {}", channel.label.get(language), channel.value);
        }
    }
}
