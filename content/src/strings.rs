//! UI string table: `(key, english, chinese)` rows looked up by language.
//!
//! Keys are dotted, section first (`research.abstract`, `sort.status.active`).

#[cfg(test)]
#[path = "strings_test.rs"]
mod strings_test;

use crate::language::Language;

const TABLE: &[(&str, &str, &str)] = &[
    // ── Shell ───────────────────────────────────────────────────
    ("shell.section", "SECTION //", "SECTION //"),
    ("shell.tagline", "Beijing Normal University / Senior Undergraduate / Algorithms & LLMs", "北京师范大学 本科四年级 / 算法与大模型"),
    // ── Overview ────────────────────────────────────────────────
    ("overview.read_papers", "Read Papers", "阅读论文"),
    ("overview.contact_me", "Contact Me", "联系我"),
    ("overview.available", "Endless progress", "无限进步..."),
    ("overview.toolkit", "TOOLKIT", "技术栈 TOOLKIT"),
    ("overview.kernel_log", "Kernel_Log", "内核日志 Kernel_Log"),
    // ── Research ────────────────────────────────────────────────
    ("research.title", "Research Log", "研究日志"),
    ("research.subtitle", "/// PUBLICATIONS", "/// 发表论文 PUBLICATIONS"),
    ("research.archive", "ARCHIVE_COPY", "ARCHIVE_COPY"),
    ("research.abstract", "Abstract", "摘要"),
    ("research.keywords", "Keywords", "关键词"),
    ("research.download", "Download PDF", "下载 PDF"),
    ("research.view_source", "View Source", "查看源"),
    ("research.status", "STATUS", "状态"),
    ("research.authors", "AUTHORS", "作者"),
    // ── Projects ────────────────────────────────────────────────
    ("projects.title", "Project Deck", "项目展示"),
    ("projects.subtitle", "/// CODE & DEMO", "/// 代码与演示 CODE & DEMO"),
    ("projects.problem", "Problem Space", "问题空间"),
    ("projects.solution", "Engineered Solution", "工程方案"),
    ("projects.capabilities", "System Capabilities", "系统能力"),
    ("projects.view_repo", "View Repository", "查看仓库"),
    ("projects.live_demo", "Live Demo", "在线演示"),
    // ── Contact ─────────────────────────────────────────────────
    ("contact.title", "Comms Uplink", "联络方式"),
    ("contact.subtitle", "/// Contact Me", "/// 联系我 Contact Me"),
    ("contact.frequencies", "Available Frequencies", "可用频率"),
    ("contact.role", "ROLE", "角色"),
    ("contact.unit", "UNIT", "单位"),
    // ── Sort widget ─────────────────────────────────────────────
    ("sort.title", "Bubble_Sort", "Bubble_Sort"),
    ("sort.subtitle", "Visualization Module", "Visualization Module"),
    ("sort.widget_id", "WIDGET_ID: SORT_01", "WIDGET_ID: SORT_01"),
    ("sort.idle", "IDLE", "IDLE"),
    ("sort.status", "STATUS", "STATUS"),
    ("sort.status.active", "ACTIVE", "ACTIVE"),
    ("sort.status.ready", "READY", "READY"),
    ("sort.status.done", "DONE", "DONE"),
    ("sort.halt", "Halt", "Halt"),
];

/// Translated string for `key`, if the key exists.
#[must_use]
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    TABLE.iter().find(|(k, _, _)| *k == key).map(|&(_, en, zh)| match language {
        Language::En => en,
        Language::Zh => zh,
    })
}

/// Translated string for `key`, or the key itself when missing.
#[must_use]
pub fn text<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key).unwrap_or(key)
}

/// All known keys, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(key, _, _)| *key)
}
