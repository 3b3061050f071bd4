//! Document header for static-site output: YAML front matter plus the note card stylesheet.

use chrono::{Local, NaiveDateTime};
use std::path::Path;

/// Built-in stylesheet for rendered callout cards.
pub const NOTE_CARD_CSS: &str = include_str!("../../../css/note-cards.css");

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub title: String,
    /// Already formatted as `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

impl DocumentHeader {
    /// Header for `source_path`, stamped with the current local time.
    pub fn for_path(source_path: &Path) -> Self {
        Self::at(source_path, Local::now().naive_local())
    }

    pub fn at(source_path: &Path, timestamp: NaiveDateTime) -> Self {
        DocumentHeader {
            title: title_from_path(source_path),
            date: timestamp.format(DATE_FORMAT).to_string(),
        }
    }

    /// Front matter, a blank line, the `<style>` block, a blank line, then `body`.
    pub fn wrap(&self, stylesheet: &str, body: &str) -> String {
        let stylesheet = stylesheet.trim_end();
        format!(
            "---\ntitle: {}\ndate: {}\ntags: []\ncategories: []\n---\n\n<style>\n{stylesheet}\n</style>\n\n{body}",
            self.title, self.date
        )
    }
}

/// File stem with underscores turned into spaces.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}
