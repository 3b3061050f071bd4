//! Callout card parser
//!
//! Line scanner that turns block-quote callouts
//!
//! ```text
//! > [!WARNING] Careful
//! > Line one.
//! > Line two.
//! ```
//!
//! into a note card fragment. The scanner has two resting states, Scanning and
//! InCallout. The exit from InCallout happens on the first line that does not
//! start with `>`: the card is flushed and that same line is handed straight to
//! the Scanning step, so it is emitted after the card without rewinding. End of
//! input while InCallout flushes the card as well.

use crate::formats::icons::CalloutKind;
use once_cell::sync::Lazy;
use regex::Regex;

static CALLOUT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>\s*\[!([A-Z]+)\]\s*(.*)").unwrap());

static IMAGE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").unwrap());

/// Rendering knobs for callout cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalloutOptions {
    /// Render content lines that are a lone `![alt](url)` as `<img>` instead of `<p>`.
    pub inline_images: bool,
}

/// A callout being collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutCard {
    pub kind: CalloutKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl CalloutCard {
    /// Open a card if `line` is a callout marker.
    pub fn open(line: &str) -> Option<Self> {
        let caps = CALLOUT_MARKER.captures(line)?;
        let tag = &caps[1];
        let title = caps[2].trim();
        let title = if title.is_empty() {
            capitalize(tag)
        } else {
            title.to_string()
        };
        Some(CalloutCard {
            kind: CalloutKind::from_tag(tag),
            title,
            lines: Vec::new(),
        })
    }

    /// Add a continuation line with its leading `>` already removed. Blank lines are dropped.
    pub fn push_line(&mut self, rest: &str) {
        let content = rest.trim();
        if !content.is_empty() {
            self.lines.push(content.to_string());
        }
    }

    pub fn render(&self, options: &CalloutOptions) -> String {
        let content = self
            .lines
            .iter()
            .map(|line| render_line(line, options))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<div class=\"note note-{class}\">\n  <div class=\"note-title\">\n    <span class=\"note-icon\">{icon}</span>\n    <span class=\"note-text\">{title}</span>\n  </div>\n  <div class=\"note-content\">\n{content}\n  </div>\n</div>",
            class = self.kind.css_class(),
            icon = self.kind.icon(),
            title = self.title,
        )
    }
}

fn render_line(line: &str, options: &CalloutOptions) -> String {
    if options.inline_images {
        if let Some(caps) = IMAGE_LINE.captures(line) {
            return format!(
                "  <img src=\"{}\" alt=\"{}\" style=\"max-width: 100%; height: auto; border-radius: 4px; margin: 0.5em 0;\" />",
                &caps[2], &caps[1]
            );
        }
    }
    format!("  <p>{line}</p>")
}

/// `WARNING` -> `Warning`
fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

enum ScanState {
    Scanning,
    InCallout(CalloutCard),
}

/// Replace every callout block in `source` with its rendered card.
///
/// Lines are split on `\n` and re-joined with `\n`, so everything outside a
/// callout comes back byte for byte.
pub fn convert_callouts(source: &str, options: &CalloutOptions) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut state = ScanState::Scanning;

    for line in source.split('\n') {
        state = match state {
            ScanState::InCallout(mut card) if line.starts_with('>') => {
                card.push_line(&line[1..]);
                ScanState::InCallout(card)
            }
            ScanState::InCallout(card) => {
                output.push(card.render(options));
                scan_line(line, &mut output)
            }
            ScanState::Scanning => scan_line(line, &mut output),
        };
    }

    if let ScanState::InCallout(card) = state {
        output.push(card.render(options));
    }

    output.join("\n")
}

fn scan_line(line: &str, output: &mut Vec<String>) -> ScanState {
    match CalloutCard::open(line) {
        Some(card) => ScanState::InCallout(card),
        None => {
            output.push(line.to_string());
            ScanState::Scanning
        }
    }
}
