//! Fragment id normalization for heading anchors.
//!
//! Must produce the same id the site generator assigns to the heading, or the
//! link will not resolve.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert a heading title into a fragment id.
///
/// Lower-cases, turns whitespace runs into one hyphen, drops everything that is
/// not `a-z`, `0-9`, `-` or a CJK unified ideograph, collapses hyphen runs and
/// trims hyphens at both ends. Idempotent.
pub fn fragment_id(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let kept: String = hyphenated.chars().filter(|c| is_fragment_char(*c)).collect();
    let collapsed = HYPHEN_RUN.replace_all(&kept, "-");
    collapsed.trim_matches('-').to_string()
}

fn is_fragment_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || ('\u{4e00}'..='\u{9fff}').contains(&c)
}
