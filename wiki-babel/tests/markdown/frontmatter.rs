use crate::common::write_file;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use wiki_babel::format::Format;
use wiki_babel::formats::markdown::frontmatter::{DocumentHeader, NOTE_CARD_CSS};
use wiki_babel::formats::{MarkdownFormat, MarkdownOptions};
use wiki_babel::publish::{publish, PublishSpec};

#[test]
fn test_header_fields() {
    let output = MarkdownFormat::default().finalize("Body".to_string(), Path::new("dir/weekly_review.md"));

    let date = Regex::new(r"(?m)^date: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(output.starts_with("---\ntitle: weekly review\ndate: "));
    assert!(date.is_match(&output));
    assert!(output.contains("\ntags: []\ncategories: []\n---\n\n<style>\n"));
    assert!(output.contains(".note-content p"));
    assert!(output.ends_with("</style>\n\nBody"));
}

#[test]
fn test_header_uses_builtin_stylesheet() {
    let header = DocumentHeader {
        title: "t".to_string(),
        date: "2024-01-01 00:00:00".to_string(),
    };
    let output = header.wrap(NOTE_CARD_CSS, "");
    assert!(output.contains("@import url('https://fonts.googleapis.com"));
    assert!(output.contains("@keyframes glitch"));
}

#[test]
fn test_no_css_skips_header_entirely() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.md");
    write_file(&input, "[[#Top]]");

    let format = MarkdownFormat::new(MarkdownOptions {
        include_header: false,
        ..MarkdownOptions::default()
    });
    let result = publish(PublishSpec::new(&format, &input));

    assert!(result.is_success());
    assert_eq!(fs::read_to_string(result.destination).unwrap(), "[Top](#Top)");
}

#[test]
fn test_source_properties_block_does_not_suppress_header() {
    let body = "---\ntitle: kept\n---\n\ntext".to_string();
    let output = MarkdownFormat::default().finalize(body.clone(), Path::new("a.md"));

    assert!(output.starts_with("---\ntitle: a\ndate: "));
    assert!(output.contains("<style>\n"));
    assert!(output.ends_with(&format!("</style>\n\n{body}")));
}

#[test]
fn test_leading_horizontal_rule_does_not_suppress_header() {
    let body = "---\n# Intro\ntext\n---\nmore".to_string();
    let output = MarkdownFormat::default().finalize(body.clone(), Path::new("intro.md"));

    assert!(output.starts_with("---\ntitle: intro\n"));
    assert_eq!(output.matches("<style>").count(), 1);
    assert!(output.ends_with(&body));
}
