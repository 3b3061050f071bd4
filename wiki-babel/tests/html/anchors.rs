use proptest::prelude::*;
use wiki_babel::formats::html::{convert_html, fragment_id, HtmlOptions};

fn convert(source: &str) -> String {
    convert_html(source, &HtmlOptions::default())
}

#[test]
fn test_anchor_without_text_uses_title() {
    assert_eq!(
        convert("[[#My Title]]"),
        r##"<a href="#my-title">My Title</a>"##
    );
}

#[test]
fn test_anchor_with_text_shows_text() {
    assert_eq!(
        convert("[[#Getting Started!|start here]]"),
        r##"<a href="#getting-started">start here</a>"##
    );
}

#[test]
fn test_cjk_anchor() {
    assert_eq!(
        convert("[[#安装 步骤]]"),
        r##"<a href="#安装-步骤">安装 步骤</a>"##
    );
}

#[test]
fn test_block_reference_keeps_literal_id() {
    assert_eq!(
        convert("[[#^Ab-12]]"),
        r##"<a href="#Ab-12">Ab-12</a>"##
    );
    assert_eq!(
        convert("[[#^Ab-12|that paragraph]]"),
        r##"<a href="#Ab-12">that paragraph</a>"##
    );
}

#[test]
fn test_multiple_anchors_on_one_line() {
    assert_eq!(
        convert("[[#One]], [[#Two|2]] and [[#^three]]"),
        r##"<a href="#one">One</a>, <a href="#two">2</a> and <a href="#three">three</a>"##
    );
}

#[test]
fn test_unclosed_brackets_are_left_alone() {
    assert_eq!(convert("[[#Open and text"), "[[#Open and text");
    assert_eq!(convert("[#Single]"), "[#Single]");
}

proptest! {
    #[test]
    fn fragment_id_is_idempotent(title in "[A-Za-z0-9 _.,:;!?'()\\-]{0,40}") {
        let once = fragment_id(&title);
        prop_assert_eq!(fragment_id(&once), once);
    }

    #[test]
    fn fragment_id_only_contains_allowed_characters(title in "\\PC{0,30}") {
        let id = fragment_id(&title);
        prop_assert!(id.chars().all(|c| c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c == '-'
            || ('\u{4e00}'..='\u{9fff}').contains(&c)),
            "fragment id {:?} contains a disallowed character", id);
        prop_assert!(!id.starts_with('-') && !id.ends_with('-'));
        prop_assert!(!id.contains("--"));
    }

    #[test]
    fn display_text_wins_over_title(
        title in "[A-Za-z][A-Za-z0-9 ]{0,15}",
        text in "[A-Za-z0-9][A-Za-z0-9 ]{0,15}",
    ) {
        let out = convert(&format!("[[#{title}|{text}]]"));
        prop_assert!(out.ends_with(&format!("\">{text}</a>")), "{}", out);
    }
}
