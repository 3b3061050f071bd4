use proptest::prelude::*;
use wiki_babel::formats::markdown::{convert_markdown, MarkdownOptions};

fn convert(source: &str) -> String {
    convert_markdown(source, &MarkdownOptions::default())
}

#[test]
fn test_internal_link_removes_spaces_only() {
    assert_eq!(convert("[[#My Title]]"), "[My Title](#MyTitle)");
    assert_eq!(convert("[[#FAQ: Part 2]]"), "[FAQ: Part 2](#FAQ:Part2)");
}

#[test]
fn test_internal_link_with_text() {
    assert_eq!(convert("[[#A|B]]"), "[B](#A)");
    assert_eq!(
        convert("[[#Install Steps|how to install]]"),
        "[how to install](#InstallSteps)"
    );
}

#[test]
fn test_document_links_keep_name_verbatim() {
    assert_eq!(convert("[[Some Doc|Click Here]]"), "[Click Here](Some Doc.md)");
    assert_eq!(convert("[[Some Doc]]"), "[Some Doc](Some Doc.md)");
}

#[test]
fn test_block_reference_is_treated_as_anchor() {
    assert_eq!(convert("[[#^abc]]"), "[^abc](#^abc)");
}

#[test]
fn test_image_extension_is_restored() {
    assert_eq!(convert("![[shot.png]]"), "![shot.png](shot.png)");
    assert_eq!(convert("![[a b.webp]]"), "![a b.webp](a b.webp)");
}

#[test]
fn test_uppercase_image_extension_keeps_md_suffix() {
    assert_eq!(convert("![[shot.PNG]]"), "![shot.PNG](shot.PNG.md)");
}

#[test]
fn test_svg_is_not_restored() {
    assert_eq!(convert("![[logo.svg]]"), "![logo.svg](logo.svg.md)");
}

#[test]
fn test_embedded_anchor_becomes_anchor_image() {
    assert_eq!(
        convert("![[#Section]]"),
        "![Section](#Section)"
    );
}

#[test]
fn test_mixed_line() {
    assert_eq!(
        convert("See [[#Setup]], [[Guide|the guide]] and ![[fig.jpg]]."),
        "See [Setup](#Setup), [the guide](Guide.md) and ![fig.jpg](fig.jpg)."
    );
}

proptest! {
    #[test]
    fn display_text_wins_over_title(
        title in "[A-Za-z][A-Za-z0-9 ]{0,15}",
        text in "[A-Za-z0-9][A-Za-z0-9 ]{0,15}",
    ) {
        let out = convert(&format!("[[#{title}|{text}]]"));
        prop_assert_eq!(out, format!("[{text}](#{})", title.replace(' ', "")));
    }
}
