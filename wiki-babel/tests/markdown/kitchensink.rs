use crate::common::load_fixture;
use wiki_babel::format::Format;
use wiki_babel::formats::MarkdownFormat;

#[test]
fn test_kitchensink_conversion() {
    let source = load_fixture("kitchensink.md");
    let expected = load_fixture("kitchensink.markdown.md");

    let output = MarkdownFormat::default().convert(&source);

    assert_eq!(output, expected);
}

#[test]
fn test_convert_never_adds_header() {
    let output = MarkdownFormat::default().convert(&load_fixture("kitchensink.md"));
    assert!(!output.starts_with("---"));
    assert!(!output.contains("<style>"));
}

#[test]
fn test_rerunning_passes_does_not_double_wrap() {
    let format = MarkdownFormat::default();
    let once = format.convert(&load_fixture("kitchensink.md"));
    let twice = format.convert(&once);

    assert_eq!(twice, once);
    assert_eq!(twice.matches("<div class=\"note ").count(), 2);
}
