use crate::common::load_fixture;
use wiki_babel::format::Format;
use wiki_babel::formats::HtmlFormat;

#[test]
fn test_kitchensink_conversion() {
    let source = load_fixture("kitchensink.md");
    let expected = load_fixture("kitchensink.html.md");

    let output = HtmlFormat::default().convert(&source);

    assert_eq!(output, expected);
}

#[test]
fn test_kitchensink_leaves_callouts_untouched() {
    let source = load_fixture("kitchensink.md");
    let output = HtmlFormat::default().convert(&source);

    assert!(output.contains("> [!TIP] Remember\n> Run the tests.\n"));
    assert!(!output.contains("note-tip"));
}

#[test]
fn test_conversion_is_stable_on_its_own_output() {
    let format = HtmlFormat::default();
    let once = format.convert(&load_fixture("kitchensink.md"));
    assert_eq!(format.convert(&once), once);
}
