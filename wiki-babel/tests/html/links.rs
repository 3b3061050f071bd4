use wiki_babel::formats::html::{convert_html, HtmlOptions};

fn convert(source: &str) -> String {
    convert_html(source, &HtmlOptions::default())
}

#[test]
fn test_image_embed_with_default_path() {
    assert_eq!(convert("![[diagram.PNG]]"), "![diagram](/images/diagram.PNG)");
}

#[test]
fn test_image_embed_all_extensions() {
    for ext in ["png", "jpg", "jpeg", "gif", "svg", "webp", "WebP"] {
        assert_eq!(
            convert(&format!("![[pic.{ext}]]")),
            format!("![pic](/images/pic.{ext})")
        );
    }
}

#[test]
fn test_image_embed_keeps_subdirectories_and_inner_dots() {
    assert_eq!(
        convert("![[assets/v1.2 shot.jpeg]]"),
        "![assets/v1.2 shot](/images/assets/v1.2 shot.jpeg)"
    );
}

#[test]
fn test_non_image_embed_falls_through_to_file_link() {
    assert_eq!(convert("![[Paper.pdf]]"), "![Paper.pdf](/paper.pdf/)");
}

#[test]
fn test_file_link_slug() {
    assert_eq!(convert("[[My Note]]"), "[My Note](/my-note/)");
}

#[test]
fn test_file_link_with_text() {
    assert_eq!(
        convert("[[Release Plan|the plan]]"),
        "[the plan](/release-plan/)"
    );
}

#[test]
fn test_custom_base_paths() {
    let options = HtmlOptions {
        image_base_path: "https://cdn.example.com/img/".to_string(),
        file_base_path: "/wiki/".to_string(),
    };
    assert_eq!(
        convert_html("![[a.gif]] [[Some Page|page]]", &options),
        "![a](https://cdn.example.com/img/a.gif) [page](/wiki/some-page/)"
    );
}

#[test]
fn test_empty_base_paths() {
    let options = HtmlOptions {
        image_base_path: String::new(),
        file_base_path: String::new(),
    };
    assert_eq!(convert_html("![[a.png]] [[B]]", &options), "![a](a.png) [B](b/)");
}

#[test]
fn test_text_without_wiki_syntax_is_unchanged() {
    let source = "Regular [markdown](link.md) and ![img](x.png)\n";
    assert_eq!(convert(source), source);
}
