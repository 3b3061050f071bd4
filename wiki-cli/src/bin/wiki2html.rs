// wiki2html: rewrite wiki links, anchors and image embeds for an HTML-facing
// static site.
//
// Usage:
//  wiki2html <input> [-o <output>] [--image-path P] [--file-path P]
//
// A file is rewritten in place unless -o is given. A directory is walked
// recursively and every *.md file is rewritten, mirrored under -o if given.

use clap::{Arg, ValueHint};
use wiki_babel::HtmlFormat;
use wiki_cli::Overrides;

fn main() {
    let matches = wiki_cli::base_command(
        "wiki2html",
        "Convert wiki markup to HTML-friendly markdown links and anchors",
    )
    .arg(
        Arg::new("image-path")
            .long("image-path")
            .value_name("PREFIX")
            .help("Prefix for embedded images (default: /images/)")
            .value_hint(ValueHint::Other),
    )
    .arg(
        Arg::new("file-path")
            .long("file-path")
            .value_name("PREFIX")
            .help("Prefix for links to other notes (default: /)")
            .value_hint(ValueHint::Other),
    )
    .get_matches();

    let mut overrides = Overrides::new();
    if let Some(prefix) = matches.get_one::<String>("image-path") {
        overrides.push(("html.image_path", prefix.clone().into()));
    }
    if let Some(prefix) = matches.get_one::<String>("file-path") {
        overrides.push(("html.file_path", prefix.clone().into()));
    }

    let config = wiki_cli::prepare(&matches, overrides);
    let format = HtmlFormat::new(config.html.into());
    wiki_cli::run(&format, &matches);
}
