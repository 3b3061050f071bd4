// wiki2md: turn wiki markup into static-site markdown with note cards.
//
// Usage:
//  wiki2md <input> [-o <output>] [--no-css]
//
// A file is written next to itself as <name>_converted.<ext> unless -o is
// given. A directory converts its top-level *.md files into <dir>/converted
// (or -o), skipping earlier *_converted* outputs.

use clap::{Arg, ArgAction};
use std::fs;
use std::path::Path;
use wiki_babel::{MarkdownFormat, MarkdownOptions};
use wiki_cli::Overrides;

fn main() {
    let matches = wiki_cli::base_command(
        "wiki2md",
        "Convert wiki markup and callouts to static-site markdown",
    )
    .arg(
        Arg::new("no-css")
            .long("no-css")
            .help("Do not prepend front matter and the note card stylesheet")
            .action(ArgAction::SetTrue),
    )
    .get_matches();

    let mut overrides = Overrides::new();
    if matches.get_flag("no-css") {
        overrides.push(("markdown.include_css", false.into()));
    }

    let config = wiki_cli::prepare(&matches, overrides);
    let mut options = MarkdownOptions::from(&config.markdown);

    // Only read when the header is written.
    let stylesheet = config
        .custom_css_path(wiki_cli::config_path(&matches).map(Path::new))
        .filter(|_| options.include_header);
    if let Some(path) = stylesheet {
        match fs::read_to_string(&path) {
            Ok(css) => options.stylesheet = Some(css),
            Err(err) => {
                eprintln!("Failed to read stylesheet '{}': {err}", path.display());
                std::process::exit(1);
            }
        }
    }

    let format = MarkdownFormat::new(options);
    wiki_cli::run(&format, &matches);
}
