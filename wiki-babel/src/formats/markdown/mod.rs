//! Markdown target
//!
//! Rewrites wiki markup into plain static-site markdown, renders callouts as note
//! cards, and optionally wraps the result in front matter and a stylesheet.
//!
//! # Rule Table
//!
//! | # | Rule                      | Source               | Output                  |
//! |---|---------------------------|----------------------|-------------------------|
//! | 1 | internal-link-with-text   | `[[#TITLE\|TEXT]]`   | `[TEXT](#TITLEWITHOUTSPACES)` |
//! | 2 | internal-link             | `[[#TITLE]]`         | `[TITLE](#TITLEWITHOUTSPACES)` |
//! | 3 | document-link-with-text   | `[[DOC\|TEXT]]`      | `[TEXT](DOC.md)`        |
//! | 4 | document-link             | `[[DOC]]`            | `[DOC](DOC.md)`         |
//! | 5 | image                     | `![[NAME]]`          | `![NAME](NAME)`         |
//! | 6 | image-extension-cleanup   | `.png.md)`           | `.png)`                 |
//!
//! Anchors here only drop spaces; case and punctuation are kept. Document links
//! keep the name verbatim.
//!
//! Rule 4 runs before rule 5, so `![[pic.png]]` is first caught as a document
//! link (`![pic.png](pic.png.md)`) and rule 6 strips the stray `.md` again for
//! png, jpg, jpeg, gif and webp.
//!
//! After the rule table the callout scanner ([`callout`]) runs over the result.

pub mod callout;
pub mod frontmatter;

use crate::format::Format;
use crate::rules::{RewriteRule, RuleTable};
use callout::{convert_callouts, CalloutOptions};
use frontmatter::{DocumentHeader, NOTE_CARD_CSS};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

/// Inserted between the file stem and extension for single-file output.
pub const CONVERTED_SUFFIX: &str = "_converted";
/// Subdirectory created for directory output.
pub const CONVERTED_DIR: &str = "converted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Prepend front matter and the stylesheet when writing files.
    pub include_header: bool,
    /// Render lone image lines inside callouts as `<img>`.
    pub callout_images: bool,
    /// Replaces the built-in note card stylesheet.
    pub stylesheet: Option<String>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            include_header: true,
            callout_images: false,
            stylesheet: None,
        }
    }
}

static MARKDOWN_RULES: Lazy<RuleTable<()>> = Lazy::new(|| {
    RuleTable::new(vec![
        RewriteRule::new(
            "internal-link-with-text",
            r"\[\[#([^|\]]+)\|([^\]]+)\]\]",
            |caps, _| format!("[{}](#{})", &caps[2], anchor(&caps[1])),
        ),
        RewriteRule::new(
            "internal-link",
            r"\[\[#([^\]]+)\]\]",
            |caps, _| format!("[{}](#{})", &caps[1], anchor(&caps[1])),
        ),
        RewriteRule::new(
            "document-link-with-text",
            r"\[\[([^#|\]]+)\|([^\]]+)\]\]",
            |caps, _| format!("[{}]({}.md)", &caps[2], &caps[1]),
        ),
        RewriteRule::new(
            "document-link",
            r"\[\[([^#\]]+)\]\]",
            |caps, _| format!("[{}]({}.md)", &caps[1], &caps[1]),
        ),
        RewriteRule::new("image", r"!\[\[([^\]]+)\]\]", |caps, _| {
            format!("![{}]({})", &caps[1], &caps[1])
        }),
        RewriteRule::new(
            "image-extension-cleanup",
            r"\.(png|jpg|jpeg|gif|webp)\.md\)",
            |caps, _| format!(".{})", &caps[1]),
        ),
    ])
});

/// The ordered rule table for this target.
pub fn rules() -> &'static RuleTable<()> {
    &MARKDOWN_RULES
}

/// In-document anchor: the title with spaces removed.
pub fn anchor(title: &str) -> String {
    title.replace(' ', "")
}

/// Run the link/image passes and then the callout scanner. Never adds a header.
pub fn convert_markdown(source: &str, options: &MarkdownOptions) -> String {
    let linked = MARKDOWN_RULES.apply(source, &());
    let callouts = CalloutOptions {
        inline_images: options.callout_images,
    };
    convert_callouts(&linked, &callouts)
}

/// Format implementation for the markdown target
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    pub options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        MarkdownFormat { options }
    }

    fn stylesheet(&self) -> &str {
        self.options.stylesheet.as_deref().unwrap_or(NOTE_CARD_CSS)
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Static-site markdown with note cards and front matter"
    }

    fn convert(&self, source: &str) -> String {
        convert_markdown(source, &self.options)
    }

    fn finalize(&self, body: String, source_path: &Path) -> String {
        if !self.options.include_header {
            return body;
        }
        DocumentHeader::for_path(source_path).wrap(self.stylesheet(), &body)
    }

    fn default_output(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match input.extension() {
            Some(ext) => format!("{stem}{CONVERTED_SUFFIX}.{}", ext.to_string_lossy()),
            None => format!("{stem}{CONVERTED_SUFFIX}"),
        };
        input.with_file_name(name)
    }

    fn default_output_dir(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(CONVERTED_DIR)
    }

    fn recursive(&self) -> bool {
        false
    }

    fn skip_in_batch(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().contains(CONVERTED_SUFFIX))
    }
}
