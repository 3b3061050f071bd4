//! HTML target
//!
//! Rewrites wiki markup into markdown that leans on inline HTML for in-page
//! anchors, for site generators that pass raw HTML through.
//!
//! # Rule Table
//!
//! Applied in this order, each as a full pass:
//!
//! | # | Rule                         | Source             | Output                                   |
//! |---|------------------------------|--------------------|------------------------------------------|
//! | 1 | internal-anchor-with-text    | `[[#TITLE\|TEXT]]` | `<a href="#fragment-id">TEXT</a>`        |
//! | 2 | internal-anchor              | `[[#TITLE]]`       | `<a href="#fragment-id">TITLE</a>`       |
//! | 3 | block-reference-with-text    | `[[#^ID\|TEXT]]`   | `<a href="#ID">TEXT</a>`                 |
//! | 4 | block-reference              | `[[#^ID]]`         | `<a href="#ID">ID</a>`                   |
//! | 5 | image-embed                  | `![[NAME.png]]`    | `![NAME](IMAGE_BASE NAME.png)`           |
//! | 6 | file-link-with-text          | `[[NAME\|TEXT]]`   | `[TEXT](FILE_BASE name-slug/)`           |
//! | 7 | file-link                    | `[[NAME]]`         | `[NAME](FILE_BASE name-slug/)`           |
//!
//! Anchor titles never start with `^`, so block references are left for rules 3-4.
//! Image extensions are png, jpg, jpeg, gif, svg and webp, matched case-insensitively.

pub mod anchor;

use crate::format::Format;
use crate::rules::{RewriteRule, RuleTable};
use once_cell::sync::Lazy;
use regex::Captures;

pub use anchor::fragment_id;

pub const DEFAULT_IMAGE_BASE_PATH: &str = "/images/";
pub const DEFAULT_FILE_BASE_PATH: &str = "/";

/// Path prefixes used when building link targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Prepended to image names, e.g. `/images/`
    pub image_base_path: String,
    /// Prepended to file link slugs, e.g. `/`
    pub file_base_path: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            image_base_path: DEFAULT_IMAGE_BASE_PATH.to_string(),
            file_base_path: DEFAULT_FILE_BASE_PATH.to_string(),
        }
    }
}

static HTML_RULES: Lazy<RuleTable<HtmlOptions>> = Lazy::new(|| {
    RuleTable::new(vec![
        RewriteRule::new(
            "internal-anchor-with-text",
            r"\[\[#([^\^|\]][^|\]]*?)\|([^\]]+?)\]\]",
            |caps, _| anchor_link(&fragment_id(&caps[1]), &caps[2]),
        ),
        RewriteRule::new(
            "internal-anchor",
            r"\[\[#([^\^\]][^\]]*?)\]\]",
            |caps, _| anchor_link(&fragment_id(&caps[1]), &caps[1]),
        ),
        RewriteRule::new(
            "block-reference-with-text",
            r"\[\[#\^([^|\]]+?)\|([^\]]+?)\]\]",
            |caps, _| anchor_link(&caps[1], &caps[2]),
        ),
        RewriteRule::new(
            "block-reference",
            r"\[\[#\^([^\]]+?)\]\]",
            |caps, _| anchor_link(&caps[1], &caps[1]),
        ),
        RewriteRule::new(
            "image-embed",
            r"(?i)!\[\[([^\]]+?)\.(png|jpg|jpeg|gif|svg|webp)\]\]",
            rewrite_image,
        ),
        RewriteRule::new(
            "file-link-with-text",
            r"\[\[([^#\^|\]]+?)\|([^\]]+?)\]\]",
            |caps, options| file_link(&caps[2], &caps[1], options),
        ),
        RewriteRule::new(
            "file-link",
            r"\[\[([^#\^|\]]+?)\]\]",
            |caps, options| file_link(&caps[1], &caps[1], options),
        ),
    ])
});

/// The ordered rule table for this target.
pub fn rules() -> &'static RuleTable<HtmlOptions> {
    &HTML_RULES
}

/// Run every HTML-target pass over `source`.
pub fn convert_html(source: &str, options: &HtmlOptions) -> String {
    HTML_RULES.apply(source, options)
}

fn anchor_link(fragment: &str, text: &str) -> String {
    format!(r##"<a href="#{fragment}">{text}</a>"##)
}

fn rewrite_image(caps: &Captures<'_>, options: &HtmlOptions) -> String {
    let stem = &caps[1];
    let extension = &caps[2];
    format!(
        "![{stem}]({}{stem}.{extension})",
        options.image_base_path
    )
}

fn file_link(text: &str, filename: &str, options: &HtmlOptions) -> String {
    format!(
        "[{text}]({}{}/)",
        options.file_base_path,
        file_slug(filename)
    )
}

/// URL form of a file name: spaces become hyphens, then lower-cased.
pub fn file_slug(filename: &str) -> String {
    filename.replace(' ', "-").to_lowercase()
}

/// Format implementation for the HTML target
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    pub options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlFormat { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Markdown with HTML anchors for site generators"
    }

    fn convert(&self, source: &str) -> String {
        convert_html(source, &self.options)
    }
}
