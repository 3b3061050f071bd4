//! Personal-wiki markup conversion
//!
//!     This crate rewrites documents written in a personal-wiki dialect (double-bracket links,
//!     block references, callout cards, image embeds) into two target dialects:
//!
//!     - html:     browser-ready markdown with HTML anchors, for site generators that pass
//!                 inline HTML through untouched.
//!     - markdown: plain static-site markdown with callouts rendered as note cards and an
//!                 optional front matter + stylesheet header.
//!
//!     This is a pure lib, that is, it powers the wiki-cli binaries but is shell agnostic: no code
//!     here prints to std streams or reads env vars. Progress is reported through return values
//!     and `tracing` events.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── rules.rs                # Ordered rewrite rule tables
//!     ├── formats
//!     │   ├── icons.rs            # Callout kinds, style classes and icons
//!     │   ├── html                # HTML target: anchors, block refs, embeds, file links
//!     │   └── markdown            # Markdown target: links, images, callouts, front matter
//!     ├── publish.rs              # File driver
//!     └── batch.rs                # Directory driver
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Pass Ordering
//!
//!     Every target is a fixed sequence of whole-buffer substitution passes. The "with display text"
//!     variant of a bracket class always runs before its bare sibling: the bare pattern is a textual
//!     superset and would otherwise swallow the `|TEXT` part into the captured target. The tables in
//!     each format module are the single source of truth for that order.
//!
//! Target Asymmetries
//!
//!     The two targets disagree in a few observable places, and both behaviours are kept:
//!
//!     - Anchors: html lower-cases and slugifies (`#my-title`), markdown only drops spaces (`#MyTitle`).
//!     - File links: html lower-cases and hyphenates the file name, markdown keeps it verbatim.
//!     - Batches: html walks the directory tree, markdown only looks at the top level.
//!
pub mod batch;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod rules;

pub use batch::{convert_directory, BatchReport};
pub use error::ConvertError;
pub use format::Format;
pub use formats::{HtmlFormat, HtmlOptions, MarkdownFormat, MarkdownOptions};
pub use publish::{publish, publish_path, ConversionResult, Outcome, PublishSpec};
