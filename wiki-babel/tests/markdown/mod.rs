//! Markdown target tests
//!
//! Tests for links, images, callout cards and the document header.

mod frontmatter;
mod kitchensink;
mod links;
