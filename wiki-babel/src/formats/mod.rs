//! Format implementations
//!
//! This module contains the two conversion targets for wiki markup.

pub mod html;
pub mod icons;
pub mod markdown;

pub use html::{HtmlFormat, HtmlOptions};
pub use markdown::{MarkdownFormat, MarkdownOptions};
