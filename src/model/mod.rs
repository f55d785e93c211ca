//! Document model types for parsed articles.
//!
//! This module defines the structured representation that bridges the
//! markdown parser and whatever host renders the article. The model is
//! plain data: it owns no parser state and carries no rendering decisions.

mod block;
mod document;
mod span;

pub use block::{Block, HeadingLevel};
pub use document::{Document, TocEntry};
pub use span::{spans_plain_text, Span};
