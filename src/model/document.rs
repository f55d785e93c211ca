//! Document-level types.

use super::{Block, HeadingLevel};
use serde::{Deserialize, Serialize};

/// A parsed article: the renderable unit handed to the UI host.
///
/// Blocks appear in source line order. The table of contents is extracted
/// in a separate pass over the same source, so its ids match the heading
/// blocks' ids for the same heading text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Content blocks in source order
    pub blocks: Vec<Block>,

    /// Table of contents (one entry per heading)
    pub toc: Vec<TocEntry>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the heading blocks.
    pub fn headings(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_heading())
    }

    /// Find the first heading block carrying `id`.
    ///
    /// Ids are not unique; duplicate heading text yields duplicate ids.
    pub fn find_heading(&self, id: &str) -> Option<&Block> {
        self.headings().find(|b| b.heading_id() == Some(id))
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A single table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id of the heading
    pub id: String,

    /// Cleaned heading text
    pub text: String,

    /// Heading depth
    pub level: HeadingLevel,
}

impl TocEntry {
    /// Create a new TOC entry.
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }
}
