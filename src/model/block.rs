//! Block-level types.

use super::span::{spans_plain_text, Span};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Heading depth supported by the article dialect (`##` and `###`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    /// Section heading (`## `)
    H2,
    /// Subsection heading (`### `)
    H3,
}

impl HeadingLevel {
    /// Numeric level (2 or 3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(Error::InvalidHeadingLevel(other)),
        }
    }
}

/// One structural unit of a parsed article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A `##` or `###` heading
    Heading {
        /// Heading depth
        level: HeadingLevel,
        /// Cleaned heading text (emphasis markers removed)
        text: String,
        /// Anchor identifier derived from `text`
        id: String,
        /// Inline-resolved display text, emphasis retained
        spans: Vec<Span>,
    },

    /// A run of soft-wrapped lines
    Paragraph {
        /// Inline content
        spans: Vec<Span>,
    },

    /// A run of `- ` / `* ` lines
    UnorderedList {
        /// One span sequence per item
        items: Vec<Vec<Span>>,
    },

    /// A run of `N. ` lines
    OrderedList {
        /// One span sequence per item
        items: Vec<Vec<Span>>,
    },

    /// A run of `> ` lines joined into one quote
    Blockquote {
        /// Joined quote text
        text: String,
        /// Inline-resolved quote text
        spans: Vec<Span>,
    },

    /// A horizontal divider (`---`)
    Divider,
}

impl Block {
    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { spans } => spans_plain_text(spans),
            Block::UnorderedList { items } | Block::OrderedList { items } => items
                .iter()
                .map(|item| spans_plain_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Blockquote { spans, .. } => spans_plain_text(spans),
            Block::Divider => String::new(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Get the heading anchor id, if this is a heading.
    pub fn heading_id(&self) -> Option<&str> {
        match self {
            Block::Heading { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Number of list items, or 0 for non-list blocks.
    pub fn list_len(&self) -> usize {
        match self {
            Block::UnorderedList { items } | Block::OrderedList { items } => items.len(),
            _ => 0,
        }
    }
}
