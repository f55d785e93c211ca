//! Rendering result with statistics.

use crate::model::{Block, Document, Span};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Article statistics
    pub stats: ArticleStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ArticleStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected from a parsed article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStats {
    /// Number of blocks
    pub block_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of blockquotes
    pub blockquote_count: u32,

    /// Number of links
    pub link_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Estimated reading time in whole minutes
    pub reading_time_minutes: u32,
}

impl ArticleStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn from_document(doc: &Document, words_per_minute: u32) -> Self {
        let mut stats = Self::new();

        for block in &doc.blocks {
            stats.block_count += 1;
            match block {
                Block::Heading { spans, .. } => {
                    stats.heading_count += 1;
                    stats.count_links(spans);
                }
                Block::Paragraph { spans } => {
                    stats.paragraph_count += 1;
                    stats.count_links(spans);
                }
                Block::UnorderedList { items } | Block::OrderedList { items } => {
                    stats.list_item_count += items.len() as u32;
                    for item in items {
                        stats.count_links(item);
                    }
                }
                Block::Blockquote { spans, .. } => {
                    stats.blockquote_count += 1;
                    stats.count_links(spans);
                }
                Block::Divider => {}
            }
        }

        stats.count_text(&doc.plain_text());
        stats.estimate_reading_time(words_per_minute);
        stats
    }

    fn count_links(&mut self, spans: &[Span]) {
        self.link_count += spans
            .iter()
            .filter(|s| matches!(s, Span::Link { .. }))
            .count() as u32;
    }

    /// Add word count from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Derive reading time from the word count, rounding up.
    ///
    /// Any non-empty article takes at least one minute.
    pub fn estimate_reading_time(&mut self, words_per_minute: u32) {
        let wpm = words_per_minute.max(1);
        self.reading_time_minutes = self.word_count.div_ceil(wpm);
    }
}
