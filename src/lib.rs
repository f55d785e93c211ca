//! # readmark
//!
//! Long-form article parsing and reader navigation for Rust.
//!
//! This library turns a restricted markdown dialect into renderable blocks
//! with a table of contents, and keeps a reader's scroll position in sync
//! with that table of contents.
//!
//! ## Quick Start
//!
//! ```
//! use readmark::{parse_str, render};
//!
//! fn main() -> readmark::Result<()> {
//!     let doc = parse_str("## Intro\n\nHello **reader**.");
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     assert!(html.starts_with("<h2 id=\"intro\">"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Article dialect**: `##`/`###` headings, paragraphs, lists, quotes,
//!   dividers, bold and links
//! - **Stable anchors**: heading ids shared by blocks and the TOC
//! - **Scroll sync**: reading progress and active heading tracking
//! - **Multiple output formats**: HTML, plain text, JSON

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod scroll;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, Document, HeadingLevel, Span, TocEntry};
pub use parser::{assemble, extract_toc, resolve_inline, slug, tokenize};
pub use render::{ArticleStats, JsonFormat, RenderOptions, RenderResult};
pub use scroll::{reading_progress, ScrollMetrics, ScrollState, ScrollSync, ViewportBand};

use std::path::Path;

/// Parse article source held in memory.
///
/// Parsing is total: every input produces a document.
///
/// # Example
///
/// ```
/// use readmark::parse_str;
///
/// let doc = parse_str("## Setup\n\nInstall it.");
/// assert_eq!(doc.toc[0].id, "setup");
/// ```
pub fn parse_str(content: &str) -> Document {
    assemble(content)
}

/// Parse an article file.
///
/// The file must be UTF-8.
///
/// # Example
///
/// ```no_run
/// use readmark::parse_file;
///
/// let doc = parse_file("article.md").unwrap();
/// println!("Headings: {}", doc.toc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(assemble(&content))
}

/// Convert an article file to HTML.
///
/// # Example
///
/// ```no_run
/// use readmark::{to_html, RenderOptions};
///
/// let html = to_html("article.md", &RenderOptions::new().with_toc(true)).unwrap();
/// std::fs::write("article.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Convert an article file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc)
}

/// Convert an article file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and rendering articles.
///
/// # Example
///
/// ```
/// use readmark::Readmark;
///
/// let html = Readmark::new()
///     .with_toc()
///     .internal_links()
///     .parse_str("## One\n\n[home](/)")
///     .to_html()?;
/// assert!(html.contains("<nav class=\"toc\">"));
/// # Ok::<(), readmark::Error>(())
/// ```
pub struct Readmark {
    render_options: RenderOptions,
}

impl Readmark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Prefix HTML output with a table of contents.
    pub fn with_toc(mut self) -> Self {
        self.render_options = self.render_options.with_toc(true);
        self
    }

    /// Set the table of contents title.
    pub fn with_toc_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_toc_title(title);
        self
    }

    /// Render links without opening a new browsing context.
    pub fn internal_links(mut self) -> Self {
        self.render_options = self.render_options.with_external_links(false);
        self
    }

    /// Set the reading speed for reading time estimates.
    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.render_options = self.render_options.with_words_per_minute(wpm);
        self
    }

    /// Parse an article file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ReadmarkResult> {
        let document = parse_file(path)?;
        Ok(ReadmarkResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse article source held in memory.
    pub fn parse_str(self, content: &str) -> ReadmarkResult {
        ReadmarkResult {
            document: assemble(content),
            render_options: self.render_options,
        }
    }
}

impl Default for Readmark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an article.
pub struct ReadmarkResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ReadmarkResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML with article statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Collect article statistics.
    pub fn stats(&self) -> ArticleStats {
        ArticleStats::from_document(&self.document, self.render_options.words_per_minute)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readmark_builder() {
        let builder = Readmark::new()
            .with_toc()
            .with_toc_title("Contents")
            .internal_links()
            .with_words_per_minute(100);

        assert!(builder.render_options.include_toc);
        assert_eq!(builder.render_options.toc_title, "Contents");
        assert!(!builder.render_options.external_links);
        assert_eq!(builder.render_options.words_per_minute, 100);
    }

    #[test]
    fn test_readmark_builder_default() {
        let builder = Readmark::default();
        assert!(!builder.render_options.include_toc);
        assert!(builder.render_options.external_links);
    }

    #[test]
    fn test_parse_str_matches_assemble() {
        let source = "## A\n\ntext\n\n### B";
        assert_eq!(parse_str(source), assemble(source));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/readmark/article.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_result_stats_use_reading_speed() {
        let words = vec!["word"; 150].join(" ");
        let result = Readmark::new().with_words_per_minute(100).parse_str(&words);
        let stats = result.stats();
        assert_eq!(stats.word_count, 150);
        assert_eq!(stats.reading_time_minutes, 2);
    }

    #[test]
    fn test_result_outputs() {
        let result = Readmark::new().parse_str("## Hi\n\nthere");
        assert_eq!(result.to_text().unwrap(), "Hi\n\nthere");
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"toc\""));
        assert_eq!(result.document().blocks.len(), 2);
    }
}
