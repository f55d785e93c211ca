//! HTML rendering for parsed articles.
//!
//! This is the reference host rendering: every heading carries its anchor
//! id, links open in a new browsing context, and all text is escaped.

use crate::error::Result;
use crate::model::{Block, Document, HeadingLevel, Span, TocEntry};
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::visitor::{DefaultVisitor, DocumentVisitor, VisitorAction};
use super::{ArticleStats, RenderOptions, RenderResult};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with article statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    visitor: Box<dyn DocumentVisitor>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: Box::new(DefaultVisitor),
        }
    }

    /// Use a visitor to customize block output.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to HTML with article statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc);
        let stats = ArticleStats::from_document(doc, self.options.words_per_minute);
        Ok(RenderResult::new(content, stats))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = String::new();

        if self.options.include_toc && !doc.toc.is_empty() {
            self.render_toc(&mut output, &doc.toc);
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        output
    }

    fn render_toc(&self, output: &mut String, toc: &[TocEntry]) {
        output.push_str("<nav class=\"toc\">\n");
        output.push_str("<p class=\"toc-title\">");
        output.push_str(&encode_text(&self.options.toc_title));
        output.push_str("</p>\n<ul>\n");
        for entry in toc {
            output.push_str(&format!(
                "<li class=\"toc-h{}\"><a href=\"#{}\">{}</a></li>\n",
                entry.level.as_u8(),
                encode_double_quoted_attribute(&entry.id),
                encode_text(&entry.text)
            ));
        }
        output.push_str("</ul>\n</nav>\n");
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        let action = match block {
            Block::Heading {
                level, text, id, ..
            } => self.visitor.visit_heading(text, id, *level),
            Block::Paragraph { spans } => self.visitor.visit_paragraph(spans),
            Block::UnorderedList { items } => self.visitor.visit_list(items, false),
            Block::OrderedList { items } => self.visitor.visit_list(items, true),
            Block::Blockquote { text, .. } => self.visitor.visit_blockquote(text),
            Block::Divider => self.visitor.visit_divider(),
        };

        match action {
            VisitorAction::Skip => return,
            VisitorAction::Replace(content) => {
                output.push_str(&content);
                return;
            }
            VisitorAction::Continue => {}
        }

        match block {
            Block::Heading {
                level, id, spans, ..
            } => self.render_heading(output, *level, id, spans),
            Block::Paragraph { spans } => {
                output.push_str("<p>");
                self.render_spans(output, spans);
                output.push_str("</p>\n");
            }
            Block::UnorderedList { items } => self.render_list(output, "ul", items),
            Block::OrderedList { items } => self.render_list(output, "ol", items),
            Block::Blockquote { spans, .. } => {
                output.push_str("<blockquote>");
                self.render_spans(output, spans);
                output.push_str("</blockquote>\n");
            }
            Block::Divider => output.push_str("<hr />\n"),
        }
    }

    fn render_heading(&self, output: &mut String, level: HeadingLevel, id: &str, spans: &[Span]) {
        let tag = format!("h{}", level.as_u8());
        output.push_str(&format!(
            "<{} id=\"{}\">",
            tag,
            encode_double_quoted_attribute(id)
        ));
        self.render_spans(output, spans);
        output.push_str(&format!("</{}>\n", tag));
    }

    fn render_list(&self, output: &mut String, tag: &str, items: &[Vec<Span>]) {
        output.push_str(&format!("<{}>\n", tag));
        for item in items {
            output.push_str("<li>");
            self.render_spans(output, item);
            output.push_str("</li>\n");
        }
        output.push_str(&format!("</{}>\n", tag));
    }

    fn render_spans(&self, output: &mut String, spans: &[Span]) {
        for span in spans {
            match span {
                Span::Text { value } => output.push_str(&encode_text(value)),
                Span::Bold { value } => {
                    output.push_str("<strong>");
                    output.push_str(&encode_text(value));
                    output.push_str("</strong>");
                }
                Span::Link { text, url } => {
                    output.push_str("<a href=\"");
                    output.push_str(&encode_double_quoted_attribute(url));
                    output.push('"');
                    if self.options.external_links {
                        output.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                    }
                    output.push('>');
                    output.push_str(&encode_text(text));
                    output.push_str("</a>");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::assemble;
    use crate::render::visitor::SkipDividersVisitor;

    #[test]
    fn test_heading_anchor() {
        let doc = assemble("## Hello **World**");
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            "<h2 id=\"hello-world\">Hello <strong>World</strong></h2>\n"
        );
    }

    #[test]
    fn test_links_open_new_context() {
        let doc = assemble("See [the report](https://example.com/a?b=1&c=2).");
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            "<p>See <a href=\"https://example.com/a?b=1&amp;c=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">the report</a>.</p>\n"
        );

        let html = to_html(&doc, &RenderOptions::new().with_external_links(false)).unwrap();
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = assemble("1 < 2 & <script>");
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(html, "<p>1 &lt; 2 &amp; &lt;script&gt;</p>\n");
    }

    #[test]
    fn test_lists_quotes_dividers() {
        let doc = assemble("- a\n- b\n\n1. c\n\n> q\n\n---");
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\
             <ol>\n<li>c</li>\n</ol>\n\
             <blockquote>q</blockquote>\n\
             <hr />\n"
        );
    }

    #[test]
    fn test_toc_block() {
        let doc = assemble("## One\n### One A\n## Two");
        let html = to_html(&doc, &RenderOptions::new().with_toc(true)).unwrap();
        assert!(html.starts_with(
            "<nav class=\"toc\">\n<p class=\"toc-title\">On this page</p>\n<ul>\n\
             <li class=\"toc-h2\"><a href=\"#one\">One</a></li>\n\
             <li class=\"toc-h3\"><a href=\"#one-a\">One A</a></li>\n"
        ));
    }

    #[test]
    fn test_toc_omitted_without_headings() {
        let doc = assemble("just text");
        let html = to_html(&doc, &RenderOptions::new().with_toc(true)).unwrap();
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn test_visitor_skips_block() {
        let doc = assemble("above\n---\nbelow");
        let html = HtmlRenderer::new(RenderOptions::default())
            .with_visitor(SkipDividersVisitor)
            .render(&doc)
            .unwrap();
        assert_eq!(html, "<p>above</p>\n<p>below</p>\n");
    }

    #[test]
    fn test_render_with_stats() {
        let doc = assemble("## Title\n\nfour words right here");
        let result = to_html_with_stats(&doc, &RenderOptions::default()).unwrap();
        assert!(result.content.contains("<h2 id=\"title\">"));
        assert_eq!(result.stats.word_count, 5);
        assert_eq!(result.stats.reading_time_minutes, 1);
    }
}
