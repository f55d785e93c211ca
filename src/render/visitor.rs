//! Visitor pattern for customizing HTML rendering.
//!
//! A visitor is consulted before each block is rendered and can keep the
//! default output, replace it, or drop the block.
//!
//! # Example
//!
//! ```
//! use readmark::render::visitor::{DocumentVisitor, VisitorAction};
//!
//! struct NoDividers;
//!
//! impl DocumentVisitor for NoDividers {
//!     fn visit_divider(&mut self) -> VisitorAction {
//!         VisitorAction::Skip
//!     }
//! }
//! ```

use crate::model::{HeadingLevel, Span};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block with custom output.
    Replace(String),

    /// Skip this block entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the block should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting document blocks during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor {
    /// Called before rendering a heading.
    fn visit_heading(&mut self, text: &str, id: &str, level: HeadingLevel) -> VisitorAction {
        let _ = (text, id, level);
        VisitorAction::Continue
    }

    /// Called before rendering a paragraph.
    fn visit_paragraph(&mut self, spans: &[Span]) -> VisitorAction {
        let _ = spans;
        VisitorAction::Continue
    }

    /// Called before rendering a list.
    fn visit_list(&mut self, items: &[Vec<Span>], ordered: bool) -> VisitorAction {
        let _ = (items, ordered);
        VisitorAction::Continue
    }

    /// Called before rendering a blockquote.
    fn visit_blockquote(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a divider.
    fn visit_divider(&mut self) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops all dividers.
#[derive(Debug, Clone, Default)]
pub struct SkipDividersVisitor;

impl DocumentVisitor for SkipDividersVisitor {
    fn visit_divider(&mut self) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that renders subsection headings as bold paragraphs.
///
/// Useful for short-form output where only `##` sections keep heading
/// markup. The anchor id is kept so TOC links still resolve.
#[derive(Debug, Clone, Default)]
pub struct FlattenSubheadingsVisitor;

impl DocumentVisitor for FlattenSubheadingsVisitor {
    fn visit_heading(&mut self, text: &str, id: &str, level: HeadingLevel) -> VisitorAction {
        if level != HeadingLevel::H3 {
            return VisitorAction::Continue;
        }
        VisitorAction::Replace(format!(
            "<p id=\"{}\"><strong>{}</strong></p>\n",
            html_escape::encode_double_quoted_attribute(id),
            html_escape::encode_text(text)
        ))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action<F>(&mut self, mut visit: F) -> VisitorAction
    where
        F: FnMut(&mut dyn DocumentVisitor) -> VisitorAction,
    {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_heading(&mut self, text: &str, id: &str, level: HeadingLevel) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text, id, level))
    }

    fn visit_paragraph(&mut self, spans: &[Span]) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(spans))
    }

    fn visit_list(&mut self, items: &[Vec<Span>], ordered: bool) -> VisitorAction {
        self.first_action(|v| v.visit_list(items, ordered))
    }

    fn visit_blockquote(&mut self, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_blockquote(text))
    }

    fn visit_divider(&mut self) -> VisitorAction {
        self.first_action(|v| v.visit_divider())
    }
}
