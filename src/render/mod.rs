//! Rendering module for converting parsed articles to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{ArticleStats, RenderResult};
pub use text::to_text;
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
