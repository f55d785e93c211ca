//! Document assembly: blocks plus table of contents.

use super::{extract_toc, tokenize};
use crate::model::Document;

/// Build the renderable document for one content load.
///
/// Runs the tokenizer and the TOC extractor independently over the same
/// input. Nothing is cached between calls.
pub fn assemble(content: &str) -> Document {
    let document = Document {
        blocks: tokenize(content),
        toc: extract_toc(content),
    };
    log::debug!(
        "Assembled document: {} blocks, {} toc entries",
        document.blocks.len(),
        document.toc.len()
    );
    document
}
