//! Plain text rendering for parsed articles.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// Blocks are separated by a blank line. Inline markup is dropped and link
/// targets are omitted.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text().trim().to_string())
}
