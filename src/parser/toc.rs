//! Table of contents extraction.

use super::heading::match_heading;
use super::slug::slug;
use crate::model::TocEntry;

/// Scan article content for `##`/`###` heading lines.
///
/// This is a pass of its own over the raw content, independent of
/// [`tokenize`](super::tokenize), but it cleans and slugs heading text the
/// same way so every entry id matches the corresponding heading block.
/// Duplicate heading text produces duplicate ids; entries are never merged.
pub fn extract_toc(content: &str) -> Vec<TocEntry> {
    content
        .lines()
        .filter_map(match_heading)
        .map(|heading| {
            let text = heading.clean_text();
            TocEntry::new(slug(&text), text, heading.level)
        })
        .collect()
}
