//! Heading line recognition shared by the tokenizer and the TOC extractor.
//!
//! Both passes must agree on which lines are headings and on the text that
//! gets slugged, otherwise TOC links would point at anchors that don't exist.

use crate::model::HeadingLevel;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{2,3})\s+(.+)$").unwrap());

/// A line recognized as a `##` or `###` heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeadingLine<'a> {
    pub level: HeadingLevel,
    /// Remainder after the hashes and separating whitespace, untouched.
    pub raw: &'a str,
}

impl HeadingLine<'_> {
    /// Heading text with emphasis markers removed.
    pub fn clean_text(&self) -> String {
        clean_heading_text(self.raw)
    }
}

/// Match a single line against the heading pattern.
pub(crate) fn match_heading(line: &str) -> Option<HeadingLine<'_>> {
    let caps = HEADING_LINE.captures(line)?;
    let level = match caps.get(1)?.as_str().len() {
        2 => HeadingLevel::H2,
        _ => HeadingLevel::H3,
    };
    Some(HeadingLine {
        level,
        raw: caps.get(2)?.as_str(),
    })
}

/// Strip every `*` and surrounding whitespace.
pub(crate) fn clean_heading_text(raw: &str) -> String {
    raw.replace('*', "").trim().to_string()
}
