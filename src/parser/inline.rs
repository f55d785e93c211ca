//! Inline span resolution (bold and links).

use crate::model::Span;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Expand raw block text into a flat sequence of inline spans.
///
/// The earliest bold (`**...**`) or link (`[text](url)`) marker is consumed
/// first; when both start at the same index bold wins. Text before a marker
/// becomes a [`Span::Text`]. Incomplete markers stay literal, and the
/// content of a bold span is not scanned again.
///
/// # Example
///
/// ```
/// use readmark::model::Span;
/// use readmark::parser::resolve_inline;
///
/// let spans = resolve_inline("**A** [B](url)");
/// assert_eq!(
///     spans,
///     vec![Span::bold("A"), Span::text(" "), Span::link("B", "url")]
/// );
/// ```
pub fn resolve_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let next = match (next_bold(rest), next_link(rest)) {
            (None, None) => None,
            (Some(bold), Some(link)) => {
                if bold.0.start <= link.0.start {
                    Some(bold)
                } else {
                    Some(link)
                }
            }
            (bold, link) => bold.or(link),
        };

        let Some((range, span)) = next else {
            spans.push(Span::text(rest));
            break;
        };

        if range.start > 0 {
            spans.push(Span::text(&rest[..range.start]));
        }
        spans.push(span);
        rest = &rest[range.end..];
    }

    spans
}

fn next_bold(text: &str) -> Option<(Range<usize>, Span)> {
    let caps = BOLD.captures(text)?;
    let whole = caps.get(0)?;
    Some((whole.range(), Span::bold(caps.get(1)?.as_str())))
}

fn next_link(text: &str) -> Option<(Range<usize>, Span)> {
    let caps = LINK.captures(text)?;
    let whole = caps.get(0)?;
    Some((
        whole.range(),
        Span::link(caps.get(1)?.as_str(), caps.get(2)?.as_str()),
    ))
}
