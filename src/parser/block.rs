//! Block tokenizer: raw article text to an ordered block sequence.

use super::heading::{match_heading, HeadingLine};
use super::inline::resolve_inline;
use super::slug::slug;
use crate::model::Block;

/// Classification of a single source line.
///
/// Variants are listed in matcher priority order: a line is given the first
/// kind whose matcher accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Divider,
    Heading(HeadingLine<'a>),
    /// Text after the `> ` prefix
    Quote(&'a str),
    /// Text after the `-`/`*` bullet and its whitespace
    Bullet(&'a str),
    /// Text after the `N.` number and its whitespace
    Numbered(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_divider(trimmed) {
        return LineKind::Divider;
    }
    if let Some(heading) = match_heading(line) {
        return LineKind::Heading(heading);
    }
    if let Some(rest) = line.strip_prefix("> ") {
        return LineKind::Quote(rest);
    }
    if let Some(rest) = bullet_item(line) {
        return LineKind::Bullet(rest);
    }
    if let Some(rest) = numbered_item(line) {
        return LineKind::Numbered(rest);
    }
    LineKind::Text(line)
}

/// Three or more dashes and nothing else.
fn is_divider(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// `-` or `*` followed by one whitespace character.
fn bullet_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(&['-', '*'][..])?;
    strip_one_whitespace(rest)
}

/// ASCII digits, a `.`, then one whitespace character.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    strip_one_whitespace(rest)
}

fn strip_one_whitespace(text: &str) -> Option<&str> {
    let c = text.chars().next().filter(|c| c.is_whitespace())?;
    Some(&text[c.len_utf8()..])
}

/// Split article content into blocks in source line order.
///
/// Lines are matched in a fixed priority order: blank, divider, heading,
/// blockquote, bullet list, numbered list, paragraph. Contiguous quote,
/// list and paragraph lines are folded into a single block; paragraph and
/// quote lines are joined with a single space.
///
/// Tokenizing never fails. Anything that matches no other rule becomes
/// paragraph text.
pub fn tokenize(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        match classify(lines[i]) {
            LineKind::Blank => {
                i += 1;
            }
            LineKind::Divider => {
                blocks.push(Block::Divider);
                i += 1;
            }
            LineKind::Heading(heading) => {
                blocks.push(heading_block(heading));
                i += 1;
            }
            LineKind::Quote(_) => {
                let (run, next) = take_run(&lines, i, |kind| match kind {
                    LineKind::Quote(text) => Some(text),
                    _ => None,
                });
                let text = run.join(" ");
                let spans = resolve_inline(&text);
                blocks.push(Block::Blockquote { text, spans });
                i = next;
            }
            LineKind::Bullet(_) => {
                let (run, next) = take_run(&lines, i, |kind| match kind {
                    LineKind::Bullet(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::UnorderedList {
                    items: run.into_iter().map(resolve_inline).collect(),
                });
                i = next;
            }
            LineKind::Numbered(_) => {
                let (run, next) = take_run(&lines, i, |kind| match kind {
                    LineKind::Numbered(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::OrderedList {
                    items: run.into_iter().map(resolve_inline).collect(),
                });
                i = next;
            }
            LineKind::Text(_) => {
                let (run, next) = take_run(&lines, i, |kind| match kind {
                    LineKind::Text(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::Paragraph {
                    spans: resolve_inline(&run.join(" ")),
                });
                i = next;
            }
        }
    }

    log::debug!(
        "Tokenized {} lines into {} blocks",
        lines.len(),
        blocks.len()
    );
    blocks
}

fn heading_block(heading: HeadingLine<'_>) -> Block {
    let text = heading.clean_text();
    Block::Heading {
        level: heading.level,
        id: slug(&text),
        spans: resolve_inline(heading.raw.trim()),
        text,
    }
}

/// Collect the maximal run of lines starting at `start` that `pick` accepts.
///
/// Returns the picked texts and the index of the first line after the run.
/// The caller guarantees that `pick` accepts the line at `start`.
fn take_run<'a, F>(lines: &[&'a str], start: usize, pick: F) -> (Vec<&'a str>, usize)
where
    F: Fn(LineKind<'a>) -> Option<&'a str>,
{
    let mut run = Vec::new();
    let mut end = start;
    while let Some(text) = lines.get(end).copied().and_then(|line| pick(classify(line))) {
        run.push(text);
        end += 1;
    }
    (run, end.max(start + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, Span};

    fn para(text: &str) -> Block {
        Block::Paragraph {
            spans: vec![Span::text(text)],
        }
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("---"), LineKind::Divider);
        assert_eq!(classify("  -----  "), LineKind::Divider);
        assert!(matches!(classify("## Title"), LineKind::Heading(_)));
        assert_eq!(classify("> quoted"), LineKind::Quote("quoted"));
        assert_eq!(classify("- item"), LineKind::Bullet("item"));
        assert_eq!(classify("* item"), LineKind::Bullet("item"));
        assert_eq!(classify("12. item"), LineKind::Numbered("item"));
        assert_eq!(classify("--"), LineKind::Text("--"));
        assert_eq!(classify("-item"), LineKind::Text("-item"));
        assert_eq!(classify(">quote"), LineKind::Text(">quote"));
        assert_eq!(classify("1.5 million"), LineKind::Text("1.5 million"));
    }

    #[test]
    fn test_heading() {
        let blocks = tokenize("## Hello World");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: HeadingLevel::H2,
                text: "Hello World".into(),
                id: "hello-world".into(),
                spans: vec![Span::text("Hello World")],
            }]
        );
    }

    #[test]
    fn test_heading_emphasis_kept_for_display_only() {
        let blocks = tokenize("### A **Bold** Claim");
        match &blocks[0] {
            Block::Heading {
                level,
                text,
                id,
                spans,
            } => {
                assert_eq!(*level, HeadingLevel::H3);
                assert_eq!(text, "A Bold Claim");
                assert_eq!(id, "a-bold-claim");
                assert_eq!(
                    spans,
                    &vec![Span::text("A "), Span::bold("Bold"), Span::text(" Claim")]
                );
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_soft_wrap_folding() {
        let blocks = tokenize("line one\nline two\n\nline three");
        assert_eq!(blocks, vec![para("line one line two"), para("line three")]);
    }

    #[test]
    fn test_paragraph_stops_at_block_start() {
        let blocks = tokenize("intro text\n## Next\nbody");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], para("intro text"));
        assert!(blocks[1].is_heading());
        assert_eq!(blocks[2], para("body"));
    }

    #[test]
    fn test_blockquote_collapses_lines() {
        let blocks = tokenize("> first line\n> second line\n>\n> after gap");
        assert_eq!(
            blocks,
            vec![
                Block::Blockquote {
                    text: "first line second line".into(),
                    spans: vec![Span::text("first line second line")],
                },
                para(">"),
                Block::Blockquote {
                    text: "after gap".into(),
                    spans: vec![Span::text("after gap")],
                },
            ]
        );
    }

    #[test]
    fn test_list_run_splitting() {
        let blocks = tokenize("- a\n- b\n1. c");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: vec![vec![Span::text("a")], vec![Span::text("b")]],
                },
                Block::OrderedList {
                    items: vec![vec![Span::text("c")]],
                },
            ]
        );
    }

    #[test]
    fn test_dash_and_star_bullets_share_a_run() {
        let blocks = tokenize("- a\n* b");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].list_len(), 2);
    }

    #[test]
    fn test_list_items_resolve_inline() {
        let blocks = tokenize("1. **Patch** first\n2. Read [the guide](https://g.io)");
        assert_eq!(
            blocks,
            vec![Block::OrderedList {
                items: vec![
                    vec![Span::bold("Patch"), Span::text(" first")],
                    vec![Span::text("Read "), Span::link("the guide", "https://g.io")],
                ],
            }]
        );
    }

    #[test]
    fn test_divider_between_paragraphs() {
        let blocks = tokenize("above\n---\nbelow");
        assert_eq!(blocks, vec![para("above"), Block::Divider, para("below")]);
    }

    #[test]
    fn test_bare_heading_marker_is_paragraph_text() {
        let blocks = tokenize("## \nstill text");
        assert_eq!(blocks, vec![para("##  still text")]);
    }

    #[test]
    fn test_unsupported_heading_depths_are_text() {
        let blocks = tokenize("# Title\n#### Deep");
        assert_eq!(blocks, vec![para("# Title #### Deep")]);
    }

    #[test]
    fn test_crlf_input() {
        let blocks = tokenize("## Title\r\n\r\nbody\r\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].heading_id(), Some("title"));
        assert_eq!(blocks[1], para("body"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t\n").is_empty());
    }
}
