//! Inline-level types.

use serde::{Deserialize, Serialize};

/// One inline unit of formatted text within a block.
///
/// Spans are flat: the content of a [`Span::Bold`] is literal text and is
/// never parsed for further markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    /// Plain text
    Text {
        /// The literal text
        value: String,
    },

    /// Strong emphasis (`**value**`)
    Bold {
        /// The literal emphasized text
        value: String,
    },

    /// A hyperlink (`[text](url)`)
    Link {
        /// Link text
        text: String,
        /// Link target
        url: String,
    },
}

impl Span {
    /// Create a plain text span.
    pub fn text(value: impl Into<String>) -> Self {
        Span::Text {
            value: value.into(),
        }
    }

    /// Create a bold span.
    pub fn bold(value: impl Into<String>) -> Self {
        Span::Bold {
            value: value.into(),
        }
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Visible text of the span, without markup.
    pub fn plain_text(&self) -> &str {
        match self {
            Span::Text { value } | Span::Bold { value } => value,
            Span::Link { text, .. } => text,
        }
    }
}

/// Concatenate the visible text of a span sequence.
pub fn spans_plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_plain_text() {
        let spans = vec![
            Span::text("Read "),
            Span::bold("this"),
            Span::text(" and "),
            Span::link("that", "https://example.com"),
        ];
        assert_eq!(spans_plain_text(&spans), "Read this and that");
    }

    #[test]
    fn test_span_serde_tag() {
        let json = serde_json::to_string(&Span::bold("x")).unwrap();
        assert_eq!(json, r#"{"type":"bold","value":"x"}"#);
    }
}
