//! Mustache span segmentation
//!
//! Scans for the next `{{` and then the next `}}`. Spans are single level: a `{{`
//! inside a span is not scanned for nesting, it simply becomes part of the span's
//! inner text. A `{{` with no `}}` after it turns the whole remainder into plain text.

use crate::markup::recovery::{Recovery, RecoverySink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Segment<'a> {
    Plain(&'a str),
    /// Inner text between `{{` and `}}`.
    Span(&'a str),
}

pub(super) fn split_segments<'a>(text: &'a str, sink: &mut RecoverySink) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(open) = rest.find("{{") else {
            segments.push(Segment::Plain(rest));
            break;
        };
        let inner_start = open + 2;
        let Some(close) = rest[inner_start..].find("}}") else {
            sink.record(Recovery::UnterminatedMustacheSpan {
                text: rest[open..].to_string(),
            });
            segments.push(Segment::Plain(rest));
            break;
        };
        if open > 0 {
            segments.push(Segment::Plain(&rest[..open]));
        }
        segments.push(Segment::Span(&rest[inner_start..inner_start + close]));
        rest = &rest[inner_start + close + 2..];
    }
    segments
}

/// Splits span inner text at the first whitespace outside double quotes.
///
/// Returns the tag string and the content; the separating whitespace character is
/// dropped. Inner text with no such whitespace is all tags.
pub(super) fn split_span(inner: &str) -> (&str, &str) {
    let mut quoted = false;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                return (&inner[..idx], &inner[idx + c.len_utf8()..]);
            }
            _ => {}
        }
    }
    (inner, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Segment<'_>> {
        split_segments(text, &mut RecoverySink::new())
    }

    #[test]
    fn alternates_plain_and_span() {
        assert_eq!(
            split("a {{pen x}} b {{y}}"),
            vec![
                Segment::Plain("a "),
                Segment::Span("pen x"),
                Segment::Plain(" b "),
                Segment::Span("y"),
            ]
        );
    }

    #[test]
    fn spans_are_single_level() {
        assert_eq!(
            split("{{a {{b}} c}}"),
            vec![Segment::Span("a {{b"), Segment::Plain(" c}}")]
        );
    }

    #[test]
    fn unmatched_open_keeps_remainder_as_text() {
        let mut sink = RecoverySink::new();
        let segments = split_segments("x {{y}} z {{w", &mut sink);
        assert_eq!(
            segments,
            vec![Segment::Plain("x "), Segment::Span("y"), Segment::Plain(" z {{w")]
        );
        assert_eq!(
            sink.into_recoveries(),
            vec![Recovery::UnterminatedMustacheSpan { text: "{{w".into() }]
        );
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(split("").is_empty());
    }

    #[test]
    fn span_split_respects_quotes() {
        assert_eq!(
            split_span(r#"font:"Mr Eaves" Text here"#),
            (r#"font:"Mr Eaves""#, "Text here")
        );
        assert_eq!(split_span("pen"), ("pen", ""));
        assert_eq!(split_span(" content"), ("", "content"));
        assert_eq!(split_span("a  b"), ("a", " b"));
    }
}
