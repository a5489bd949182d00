//! Line grammar
//!
//! Each input line is trimmed and matched against [`LINE_PATTERNS`] in declaration
//! order; the first pattern that matches (and whose guard accepts) decides what the
//! line is. Lines no pattern claims are paragraph text.
//!
//! The grammar order:
//!  1. blank
//!  2. `\page` / `\pagebreak` with optional `{tags}`
//!  3. `\column` / `\columnbreak` with optional `{tags}`
//!  4. one-line `{{footnote ...}}` (guard: non-empty body)
//!  5. `{{quote`, `{{wide`, `{{header`, `{{footer` prefix
//!  6. `{{pagenumber}}`
//!  7. `{{columnbreak}}`
//!  8. `{column-count:N}`
//!  9. `{{attribution ...}}` (guard: a quote block is open, non-empty text)
//! 10. `{{tags` (guard: line does not end with `}}`)
//! 11. `}}`
//! 12. `#`, `##`, `###` headings
//! 13. `---`, `***`, `___`

use crate::markup::recovery::{Recovery, RecoverySink};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    PageBreak,
    ColumnBreak,
    Footnote,
    OpenNamedBlock,
    PageNumber,
    InlineColumnBreak,
    ColumnCount,
    Attribution,
    OpenMustacheBlock,
    CloseBlock,
    Heading,
    HorizontalRule,
}

/// Grammar patterns, tried in declaration order.
const LINE_PATTERNS: &[(LineKind, &str)] = &[
    (LineKind::Blank, r"^$"),
    (
        LineKind::PageBreak,
        r"^\\(?:pagebreak|page)(?:\{([^}]*)\})?$",
    ),
    (
        LineKind::ColumnBreak,
        r"^\\(?:columnbreak|column)(?:\{([^}]*)\})?$",
    ),
    (LineKind::Footnote, r"(?s)^\{\{footnote\s+(.*?)\s*\}\}$"),
    (LineKind::OpenNamedBlock, r"^\{\{(quote|wide|header|footer)"),
    (LineKind::PageNumber, r"^\{\{pagenumber\}\}$"),
    (LineKind::InlineColumnBreak, r"^\{\{columnbreak\}\}$"),
    (LineKind::ColumnCount, r"^\{column-count:(\d{1,9})\}$"),
    (LineKind::Attribution, r"^\{\{attribution\s+(.*?)\s*\}\}$"),
    (LineKind::OpenMustacheBlock, r"^\{\{(.*)$"),
    (LineKind::CloseBlock, r"^\}\}$"),
    (LineKind::Heading, r"^(#{1,3})\s+(.*)$"),
    (LineKind::HorizontalRule, r"^(?:---|\*\*\*|___)$"),
];

static COMPILED_PATTERNS: Lazy<Vec<(LineKind, Regex)>> = Lazy::new(|| {
    LINE_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(pattern).unwrap()))
        .collect()
});

/// Custom blocks opened by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedBlock {
    Quote,
    Wide,
    Header,
    Footer,
}

impl NamedBlock {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "quote" => Some(NamedBlock::Quote),
            "wide" => Some(NamedBlock::Wide),
            "header" => Some(NamedBlock::Header),
            "footer" => Some(NamedBlock::Footer),
            _ => None,
        }
    }
}

/// A classified line with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRule<'a> {
    Blank,
    PageBreak { tags: &'a str },
    ColumnBreak { tags: &'a str },
    Footnote { body: &'a str },
    OpenNamedBlock(NamedBlock),
    PageNumber,
    InlineColumnBreak,
    ColumnCount(u32),
    Attribution(&'a str),
    OpenMustacheBlock { tags: &'a str },
    CloseBlock,
    Heading { level: u8, text: &'a str },
    HorizontalRule,
}

/// Parser state the guards depend on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext {
    pub quote_open: bool,
}

/// Classifies one trimmed line, or returns `None` for paragraph text.
pub fn classify_line<'a>(
    line: &'a str,
    context: LineContext,
    sink: &mut RecoverySink,
) -> Option<LineRule<'a>> {
    for (kind, regex) in COMPILED_PATTERNS.iter() {
        let Some(caps) = regex.captures(line) else {
            continue;
        };
        if let Some(rule) = build_rule(*kind, line, &caps, context, sink) {
            return Some(rule);
        }
    }
    None
}

fn build_rule<'a>(
    kind: LineKind,
    line: &'a str,
    caps: &Captures<'a>,
    context: LineContext,
    sink: &mut RecoverySink,
) -> Option<LineRule<'a>> {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let rule = match kind {
        LineKind::Blank => LineRule::Blank,
        LineKind::PageBreak => LineRule::PageBreak { tags: group(1) },
        LineKind::ColumnBreak => LineRule::ColumnBreak { tags: group(1) },
        LineKind::Footnote => {
            let body = group(1).trim();
            if body.is_empty() {
                sink.record(Recovery::EmptyFootnote {
                    line: line.to_string(),
                });
                return None;
            }
            LineRule::Footnote { body }
        }
        LineKind::OpenNamedBlock => LineRule::OpenNamedBlock(NamedBlock::from_name(group(1))?),
        LineKind::PageNumber => LineRule::PageNumber,
        LineKind::InlineColumnBreak => LineRule::InlineColumnBreak,
        LineKind::ColumnCount => LineRule::ColumnCount(group(1).parse().ok()?),
        LineKind::Attribution => {
            let text = group(1).trim();
            if !context.quote_open || text.is_empty() {
                return None;
            }
            LineRule::Attribution(text)
        }
        LineKind::OpenMustacheBlock => {
            if line.ends_with("}}") {
                return None;
            }
            LineRule::OpenMustacheBlock { tags: group(1) }
        }
        LineKind::CloseBlock => LineRule::CloseBlock,
        LineKind::Heading => LineRule::Heading {
            level: group(1).len() as u8,
            text: group(2),
        },
        LineKind::HorizontalRule => LineRule::HorizontalRule,
    };
    Some(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<LineRule<'_>> {
        classify_line(line, LineContext::default(), &mut RecoverySink::new())
    }

    #[test]
    fn breaks_accept_both_spellings() {
        assert_eq!(classify(r"\page"), Some(LineRule::PageBreak { tags: "" }));
        assert_eq!(
            classify(r"\pagebreak{#a}"),
            Some(LineRule::PageBreak { tags: "#a" })
        );
        assert_eq!(
            classify(r"\columnbreak"),
            Some(LineRule::ColumnBreak { tags: "" })
        );
        assert_eq!(classify(r"\pages"), None);
    }

    #[test]
    fn empty_footnote_falls_through_to_text() {
        let mut sink = RecoverySink::new();
        assert_eq!(
            classify_line("{{footnote   }}", LineContext::default(), &mut sink),
            None
        );
        assert_eq!(sink.into_recoveries().len(), 1);
    }

    #[test]
    fn named_blocks_win_over_mustache_blocks() {
        assert_eq!(
            classify("{{quote,frame"),
            Some(LineRule::OpenNamedBlock(NamedBlock::Quote))
        );
        assert_eq!(
            classify("{{monster,frame"),
            Some(LineRule::OpenMustacheBlock {
                tags: "monster,frame"
            })
        );
    }

    #[test]
    fn one_line_spans_are_not_blocks() {
        assert_eq!(classify("{{pen text}}"), None);
        assert_eq!(classify("{{pagenumber}}"), Some(LineRule::PageNumber));
    }

    #[test]
    fn attribution_needs_open_quote() {
        assert_eq!(classify("{{attribution Anon}}"), None);
        let context = LineContext { quote_open: true };
        assert_eq!(
            classify_line("{{attribution Anon }}", context, &mut RecoverySink::new()),
            Some(LineRule::Attribution("Anon"))
        );
    }

    #[test]
    fn headings_stop_at_three_hashes() {
        assert_eq!(
            classify("### Deep"),
            Some(LineRule::Heading {
                level: 3,
                text: "Deep"
            })
        );
        assert_eq!(classify("#### Deeper"), None);
        assert_eq!(classify("#NoSpace"), None);
    }

    #[test]
    fn column_count_requires_digits() {
        assert_eq!(classify("{column-count:2}"), Some(LineRule::ColumnCount(2)));
        assert_eq!(classify("{column-count:x}"), None);
    }
}
