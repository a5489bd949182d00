//! Plain-segment tokenizer
//!
//! A plain segment is scanned for the earliest match of any rule in [`INLINE_PATTERNS`].
//! When two rules match at the same index the one listed first wins, so the table
//! order is part of the contract:
//!
//!     macro    \spell{arg}   text `arg` with a `spellMark` (likewise ability, skill,
//!                            condition, damage)
//!     icon     :fa-name:     atomic `iconMark`, name kept literally (`fa-dragon`)
//!     emoji    :ei_name:     atomic `emoji` with set `ei`
//!     bold     **text**
//!     italic   *text*        never consumes `**`
//!
//! Text before a match is emitted verbatim and scanning resumes after the match.

use super::segments::{split_segments, split_span, Segment};
use crate::markup::ast::{Inline, MacroKind, Mark};
use crate::markup::recovery::RecoverySink;
use crate::markup::style_tags;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Inline rules, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    Macro,
    Icon,
    Emoji,
    Bold,
    Italic,
}

const INLINE_PATTERNS: &[(InlineRule, &str)] = &[
    (
        InlineRule::Macro,
        r"\\(spell|ability|skill|condition|damage)\{([^}]*)\}",
    ),
    (InlineRule::Icon, r":(fa[rb]?-[a-z0-9-]+):"),
    (InlineRule::Emoji, r":ei_([a-z0-9_-]+):"),
    (InlineRule::Bold, r"(?s)\*\*(.+?)\*\*"),
    (InlineRule::Italic, r"\*([^*]+)\*"),
];

static COMPILED_PATTERNS: Lazy<Vec<(InlineRule, Regex)>> = Lazy::new(|| {
    INLINE_PATTERNS
        .iter()
        .map(|(rule, pattern)| (*rule, Regex::new(pattern).unwrap()))
        .collect()
});

/// Tokenizes a text run into inline nodes.
///
/// Never returns an empty vector: empty input yields one empty text node.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    parse_inlines_with(text, &mut RecoverySink::new())
}

pub(crate) fn parse_inlines_with(text: &str, sink: &mut RecoverySink) -> Vec<Inline> {
    let mut nodes = Vec::new();
    for segment in split_segments(text, sink) {
        match segment {
            Segment::Plain(plain) => tokenize_plain(plain, &mut nodes),
            Segment::Span(inner) => {
                let (tags, content) = split_span(inner);
                nodes.push(Inline::MustacheSpan {
                    attrs: style_tags::parse_with(tags, sink),
                    content: parse_inlines_with(content, sink),
                });
            }
        }
    }
    if nodes.is_empty() {
        nodes.push(Inline::text(""));
    }
    nodes
}

struct InlineMatch {
    start: usize,
    end: usize,
    node: Inline,
}

fn tokenize_plain(text: &str, out: &mut Vec<Inline>) {
    let mut rest = text;
    while let Some(found) = earliest_match(rest) {
        if found.start > 0 {
            out.push(Inline::text(&rest[..found.start]));
        }
        out.push(found.node);
        rest = &rest[found.end..];
    }
    if !rest.is_empty() {
        out.push(Inline::text(rest));
    }
}

fn earliest_match(text: &str) -> Option<InlineMatch> {
    let mut best: Option<(InlineRule, Captures<'_>)> = None;
    for (rule, regex) in COMPILED_PATTERNS.iter() {
        let Some(caps) = regex.captures(text) else {
            continue;
        };
        let start = caps.get(0).map_or(usize::MAX, |m| m.start());
        let best_start = best
            .as_ref()
            .and_then(|(_, b)| b.get(0))
            .map_or(usize::MAX, |m| m.start());
        if start < best_start {
            best = Some((*rule, caps));
        }
    }
    let (rule, caps) = best?;
    let whole = caps.get(0)?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let node = match rule {
        InlineRule::Macro => match MacroKind::from_keyword(group(1)) {
            Some(kind) => Inline::marked(group(2), Mark::Macro(kind)),
            None => Inline::text(whole.as_str()),
        },
        InlineRule::Icon => Inline::IconMark {
            name: group(1).to_string(),
        },
        InlineRule::Emoji => Inline::Emoji {
            name: group(1).to_string(),
            set: "ei".to_string(),
        },
        InlineRule::Bold => Inline::bold(group(1)),
        InlineRule::Italic => Inline::italic(group(1)),
    };
    Some(InlineMatch {
        start: whole.start(),
        end: whole.end(),
        node,
    })
}
