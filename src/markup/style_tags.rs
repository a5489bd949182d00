//! Style-tag mini-language
//!
//!     The attribute syntax used after `{{`, inside `\page{...}` and `\column{...}`:
//!
//!         #id,class,other-class,key:value,key:"quoted value",key=value,key="v"
//!
//!     Tags are separated by commas or whitespace. A quote only opens a quoted value when
//!     it directly follows `:` or `=`; anywhere else it separates tags like a comma.
//!     Each tag is classified by its shape:
//!
//!         #x              id (the first one wins, later ones are dropped)
//!         bare            class, appended in order and space-joined
//!         key:value       style
//!         key=value       attribute, except `class`, `style` and `id`, which are dropped
//!
//!     A tag is split at its first `:` or `=`, so `href=http://x` is an attribute and
//!     `content:a=b` is a style. Quotes are stripped from values and values are trimmed.
//!     Tags that fit none of the shapes (an empty key, a bare `#`) are kept as opaque
//!     class names; parsing never fails.
//!
//!     [`stringify`] is the inverse, in the fixed order id, classes, styles, attributes.
//!     For every bag produced by [`parse`], `parse(&stringify(&bag)) == bag`.

use crate::markup::ast::AttributeBag;
use crate::markup::recovery::{Recovery, RecoverySink};
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum TagToken {
    #[regex(r#"[^,\s":=]+"#)]
    Word,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("\"")]
    Quote,
    #[token(",")]
    Comma,
    #[regex(r"\s+")]
    Whitespace,
}

/// One classified tag.
#[derive(Debug, PartialEq)]
enum Tag<'a> {
    Id(&'a str),
    Class(&'a str),
    Style(&'a str, String),
    Attribute(&'a str, String),
    Malformed(&'a str),
}

const RESERVED_ATTRIBUTES: &[&str] = &["class", "style", "id"];

/// Parses a tag string into an [`AttributeBag`].
pub fn parse(source: &str) -> AttributeBag {
    parse_with(source, &mut RecoverySink::new())
}

pub(crate) fn parse_with(source: &str, sink: &mut RecoverySink) -> AttributeBag {
    let mut bag = AttributeBag::new();
    for raw in split_tags(source) {
        match classify(raw) {
            Tag::Id(id) => {
                if bag.id.is_none() {
                    bag.id = Some(id.to_string());
                }
            }
            Tag::Class(class) => bag.push_class(class),
            Tag::Style(key, value) => {
                bag = bag.with_style(key, value);
            }
            Tag::Attribute(key, value) => {
                if !RESERVED_ATTRIBUTES.contains(&key) {
                    bag = bag.with_attribute(key, value);
                }
            }
            Tag::Malformed(token) => {
                sink.record(Recovery::MalformedAttributeToken {
                    token: token.to_string(),
                });
                bag.push_class(&opaque_class(token));
            }
        }
    }
    bag.canonicalized()
}

/// Writes a bag back as a tag string.
pub fn stringify(bag: &AttributeBag) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(id) = &bag.id {
        parts.push(format!("#{}", id));
    }
    parts.extend(bag.class_list().map(str::to_string));
    if let Some(styles) = &bag.styles {
        parts.extend(styles.iter().map(|(k, v)| format!("{}:{}", k, quote_value(v))));
    }
    if let Some(attributes) = &bag.attributes {
        parts.extend(attributes.iter().map(|(k, v)| format!("{}={}", k, quote_value(v))));
    }
    parts.join(",")
}

/// Splits a tag string into raw tags, keeping `:"..."`/`="..."` values intact.
fn split_tags(source: &str) -> Vec<&str> {
    let tokens: Vec<(TagToken, Range<usize>)> = TagToken::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|t| (t, span)))
        .collect();

    let mut tags = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut i = 0;
    while i < tokens.len() {
        let (token, span) = &tokens[i];
        match token {
            TagToken::Word | TagToken::Colon | TagToken::Equals => {
                start.get_or_insert(span.start);
                end = span.end;
                if matches!(token, TagToken::Colon | TagToken::Equals) {
                    if let Some(close) = closing_quote(&tokens, i + 1) {
                        end = tokens[close].1.end;
                        i = close;
                    }
                }
            }
            TagToken::Quote | TagToken::Comma | TagToken::Whitespace => {
                if let Some(s) = start.take() {
                    tags.push(&source[s..end]);
                }
            }
        }
        i += 1;
    }
    if let Some(s) = start {
        tags.push(&source[s..end]);
    }
    tags
}

/// Index of the quote closing a quoted value that opens at `open`, if any.
fn closing_quote(tokens: &[(TagToken, Range<usize>)], open: usize) -> Option<usize> {
    match tokens.get(open) {
        Some((TagToken::Quote, _)) => (open + 1..tokens.len()).find(|&j| tokens[j].0 == TagToken::Quote),
        _ => None,
    }
}

fn classify(tag: &str) -> Tag<'_> {
    let separator = tag.find([':', '=']);
    if let Some(id) = tag.strip_prefix('#') {
        return if id.is_empty() || separator.is_some() {
            Tag::Malformed(tag)
        } else {
            Tag::Id(id)
        };
    }
    let Some(idx) = separator else {
        return Tag::Class(tag);
    };
    let key = tag[..idx].trim();
    if key.is_empty() {
        return Tag::Malformed(tag);
    }
    let value: String = tag[idx + 1..].chars().filter(|c| *c != '"').collect();
    let value = value.trim().to_string();
    if tag[idx..].starts_with(':') {
        Tag::Style(key, value)
    } else {
        Tag::Attribute(key, value)
    }
}

/// Class name used for a tag that could not be classified.
fn opaque_class(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '"' | ',') && !c.is_whitespace())
        .collect()
}

fn quote_value(value: &str) -> String {
    if value.chars().any(|c| c.is_whitespace() || c == ',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
