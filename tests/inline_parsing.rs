//! Inline tokenizer
//!
//! Verifies mark recognition, tie-breaking between rules, atomic nodes and mustache
//! spans, including the partial inputs a live editor produces.

use brewmark::{parse_inlines, AttributeBag, Inline, MacroKind, Mark};
use rstest::rstest;

fn span(attrs: AttributeBag, content: Vec<Inline>) -> Inline {
    Inline::MustacheSpan { attrs, content }
}

fn macro_text(text: &str, kind: MacroKind) -> Inline {
    Inline::marked(text, Mark::Macro(kind))
}

#[test]
fn test_bold_and_italic_sentence() {
    assert_eq!(
        parse_inlines("Some **bold** and *italic* text."),
        vec![
            Inline::text("Some "),
            Inline::bold("bold"),
            Inline::text(" and "),
            Inline::italic("italic"),
            Inline::text(" text."),
        ]
    );
}

#[test]
fn test_author_span() {
    assert_eq!(
        parse_inlines("Author: {{pen,#author,color:orange Brandon Sanderson}}."),
        vec![
            Inline::text("Author: "),
            span(
                AttributeBag::new()
                    .with_class("pen")
                    .with_id("author")
                    .with_style("color", "orange"),
                vec![Inline::text("Brandon Sanderson")],
            ),
            Inline::text("."),
        ]
    );
}

#[rstest(
    source,
    kind,
    case(r"\spell{fireball}", MacroKind::Spell),
    case(r"\ability{Strength}", MacroKind::Ability),
    case(r"\skill{Stealth}", MacroKind::Skill),
    case(r"\condition{prone}", MacroKind::Condition),
    case(r"\damage{2d6 fire}", MacroKind::Damage)
)]
fn test_macro_marks(source: &str, kind: MacroKind) {
    let nodes = parse_inlines(source);
    assert_eq!(nodes.len(), 1);
    let argument = &source[source.find('{').unwrap() + 1..source.len() - 1];
    assert_eq!(nodes[0], macro_text(argument, kind));
}

#[test]
fn test_unknown_macro_is_text() {
    assert_eq!(
        parse_inlines(r"\cantrip{light}"),
        vec![Inline::text(r"\cantrip{light}")]
    );
}

#[rstest(
    source,
    name,
    case(":fa-dragon:", "fa-dragon"),
    case(":far-heart:", "far-heart"),
    case(":fab-d-and-d:", "fab-d-and-d")
)]
fn test_icons_keep_prefix(source: &str, name: &str) {
    assert_eq!(
        parse_inlines(source),
        vec![Inline::IconMark { name: name.into() }]
    );
}

#[test]
fn test_emoji_name_is_stripped() {
    assert_eq!(
        parse_inlines("roll :ei_d20: now"),
        vec![
            Inline::text("roll "),
            Inline::Emoji {
                name: "d20".into(),
                set: "ei".into()
            },
            Inline::text(" now"),
        ]
    );
}

#[test]
fn test_unclosed_macro_is_plain_text() {
    assert_eq!(
        parse_inlines(r"*a \spell{b* c*"),
        vec![Inline::italic(r"a \spell{b"), Inline::text(" c*")]
    );
}

#[test]
fn test_italic_never_takes_double_star() {
    assert_eq!(
        parse_inlines("**x* y"),
        vec![Inline::text("*"), Inline::italic("x"), Inline::text(" y")]
    );
}

#[test]
fn test_bold_spans_lines() {
    assert_eq!(
        parse_inlines("**one\ntwo**"),
        vec![Inline::bold("one\ntwo")]
    );
}

#[test]
fn test_span_without_content() {
    assert_eq!(
        parse_inlines("{{pen}}"),
        vec![span(
            AttributeBag::new().with_class("pen"),
            vec![Inline::text("")]
        )]
    );
}

#[test]
fn test_span_with_leading_space_has_no_tags() {
    assert_eq!(
        parse_inlines("{{ plain words}}"),
        vec![span(AttributeBag::new(), vec![Inline::text("plain words")])]
    );
}

#[test]
fn test_span_with_quoted_tag_value() {
    assert_eq!(
        parse_inlines(r#"{{font-family:"Mr Eaves" Title}}"#),
        vec![span(
            AttributeBag::new().with_style("font-family", "Mr Eaves"),
            vec![Inline::text("Title")]
        )]
    );
}

#[test]
fn test_unterminated_span_is_text() {
    assert_eq!(
        parse_inlines("before {{pen never closed **bold**"),
        vec![
            Inline::text("before {{pen never closed "),
            Inline::bold("bold"),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_inlines(""), vec![Inline::text("")]);
}
