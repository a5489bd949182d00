//! Markup serializer output
//!
//! Snapshots of whole documents, plus the worked examples that must reproduce their
//! source text exactly.

use brewmark::markup::formats::treeviz::to_treeviz_str;
use brewmark::{
    parse_document, serialize, serialize_with_rules, AttributeBag, Block, BreakSpelling, Document,
    HeadingStyle, Inline, RawNode, SerializeRules,
};
use rstest::rstest;

const SOURCEBOOK: &str = r#"# The Goblin Warrens
## Chapter {{pen,#ch1 One}}

Goblins **hate** the *sun*. Cast \spell{light} to :fa-sun: them :ei_goblin:.
Second line of the same paragraph.

\pagebreak{#warrens,art,background:"url(a b)"}

{{monster,frame
### Goblin
***
{{columnbreak}}
Armor class 15
}}

{{quote
Never trust a goblin.
{{attribution Old Proverb}}
}}

{column-count:2}
Left
\column
{{footnote PART 1 | THE WARRENS}}

{{footer
{{pagenumber}}"#;

#[test]
fn test_sourcebook_snapshot() {
    let doc = parse_document(SOURCEBOOK);
    insta::assert_snapshot!(serialize(&doc), @r###"
    # The Goblin Warrens

    ## Chapter {{#ch1,pen One}}

    Goblins **hate** the *sun*. Cast \spell{light} to :fa-sun: them :ei_goblin:.
    Second line of the same paragraph.

    \page{#warrens,art,background:"url(a b)"}

    {{monster,frame
    ### Goblin

    ---

    {{columnbreak}}

    Armor class 15
    }}

    {{quote
    Never trust a goblin.
    {{attribution Old Proverb}}
    }}

    {column-count:2}
    Left
    }}

    \column

    {{footnote PART 1 | THE WARRENS}}

    {{footer
    {{pagenumber}}
    }}
    "###);
}

#[test]
fn test_sourcebook_round_trip_is_fixed_point() {
    let first = parse_document(SOURCEBOOK);
    let second = parse_document(&serialize(&first));
    assert_eq!(second, first);
}

#[test]
fn test_sourcebook_treeviz() {
    let doc = parse_document(SOURCEBOOK);
    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    ⧉ Document (18 blocks)
    ├─ § h1 The Goblin Warrens
    │ └─ ◦ The Goblin Warrens
    ├─ § h2 Chapter One
    │ ├─ ◦ Chapter
    │ └─ ⟨ #ch1,pen
    │   └─ ◦ One
    ├─ ¶ Goblins hate the sun. Cast lig...
    │ ├─ ◦ Goblins
    │ ├─ ◦ [bold] hate
    │ ├─ ◦ the
    │ ├─ ◦ [italic] sun
    │ ├─ ◦ . Cast
    │ ├─ ◦ [spellMark] light
    │ ├─ ◦ to
    │ ├─ ★ fa-sun
    │ ├─ ◦ them
    │ ├─ ☺ goblin
    │ └─ ◦ . Second line of the same para...
    ├─ ⤓ #warrens,art,background:"url(a...
    ├─ ❴ monster,frame
    │ ├─ § h3 Goblin
    │ │ └─ ◦ Goblin
    │ ├─ ― rule
    │ ├─ ⇥
    │ └─ ¶ Armor class 15
    │   └─ ◦ Armor class 15
    ├─ " Old Proverb
    │ └─ ¶ Never trust a goblin.
    │   └─ ◦ Never trust a goblin.
    ├─ ☷ 2 columns
    │ └─ ¶ Left
    │   └─ ◦ Left
    ├─ ⇥
    ├─ ³ footnote
    │ └─ ¶ PART 1 | THE WARRENS
    │   └─ ◦ PART 1 | THE WARRENS
    └─ ⊥ footer
      └─ # page number
    "###);
}

#[rstest(
    source,
    case("{{footnote PART 1 | SECTION NAME}}"),
    case("\\page{#cover,pageClass,color:red}"),
    case("# Title\n\nSome **bold** and *italic* text."),
    case("{{wide\nBody\n}}"),
    case("{column-count:3}\n{{columnbreak}}\n}}"),
    case("Emoji :ei_d20: and icon :far-heart:")
)]
fn test_canonical_sources_reproduce_exactly(source: &str) {
    assert_eq!(serialize(&parse_document(source)), source);
}

#[test]
fn test_span_tags_are_written_in_canonical_order() {
    let doc = parse_document("Author: {{pen,#author,color:orange Brandon Sanderson}}.");
    assert_eq!(
        serialize(&doc),
        "Author: {{#author,pen,color:orange Brandon Sanderson}}."
    );
}

#[rstest(
    source,
    expected,
    case("{{color:red,wide text}}", "{{,wide,color:red text}}"),
    case("{{data-x=1,quote said}}", "{{,quote,data-x=1 said}}"),
    case("{{a}} ,\nbody\n}}", "{{a}},\nbody\n}}")
)]
fn test_reordered_tags_keep_their_line_meaning(source: &str, expected: &str) {
    let first = parse_document(source);
    let written = serialize(&first);
    assert_eq!(written, expected);
    assert_eq!(parse_document(&written), first);
}

#[test]
fn test_rules_change_spelling_and_spacing() {
    let doc = parse_document("#### not a heading\n\n### Deep\n\\page\n\\column{x}");
    let rules = SerializeRules {
        heading_style: HeadingStyle::Collapse,
        break_spelling: BreakSpelling::Long,
        blank_lines_between_blocks: 2,
    };
    insta::assert_snapshot!(serialize_with_rules(&doc, &rules), @r###"
    #### not a heading


    ## Deep


    \pagebreak


    \columnbreak{x}
    "###);
}

#[test]
fn test_tree_only_nodes_are_written() {
    let doc = Document::new(vec![
        Block::heading(6, vec![Inline::text("Six")]),
        Block::paragraph(vec![Inline::marked("x", brewmark::Mark::Code)]),
        Block::Unknown(
            RawNode::new("diceRoller").with_content(vec![RawNode::new("text").with_text("1d20")]),
        ),
        Block::WideBlock {
            content: vec![Block::ColumnBreak {
                attrs: AttributeBag::new().with_class("odd"),
            }],
        },
    ]);
    insta::assert_snapshot!(serialize(&doc), @r###"
    ### Six

    `x`

    1d20

    {{wide
    \column{odd}
    }}
    "###);
}
