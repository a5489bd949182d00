//! Markup serializer
//!
//! The inverse of the block parser and the inline tokenizer: one case per node type,
//! emitting markup that parses back to the same tree. Re-parsing serialized output of a
//! parsed document yields that document again, even when the text differs from the
//! original (style tags are reordered, `\pagebreak` may come back as `\page`).
//!
//! Known limits, all of them trees the parser never builds from markup:
//! - custom blocks nested in custom blocks are written nested but read back flat;
//! - heading levels above 3 are written as level 3;
//! - nodes of unknown type are written as their plain text.

use crate::markup::ast::{AttributeBag, Block, Document, Inline, Mark};
use crate::markup::style_tags;
use serde::{Deserialize, Serialize};

/// How heading levels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `#` repeated `level` times, capped at the three levels the parser reads.
    #[default]
    Preserve,
    /// Levels 3 and deeper written as `##`.
    Collapse,
}

/// Which spelling of the break commands to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakSpelling {
    /// `\page`, `\column`
    #[default]
    Short,
    /// `\pagebreak`, `\columnbreak`
    Long,
}

impl BreakSpelling {
    fn page(self) -> &'static str {
        match self {
            BreakSpelling::Short => "\\page",
            BreakSpelling::Long => "\\pagebreak",
        }
    }

    fn column(self) -> &'static str {
        match self {
            BreakSpelling::Short => "\\column",
            BreakSpelling::Long => "\\columnbreak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeRules {
    pub heading_style: HeadingStyle,
    pub break_spelling: BreakSpelling,
    /// Blank lines written between sibling blocks; values below 1 are treated as 1.
    pub blank_lines_between_blocks: usize,
}

impl Default for SerializeRules {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Preserve,
            break_spelling: BreakSpelling::Short,
            blank_lines_between_blocks: 1,
        }
    }
}

/// Serializes a document with the default rules.
pub fn serialize(document: &Document) -> String {
    serialize_with_rules(document, &SerializeRules::default())
}

pub fn serialize_with_rules(document: &Document, rules: &SerializeRules) -> String {
    MarkupSerializer::new(rules).document(document)
}

struct MarkupSerializer<'r> {
    rules: &'r SerializeRules,
    separator: String,
}

impl<'r> MarkupSerializer<'r> {
    fn new(rules: &'r SerializeRules) -> Self {
        let separator = "\n".repeat(rules.blank_lines_between_blocks.max(1) + 1);
        Self { rules, separator }
    }

    fn document(&self, document: &Document) -> String {
        self.blocks(&document.content, false)
    }

    fn blocks(&self, blocks: &[Block], nested: bool) -> String {
        blocks
            .iter()
            .map(|block| self.block(block, nested))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    fn block(&self, block: &Block, nested: bool) -> String {
        match block {
            Block::Paragraph { content } => self.inlines(content),
            Block::Heading { level, content } => {
                let hashes = match self.rules.heading_style {
                    HeadingStyle::Preserve => (*level).clamp(1, 3),
                    HeadingStyle::Collapse if *level >= 3 => 2,
                    HeadingStyle::Collapse => (*level).max(1),
                };
                format!("{} {}", "#".repeat(hashes as usize), self.inlines(content))
            }
            Block::HorizontalRule => "---".to_string(),
            Block::PageBreak { attrs } => {
                format!("{}{}", self.rules.break_spelling.page(), tag_suffix(attrs))
            }
            // Inside a custom block `\column` would close the block, so the
            // in-place form is used there.
            Block::ColumnBreak { attrs } if nested && attrs.is_empty() => {
                "{{columnbreak}}".to_string()
            }
            Block::ColumnBreak { attrs } => {
                format!("{}{}", self.rules.break_spelling.column(), tag_suffix(attrs))
            }
            Block::FootnoteBlock { content } => {
                format!("{{{{footnote {}}}}}", self.blocks(content, true).trim())
            }
            Block::QuoteBlock {
                attribution,
                content,
            } => {
                let trailer = attribution
                    .as_deref()
                    .map(|text| format!("{{{{attribution {}}}}}", text));
                self.container("{{quote", content, trailer)
            }
            Block::WideBlock { content } => self.container("{{wide", content, None),
            Block::MustacheBlock { attrs, content } => {
                let mut opener = format!("{{{{{}", guarded_tags(attrs));
                // An opener ending in `}}` would be read back as a span.
                if opener.ends_with("}}") {
                    opener.push(',');
                }
                self.container(&opener, content, None)
            }
            Block::ColumnContainer { count, content } => {
                let opener = format!("{{column-count:{}}}", count);
                self.container(&opener, content, None)
            }
            Block::Header { content } => self.container("{{header", content, None),
            Block::Footer { content } => self.container("{{footer", content, None),
            Block::PageNumber => "{{pagenumber}}".to_string(),
            Block::Unknown(raw) => raw.plain_text(),
        }
    }

    fn container(&self, opener: &str, children: &[Block], trailer: Option<String>) -> String {
        let mut lines = vec![opener.to_string(), self.blocks(children, true)];
        lines.extend(trailer);
        lines.push("}}".to_string());
        lines.join("\n")
    }

    fn inlines(&self, inlines: &[Inline]) -> String {
        inlines.iter().map(|inline| self.inline(inline)).collect()
    }

    fn inline(&self, inline: &Inline) -> String {
        match inline {
            Inline::Text { text, marks } => marks.iter().fold(text.clone(), wrap_mark),
            // The space is written even for an empty tag string, otherwise the first
            // word of the content would be read back as tags.
            Inline::MustacheSpan { attrs, content } => format!(
                "{{{{{} {}}}}}",
                guarded_tags(attrs),
                self.inlines(content)
            ),
            Inline::IconMark { name } => format!(":{}:", name),
            Inline::Emoji { name, .. } => format!(":ei_{}:", name),
            Inline::Unknown(raw) => raw.plain_text(),
        }
    }
}

fn wrap_mark(text: String, mark: &Mark) -> String {
    match mark {
        Mark::Bold => format!("**{}**", text),
        Mark::Italic => format!("*{}*", text),
        Mark::Code => format!("`{}`", text),
        Mark::Macro(kind) => format!("\\{}{{{}}}", kind.keyword(), text),
        Mark::Unknown(_) => text,
    }
}

/// Words that give a line starting with `{{word` its own meaning.
const LINE_KEYWORDS: &[&str] = &[
    "quote",
    "wide",
    "header",
    "footer",
    "footnote",
    "attribution",
    "pagenumber",
    "columnbreak",
];

/// Tag string for a span or block opener. A leading comma is skipped when the tags
/// are read back, so it keeps a first class such as `wide` from turning the line
/// into a named block.
fn guarded_tags(attrs: &AttributeBag) -> String {
    let tags = style_tags::stringify(attrs);
    if LINE_KEYWORDS.iter().any(|word| tags.starts_with(word)) {
        format!(",{}", tags)
    } else {
        tags
    }
}

fn tag_suffix(attrs: &AttributeBag) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", style_tags::stringify(attrs))
    }
}
