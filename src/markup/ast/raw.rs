//! Raw interchange node
//!
//!     The `{type, attrs, content, text, marks}` record the renderer and the persistence
//!     layer exchange. Typed nodes convert into it losslessly; converting back validates
//!     the fields of every known node type and keeps unknown types as they are.
//!
//!     Layout per type:
//!
//!         doc                 content: blocks
//!         paragraph           content: inlines
//!         heading             attrs.level (1-6, default 1), content: inlines
//!         pageBreak           attrs: {id, classes, styles, attributes}
//!         columnBreak         attrs: {id, classes, styles, attributes}
//!         mustacheBlock       attrs: {id, classes, styles, attributes}, content: blocks
//!         quoteBlock          attrs.attribution (string or null), content: blocks
//!         columnContainer     attrs.count, content: blocks
//!         footnoteBlock, wideBlock, header, footer      content: blocks
//!         horizontalRule, pageNumber                    no fields
//!         text                text, marks: [{type}]
//!         mustacheSpan        attrs: {id, classes, styles, attributes}, content: inlines
//!         iconMark            attrs.name
//!         emoji               attrs.name, attrs.set

use super::attributes::{AttributeBag, StyleMap};
use super::blocks::Block;
use super::document::Document;
use super::inlines::{Inline, MacroKind, Mark};
use crate::markup::error::TreeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const BLOCK_TYPES: &[&str] = &[
    "paragraph",
    "heading",
    "horizontalRule",
    "pageBreak",
    "columnBreak",
    "footnoteBlock",
    "quoteBlock",
    "wideBlock",
    "mustacheBlock",
    "columnContainer",
    "header",
    "footer",
    "pageNumber",
];

const INLINE_TYPES: &[&str] = &["text", "mustacheSpan", "iconMark", "emoji"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<RawNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<RawMark>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl RawNode {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn with_content(mut self, content: Vec<RawNode>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text-only flattening used when a node type is not understood.
    pub fn plain_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        let Some(children) = &self.content else {
            return String::new();
        };
        let separator = if children.iter().any(|child| child.content.is_some()) {
            "\n"
        } else {
            ""
        };
        children
            .iter()
            .map(RawNode::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs
            .as_ref()
            .and_then(|attrs| attrs.get(key))
            .filter(|value| !value.is_null())
    }

    fn string_attr(&self, key: &'static str) -> Result<Option<String>, TreeError> {
        match self.attr(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(TreeError::invalid(
                &self.node_type,
                key,
                format!("expected a string, found {other}"),
            )),
        }
    }

    fn required_string_attr(&self, key: &'static str) -> Result<String, TreeError> {
        self.string_attr(key)?.ok_or_else(|| TreeError::MissingField {
            node: self.node_type.clone(),
            field: key,
        })
    }

    fn integer_attr(&self, key: &'static str) -> Result<Option<u64>, TreeError> {
        match self.attr(key) {
            None => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                TreeError::invalid(
                    &self.node_type,
                    key,
                    format!("expected a non-negative integer, found {value}"),
                )
            }),
        }
    }

    fn heading_level(&self) -> Result<u8, TreeError> {
        match self.integer_attr("level")? {
            None => Ok(1),
            Some(level @ 1..=6) => Ok(level as u8),
            Some(level) => Err(TreeError::invalid(
                &self.node_type,
                "level",
                format!("expected 1-6, found {level}"),
            )),
        }
    }

    fn column_count(&self) -> Result<u32, TreeError> {
        let count = self
            .integer_attr("count")?
            .ok_or_else(|| TreeError::MissingField {
                node: self.node_type.clone(),
                field: "count",
            })?;
        u32::try_from(count)
            .map_err(|_| TreeError::invalid(&self.node_type, "count", format!("{count} is too large")))
    }

    fn attribute_bag(&self) -> Result<AttributeBag, TreeError> {
        let Some(attrs) = &self.attrs else {
            return Ok(AttributeBag::new());
        };
        serde_json::from_value::<AttributeBag>(Value::Object(attrs.clone()))
            .map(AttributeBag::canonicalized)
            .map_err(|e| TreeError::invalid(&self.node_type, "attrs", e.to_string()))
    }

    fn with_bag(mut self, bag: AttributeBag) -> Self {
        let mut attrs = Map::new();
        attrs.insert("id".into(), bag.id.map_or(Value::Null, Value::String));
        attrs.insert("classes".into(), bag.classes.map_or(Value::Null, Value::String));
        attrs.insert("styles".into(), bag.styles.map_or(Value::Null, string_map));
        attrs.insert("attributes".into(), bag.attributes.map_or(Value::Null, string_map));
        self.attrs = Some(attrs);
        self
    }
}

fn string_map(map: StyleMap) -> Value {
    Value::Object(map.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
}

fn blocks_from_raw(nodes: Option<Vec<RawNode>>) -> Result<Vec<Block>, TreeError> {
    nodes
        .unwrap_or_default()
        .into_iter()
        .map(Block::try_from)
        .collect()
}

fn inlines_from_raw(nodes: Option<Vec<RawNode>>) -> Result<Vec<Inline>, TreeError> {
    nodes
        .unwrap_or_default()
        .into_iter()
        .map(Inline::try_from)
        .collect()
}

fn blocks_to_raw(blocks: Vec<Block>) -> Vec<RawNode> {
    blocks.into_iter().map(RawNode::from).collect()
}

fn inlines_to_raw(inlines: Vec<Inline>) -> Vec<RawNode> {
    inlines.into_iter().map(RawNode::from).collect()
}

impl TryFrom<RawNode> for Document {
    type Error = TreeError;

    fn try_from(mut raw: RawNode) -> Result<Self, TreeError> {
        if raw.node_type != "doc" {
            return Err(TreeError::UnexpectedRoot(raw.node_type));
        }
        Ok(Document::new(blocks_from_raw(raw.content.take())?))
    }
}

impl From<Document> for RawNode {
    fn from(document: Document) -> Self {
        RawNode::new("doc").with_content(blocks_to_raw(document.content))
    }
}

impl TryFrom<RawNode> for Block {
    type Error = TreeError;

    fn try_from(mut raw: RawNode) -> Result<Self, TreeError> {
        let node_type = raw.node_type.clone();
        let block = match node_type.as_str() {
            "paragraph" => Block::Paragraph {
                content: inlines_from_raw(raw.content.take())?,
            },
            "heading" => Block::Heading {
                level: raw.heading_level()?,
                content: inlines_from_raw(raw.content.take())?,
            },
            "horizontalRule" => Block::HorizontalRule,
            "pageBreak" => Block::PageBreak {
                attrs: raw.attribute_bag()?,
            },
            "columnBreak" => Block::ColumnBreak {
                attrs: raw.attribute_bag()?,
            },
            "footnoteBlock" => Block::FootnoteBlock {
                content: blocks_from_raw(raw.content.take())?,
            },
            "quoteBlock" => Block::QuoteBlock {
                attribution: raw.string_attr("attribution")?,
                content: blocks_from_raw(raw.content.take())?,
            },
            "wideBlock" => Block::WideBlock {
                content: blocks_from_raw(raw.content.take())?,
            },
            "mustacheBlock" => Block::MustacheBlock {
                attrs: raw.attribute_bag()?,
                content: blocks_from_raw(raw.content.take())?,
            },
            "columnContainer" => Block::ColumnContainer {
                count: raw.column_count()?,
                content: blocks_from_raw(raw.content.take())?,
            },
            "header" => Block::Header {
                content: blocks_from_raw(raw.content.take())?,
            },
            "footer" => Block::Footer {
                content: blocks_from_raw(raw.content.take())?,
            },
            "pageNumber" => Block::PageNumber,
            other if INLINE_TYPES.contains(&other) => {
                return Err(TreeError::MisplacedNode {
                    node: node_type,
                    found: "inline",
                    expected: "block",
                })
            }
            _ => Block::Unknown(raw),
        };
        Ok(block)
    }
}

impl From<Block> for RawNode {
    fn from(block: Block) -> Self {
        match block {
            Block::Paragraph { content } => {
                RawNode::new("paragraph").with_content(inlines_to_raw(content))
            }
            Block::Heading { level, content } => RawNode::new("heading")
                .with_attr("level", level)
                .with_content(inlines_to_raw(content)),
            Block::HorizontalRule => RawNode::new("horizontalRule"),
            Block::PageBreak { attrs } => RawNode::new("pageBreak").with_bag(attrs),
            Block::ColumnBreak { attrs } => RawNode::new("columnBreak").with_bag(attrs),
            Block::FootnoteBlock { content } => {
                RawNode::new("footnoteBlock").with_content(blocks_to_raw(content))
            }
            Block::QuoteBlock {
                attribution,
                content,
            } => RawNode::new("quoteBlock")
                .with_attr("attribution", attribution)
                .with_content(blocks_to_raw(content)),
            Block::WideBlock { content } => {
                RawNode::new("wideBlock").with_content(blocks_to_raw(content))
            }
            Block::MustacheBlock { attrs, content } => RawNode::new("mustacheBlock")
                .with_bag(attrs)
                .with_content(blocks_to_raw(content)),
            Block::ColumnContainer { count, content } => RawNode::new("columnContainer")
                .with_attr("count", count)
                .with_content(blocks_to_raw(content)),
            Block::Header { content } => RawNode::new("header").with_content(blocks_to_raw(content)),
            Block::Footer { content } => RawNode::new("footer").with_content(blocks_to_raw(content)),
            Block::PageNumber => RawNode::new("pageNumber"),
            Block::Unknown(raw) => raw,
        }
    }
}

impl TryFrom<RawNode> for Inline {
    type Error = TreeError;

    fn try_from(mut raw: RawNode) -> Result<Self, TreeError> {
        let node_type = raw.node_type.clone();
        let inline = match node_type.as_str() {
            "text" => {
                let text = raw.text.take().ok_or_else(|| TreeError::MissingField {
                    node: "text".to_string(),
                    field: "text",
                })?;
                let mut marks: Vec<Mark> = Vec::new();
                for mark in raw.marks.take().unwrap_or_default().into_iter().map(Mark::from) {
                    if !marks.contains(&mark) {
                        marks.push(mark);
                    }
                }
                Inline::Text { text, marks }
            }
            "mustacheSpan" => Inline::MustacheSpan {
                attrs: raw.attribute_bag()?,
                content: inlines_from_raw(raw.content.take())?,
            },
            "iconMark" => Inline::IconMark {
                name: raw.required_string_attr("name")?,
            },
            "emoji" => Inline::Emoji {
                name: raw.required_string_attr("name")?,
                set: raw.string_attr("set")?.unwrap_or_else(|| "ei".to_string()),
            },
            other if BLOCK_TYPES.contains(&other) => {
                return Err(TreeError::MisplacedNode {
                    node: node_type,
                    found: "block",
                    expected: "inline",
                })
            }
            _ => Inline::Unknown(raw),
        };
        Ok(inline)
    }
}

impl From<Inline> for RawNode {
    fn from(inline: Inline) -> Self {
        match inline {
            Inline::Text { text, marks } => {
                let mut node = RawNode::new("text").with_text(text);
                if !marks.is_empty() {
                    node.marks = Some(marks.into_iter().map(RawMark::from).collect());
                }
                node
            }
            Inline::MustacheSpan { attrs, content } => RawNode::new("mustacheSpan")
                .with_bag(attrs)
                .with_content(inlines_to_raw(content)),
            Inline::IconMark { name } => RawNode::new("iconMark").with_attr("name", name),
            Inline::Emoji { name, set } => RawNode::new("emoji")
                .with_attr("name", name)
                .with_attr("set", set),
            Inline::Unknown(raw) => raw,
        }
    }
}

impl From<RawMark> for Mark {
    fn from(raw: RawMark) -> Self {
        match raw.mark_type.as_str() {
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "code" => Mark::Code,
            name => match MacroKind::from_mark_name(name) {
                Some(kind) => Mark::Macro(kind),
                None => Mark::Unknown(raw),
            },
        }
    }
}

impl From<Mark> for RawMark {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Unknown(raw) => raw,
            known => RawMark {
                mark_type: known.type_name().to_string(),
                attrs: None,
            },
        }
    }
}
