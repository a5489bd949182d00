//! Block nodes.

use super::attributes::AttributeBag;
use super::inlines::Inline;
use super::raw::RawNode;
use serde::{Deserialize, Serialize};

/// A node occupying one or more whole lines.
///
/// Custom blocks (quote, wide, mustache, column container, header, footer) own
/// further blocks; they never nest inside one another when built by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    Heading {
        /// 1 to 6.
        level: u8,
        content: Vec<Inline>,
    },
    HorizontalRule,
    PageBreak {
        attrs: AttributeBag,
    },
    ColumnBreak {
        attrs: AttributeBag,
    },
    FootnoteBlock {
        content: Vec<Block>,
    },
    QuoteBlock {
        attribution: Option<String>,
        content: Vec<Block>,
    },
    WideBlock {
        content: Vec<Block>,
    },
    MustacheBlock {
        attrs: AttributeBag,
        content: Vec<Block>,
    },
    ColumnContainer {
        count: u32,
        content: Vec<Block>,
    },
    Header {
        content: Vec<Block>,
    },
    Footer {
        content: Vec<Block>,
    },
    PageNumber,
    Unknown(RawNode),
}

impl Block {
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// The paragraph synthesized for empty documents.
    pub fn empty_paragraph() -> Self {
        Block::Paragraph {
            content: Vec::new(),
        }
    }

    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading { level, content }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::HorizontalRule => "horizontalRule",
            Block::PageBreak { .. } => "pageBreak",
            Block::ColumnBreak { .. } => "columnBreak",
            Block::FootnoteBlock { .. } => "footnoteBlock",
            Block::QuoteBlock { .. } => "quoteBlock",
            Block::WideBlock { .. } => "wideBlock",
            Block::MustacheBlock { .. } => "mustacheBlock",
            Block::ColumnContainer { .. } => "columnContainer",
            Block::Header { .. } => "header",
            Block::Footer { .. } => "footer",
            Block::PageNumber => "pageNumber",
            Block::Unknown(raw) => &raw.node_type,
        }
    }

    /// Child blocks of a block-bearing node.
    pub fn children(&self) -> Option<&[Block]> {
        match self {
            Block::FootnoteBlock { content }
            | Block::QuoteBlock { content, .. }
            | Block::WideBlock { content }
            | Block::MustacheBlock { content, .. }
            | Block::ColumnContainer { content, .. }
            | Block::Header { content }
            | Block::Footer { content } => Some(content),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Block::FootnoteBlock { content }
            | Block::QuoteBlock { content, .. }
            | Block::WideBlock { content }
            | Block::MustacheBlock { content, .. }
            | Block::ColumnContainer { content, .. }
            | Block::Header { content }
            | Block::Footer { content } => Some(content),
            _ => None,
        }
    }

    /// Inline run of a text-bearing node.
    pub fn inline_content(&self) -> Option<&[Inline]> {
        match self {
            Block::Paragraph { content } | Block::Heading { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Flattens this node to its text, one line per text-bearing descendant.
    pub fn plain_text(&self) -> String {
        if let Some(inlines) = self.inline_content() {
            return inlines.iter().map(Inline::plain_text).collect();
        }
        if let Some(children) = self.children() {
            return children
                .iter()
                .map(Block::plain_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
        }
        match self {
            Block::Unknown(raw) => raw.plain_text(),
            _ => String::new(),
        }
    }
}
