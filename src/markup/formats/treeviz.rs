//! Treeviz formatter for document trees
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     <prefix><connector> <icon> <label>
//!
//! Labels are trimmed and truncated to 30 characters.
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Paragraph: ¶
//!         Heading: §
//!         HorizontalRule: ―
//!         PageBreak: ⤓
//!         ColumnBreak: ⇥
//!         FootnoteBlock: ³
//!         QuoteBlock: "
//!         WideBlock: ⇔
//!         MustacheBlock: ❴
//!         ColumnContainer: ☷
//!         Header: ⊤
//!         Footer: ⊥
//!         PageNumber: #
//!     Inlines:
//!         Text: ◦
//!         MustacheSpan: ⟨
//!         IconMark: ★
//!         Emoji: ☺
//!     Anything else: ○

use super::format::Format;
use crate::markup::ast::{Block, Document, Inline, Mark};
use crate::markup::error::FormatError;
use crate::markup::style_tags;

const LABEL_WIDTH: usize = 30;

struct VizNode {
    icon: &'static str,
    label: String,
    children: Vec<VizNode>,
}

impl VizNode {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<VizNode>) -> Self {
        self.children = children;
        self
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let flat = s.replace('\n', " ");
    let flat = flat.trim();
    if flat.chars().count() > max_chars {
        let mut truncated = flat.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        flat.to_string()
    }
}

fn block_node(block: &Block) -> VizNode {
    let blocks = |content: &[Block]| content.iter().map(block_node).collect::<Vec<_>>();
    let inlines = |content: &[Inline]| content.iter().map(inline_node).collect::<Vec<_>>();
    match block {
        Block::Paragraph { content } => {
            VizNode::leaf("¶", block.plain_text()).with_children(inlines(content))
        }
        Block::Heading { level, content } => {
            VizNode::leaf("§", format!("h{} {}", level, block.plain_text()))
                .with_children(inlines(content))
        }
        Block::HorizontalRule => VizNode::leaf("―", "rule"),
        Block::PageBreak { attrs } => VizNode::leaf("⤓", style_tags::stringify(attrs)),
        Block::ColumnBreak { attrs } => VizNode::leaf("⇥", style_tags::stringify(attrs)),
        Block::FootnoteBlock { content } => {
            VizNode::leaf("³", "footnote").with_children(blocks(content))
        }
        Block::QuoteBlock {
            attribution,
            content,
        } => VizNode::leaf("\"", attribution.as_deref().unwrap_or("quote"))
            .with_children(blocks(content)),
        Block::WideBlock { content } => VizNode::leaf("⇔", "wide").with_children(blocks(content)),
        Block::MustacheBlock { attrs, content } => {
            VizNode::leaf("❴", style_tags::stringify(attrs)).with_children(blocks(content))
        }
        Block::ColumnContainer { count, content } => {
            VizNode::leaf("☷", format!("{} columns", count)).with_children(blocks(content))
        }
        Block::Header { content } => VizNode::leaf("⊤", "header").with_children(blocks(content)),
        Block::Footer { content } => VizNode::leaf("⊥", "footer").with_children(blocks(content)),
        Block::PageNumber => VizNode::leaf("#", "page number"),
        Block::Unknown(raw) => VizNode::leaf("○", format!("{} {}", raw.node_type, raw.plain_text())),
    }
}

fn inline_node(inline: &Inline) -> VizNode {
    match inline {
        Inline::Text { text, marks } if marks.is_empty() => VizNode::leaf("◦", text.as_str()),
        Inline::Text { text, marks } => {
            let names: Vec<&str> = marks.iter().map(Mark::type_name).collect();
            VizNode::leaf("◦", format!("[{}] {}", names.join(","), text))
        }
        Inline::MustacheSpan { attrs, content } => VizNode::leaf("⟨", style_tags::stringify(attrs))
            .with_children(content.iter().map(inline_node).collect()),
        Inline::IconMark { name } => VizNode::leaf("★", name.as_str()),
        Inline::Emoji { name, .. } => VizNode::leaf("☺", name.as_str()),
        Inline::Unknown(raw) => VizNode::leaf("○", format!("{} {}", raw.node_type, raw.plain_text())),
    }
}

fn format_node(node: &VizNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&node.label, LABEL_WIDTH);
    output.push_str(&format!("{}{} {}", prefix, connector, node.icon));
    if !label.is_empty() {
        output.push(' ');
        output.push_str(&label);
    }
    output.push('\n');
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, output);
}

fn format_children(children: &[VizNode], prefix: &str, output: &mut String) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == count - 1, output);
    }
}

/// Renders a document as a treeviz string.
pub fn to_treeviz_str(doc: &Document) -> String {
    let children: Vec<VizNode> = doc.content.iter().map(block_node).collect();
    let mut output = format!("⧉ Document ({} blocks)\n", doc.block_count());
    format_children(&children, "", &mut output);
    output
}

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree, one line per node"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
