//! Tree normalization
//!
//! Editors hand over whatever tree the last keystroke left behind. Text typed or pasted
//! into a paragraph can spell out a whole `{{footnote ...}}` even though the line
//! parser never saw it on one line. [`normalize`] walks the tree and promotes such
//! paragraphs to footnote blocks.
//!
//! The pass is idempotent: a promoted block is normalized again before it is returned,
//! so a second call finds nothing left to do. Nodes of unknown type are passed through.

use crate::markup::ast::{Block, Document, Inline};
use once_cell::sync::Lazy;
use regex::Regex;

static FOOTNOTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\{footnote\s+([\s\S]*?)\s*\}\}$").unwrap());

/// Returns the normalized form of `document`.
pub fn normalize(document: Document) -> Document {
    Document::new(normalize_blocks(document.content))
}

fn normalize_blocks(blocks: Vec<Block>) -> Vec<Block> {
    blocks.into_iter().map(normalize_block).collect()
}

fn normalize_block(mut block: Block) -> Block {
    if let Some(promoted) = promote_footnote(&block) {
        tracing::debug!("promoted paragraph to footnoteBlock");
        return normalize_block(promoted);
    }
    if let Some(children) = block.children_mut() {
        let taken = std::mem::take(children);
        *children = normalize_blocks(taken);
    }
    block
}

/// A paragraph of unmarked text spelling `{{footnote body}}` with a non-blank body.
fn promote_footnote(block: &Block) -> Option<Block> {
    let Block::Paragraph { content } = block else {
        return None;
    };
    let text = content
        .iter()
        .map(Inline::as_plain_text)
        .collect::<Option<Vec<_>>>()?
        .concat();
    let caps = FOOTNOTE_PATTERN.captures(text.trim())?;
    let body = caps.get(1)?.as_str().trim();
    if body.is_empty() {
        return None;
    }
    Some(Block::FootnoteBlock {
        content: vec![Block::paragraph(vec![Inline::text(body)])],
    })
}
