//! Document root

use super::blocks::Block;
use super::raw::RawNode;
use serde::{Deserialize, Serialize};

/// Root of the tree. Always holds at least one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub struct Document {
    pub content: Vec<Block>,
}

impl Document {
    /// Builds a document, synthesizing an empty paragraph when `content` is empty.
    pub fn new(mut content: Vec<Block>) -> Self {
        if content.is_empty() {
            content.push(Block::empty_paragraph());
        }
        Self { content }
    }

    /// A document holding only an empty paragraph.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.content
    }

    /// Counts every block in the tree, containers and their descendants alike.
    pub fn block_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|block| 1 + block.children().map_or(0, count))
                .sum()
        }
        count(&self.content)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
