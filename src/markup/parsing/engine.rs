//! Block scan engine
//!
//! A single forward pass over the input lines. All mutable state for one call lives in
//! [`ParseState`]: the finished top-level blocks, the pending paragraph lines and the
//! one custom block that may be open. Custom blocks never nest; opening a block closes
//! the one that is open.

use super::line_grammar::{classify_line, LineContext, LineRule, NamedBlock};
use crate::markup::ast::{AttributeBag, Block, Document};
use crate::markup::inlines::parse_inlines_with;
use crate::markup::recovery::{Recovery, RecoverySink};
use crate::markup::style_tags;

#[derive(Debug)]
enum OpenKind {
    Quote { attribution: Option<String> },
    Wide,
    Header,
    Footer,
    Mustache(AttributeBag),
    Columns(u32),
}

impl OpenKind {
    fn type_name(&self) -> &'static str {
        match self {
            OpenKind::Quote { .. } => "quoteBlock",
            OpenKind::Wide => "wideBlock",
            OpenKind::Header => "header",
            OpenKind::Footer => "footer",
            OpenKind::Mustache(_) => "mustacheBlock",
            OpenKind::Columns(_) => "columnContainer",
        }
    }
}

impl From<NamedBlock> for OpenKind {
    fn from(named: NamedBlock) -> Self {
        match named {
            NamedBlock::Quote => OpenKind::Quote { attribution: None },
            NamedBlock::Wide => OpenKind::Wide,
            NamedBlock::Header => OpenKind::Header,
            NamedBlock::Footer => OpenKind::Footer,
        }
    }
}

#[derive(Debug)]
struct OpenBlock {
    kind: OpenKind,
    children: Vec<Block>,
}

impl OpenBlock {
    fn into_block(self) -> Block {
        let content = self.children;
        match self.kind {
            OpenKind::Quote { attribution } => Block::QuoteBlock {
                attribution,
                content,
            },
            OpenKind::Wide => Block::WideBlock { content },
            OpenKind::Header => Block::Header { content },
            OpenKind::Footer => Block::Footer { content },
            OpenKind::Mustache(attrs) => Block::MustacheBlock { attrs, content },
            OpenKind::Columns(count) => Block::ColumnContainer { count, content },
        }
    }
}

/// Mutable state of one parse call.
pub(crate) struct ParseState<'s> {
    blocks: Vec<Block>,
    paragraph: Vec<&'s str>,
    open: Option<OpenBlock>,
    sink: RecoverySink,
}

impl<'s> ParseState<'s> {
    pub(crate) fn new() -> Self {
        Self {
            blocks: Vec::new(),
            paragraph: Vec::new(),
            open: None,
            sink: RecoverySink::new(),
        }
    }

    fn context(&self) -> LineContext {
        LineContext {
            quote_open: matches!(
                self.open,
                Some(OpenBlock {
                    kind: OpenKind::Quote { .. },
                    ..
                })
            ),
        }
    }

    pub(crate) fn push_line(&mut self, line: &'s str) {
        let trimmed = line.trim();
        let context = self.context();
        let Some(rule) = classify_line(trimmed, context, &mut self.sink) else {
            self.paragraph.push(line);
            return;
        };
        tracing::trace!(rule = ?rule, "line");
        self.flush_paragraph();

        match rule {
            LineRule::Blank => {}
            LineRule::PageBreak { tags } => {
                self.close_block();
                let attrs = style_tags::parse_with(tags, &mut self.sink);
                self.blocks.push(Block::PageBreak { attrs });
            }
            LineRule::ColumnBreak { tags } => {
                self.close_block();
                let attrs = style_tags::parse_with(tags, &mut self.sink);
                self.blocks.push(Block::ColumnBreak { attrs });
            }
            LineRule::Footnote { body } => {
                let content = parse_inlines_with(body, &mut self.sink);
                self.emit(Block::FootnoteBlock {
                    content: vec![Block::paragraph(content)],
                });
            }
            LineRule::OpenNamedBlock(named) => self.open_block(named.into()),
            LineRule::PageNumber => self.emit(Block::PageNumber),
            LineRule::InlineColumnBreak => self.emit(Block::ColumnBreak {
                attrs: AttributeBag::new(),
            }),
            LineRule::ColumnCount(count) => self.open_block(OpenKind::Columns(count)),
            LineRule::Attribution(text) => {
                if let Some(OpenBlock {
                    kind: OpenKind::Quote { attribution },
                    ..
                }) = &mut self.open
                {
                    *attribution = Some(text.to_string());
                }
            }
            LineRule::OpenMustacheBlock { tags } => {
                let attrs = style_tags::parse_with(tags, &mut self.sink);
                self.open_block(OpenKind::Mustache(attrs));
            }
            LineRule::CloseBlock => self.close_block(),
            LineRule::Heading { level, text } => {
                let content = parse_inlines_with(text, &mut self.sink);
                self.emit(Block::heading(level, content));
            }
            LineRule::HorizontalRule => self.emit(Block::HorizontalRule),
        }
    }

    /// Closes any open block and returns the finished document with its recoveries.
    pub(crate) fn finish(mut self) -> (Document, Vec<Recovery>) {
        self.flush_paragraph();
        if let Some(open) = &self.open {
            let block = open.kind.type_name();
            self.sink.record(Recovery::UnterminatedBlock { block });
            self.close_block();
        }
        (Document::new(self.blocks), self.sink.into_recoveries())
    }

    /// Appends a block to the open block, or to the top level when none is open.
    fn emit(&mut self, block: Block) {
        match &mut self.open {
            Some(open) => open.children.push(block),
            None => self.blocks.push(block),
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join("\n");
        let content = parse_inlines_with(&text, &mut self.sink);
        self.emit(Block::paragraph(content));
    }

    fn open_block(&mut self, kind: OpenKind) {
        self.close_block();
        tracing::debug!(block = kind.type_name(), "open block");
        self.open = Some(OpenBlock {
            kind,
            children: Vec::new(),
        });
    }

    fn close_block(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::debug!(
                block = open.kind.type_name(),
                children = open.children.len(),
                "close block"
            );
            self.blocks.push(open.into_block());
        }
    }
}
