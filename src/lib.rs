//! # brewmark
//!
//! Bidirectional conversion between sourcebook markup and a typed document tree.
//!
//! The markup is line oriented: headings, `{{...}}` custom blocks, inline
//! style-tagged spans, `\page`/`\column` break shorthand and one-line footnotes.
//! The engine is five pure functions:
//!
//!     markup ─▶ parse_document ─▶ Document ─▶ [normalize] ─▶ serialize ─▶ markup
//!
//! File Layout
//!
//! src/markup
//!   ├── ast            The typed tree, AttributeBag and the raw interchange node
//!   ├── style_tags     `#id,class,key:value,key="v"` parse / stringify
//!   ├── inlines        Mustache segmenter and inline tokenizer
//!   ├── parsing        Ordered line grammar and the block scan engine
//!   ├── normalization  Idempotent footnote promotion pass
//!   └── formats        Markup serializer, json/yaml/treeviz, Format registry
//!
//! None of the operations keep state between calls; they are safe to call from any
//! number of threads at once.

#![allow(rustdoc::invalid_html_tags)]

pub mod markup;

pub use markup::ast::{AttributeBag, Block, Document, Inline, MacroKind, Mark, RawNode};
pub use markup::error::{FormatError, TreeError};
pub use markup::formats::{
    serialize, serialize_with_rules, BreakSpelling, Format, FormatRegistry, HeadingStyle,
    SerializeRules,
};
pub use markup::inlines::parse_inlines;
pub use markup::normalization::normalize;
pub use markup::parsing::{parse_document, parse_document_with_report, ParseReport};
pub use markup::recovery::Recovery;
