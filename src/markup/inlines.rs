//! Inline tokenizing
//!
//! Turns a text run into inline nodes. The run is first cut into plain and mustache
//! segments (see [`segments`]), then each plain segment is scanned for marks and atomic
//! nodes by an ordered pattern table (see [`tokenizer`]). Mustache span contents are
//! tokenized recursively.

mod segments;
mod tokenizer;

pub use tokenizer::{parse_inlines, InlineRule};

pub(crate) use tokenizer::parse_inlines_with;
