//! Document tree
//!
//!     The typed tree the parser builds and the serializer consumes. It is a rooted,
//!     ordered tree: a [`Document`] owns [`Block`]s, blocks own either further blocks
//!     (containers) or [`Inline`] runs, and text inlines carry [`Mark`]s.
//!
//!     The renderer and the persistence layer see the tree as plain records of the shape
//!     `{type, attrs, content, text, marks}`. That shape is the [`RawNode`]; every typed
//!     node converts to and from it, and the `serde` implementations of the typed nodes
//!     go through it so the `type` names and `attrs` layouts stay a stable contract.
//!
//!     Nodes whose `type` is not known to this crate are kept as `Unknown(RawNode)` so a
//!     tree produced by a newer editor survives a load/save cycle untouched.

mod attributes;
mod blocks;
mod document;
mod inlines;
mod raw;

pub use attributes::{AttributeBag, StyleMap};
pub use blocks::Block;
pub use document::Document;
pub use inlines::{Inline, MacroKind, Mark};
pub use raw::{RawMark, RawNode};
