//! Formats
//!
//! The document tree can be read from and written to several textual forms. Each one
//! implements [`Format`] and is looked up by name in a [`FormatRegistry`]:
//!
//!     markup    the sourcebook markup dialect (parse + serialize)
//!     json      the plain record tree handed to the renderer and storage (parse + serialize)
//!     yaml      the same record tree as YAML (parse + serialize)
//!     treeviz   one line per node, for inspection (serialize only)

pub mod format;
pub mod json;
pub mod markup;
pub mod registry;
pub mod serializer;
pub mod treeviz;
pub mod yaml;

pub use format::Format;
pub use json::JsonFormat;
pub use markup::MarkupFormat;
pub use registry::FormatRegistry;
pub use serializer::{serialize, serialize_with_rules, BreakSpelling, HeadingStyle, SerializeRules};
pub use treeviz::TreevizFormat;
pub use yaml::YamlFormat;
