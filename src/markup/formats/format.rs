//! Format trait definition

use crate::markup::ast::Document;
use crate::markup::error::FormatError;

/// Bidirectional conversion between a string representation and a [`Document`].
///
/// Formats can support parsing, serialization, or both. The default `parse` and
/// `serialize` return [`FormatError::NotSupported`].
pub trait Format: Send + Sync {
    /// The name of this format (e.g. "markup", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
