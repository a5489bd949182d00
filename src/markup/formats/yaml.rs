//! YAML tree format, the same record tree as [`JsonFormat`](super::JsonFormat).

use super::format::Format;
use crate::markup::ast::{Document, RawNode};
use crate::markup::error::FormatError;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Document tree as YAML"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let raw: RawNode =
            serde_yaml::from_str(source).map_err(|e| FormatError::Parse(e.to_string()))?;
        Ok(Document::try_from(raw)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
