//! Formats by name
//!
//! The CLI resolves `--from`/`--to` here. Only the markup format takes settings,
//! so a registry is always built from a set of [`SerializeRules`].

use super::format::Format;
use super::json::JsonFormat;
use super::markup::MarkupFormat;
use super::serializer::SerializeRules;
use super::treeviz::TreevizFormat;
use super::yaml::YamlFormat;
use crate::markup::ast::Document;
use crate::markup::error::FormatError;
use std::collections::BTreeMap;

pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// The built-in formats with default serializer rules.
    pub fn with_defaults() -> Self {
        Self::with_serialize_rules(SerializeRules::default())
    }

    pub fn with_serialize_rules(rules: SerializeRules) -> Self {
        let builtin: [Box<dyn Format>; 4] = [
            Box::new(MarkupFormat::new(rules)),
            Box::new(JsonFormat),
            Box::new(YamlFormat),
            Box::new(TreevizFormat),
        ];
        let formats = builtin
            .into_iter()
            .map(|format| (format.name().to_string(), format))
            .collect();
        Self { formats }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Format names in sorted order.
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Write-only formats answer with [`FormatError::NotSupported`].
    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        self.get(format)?.parse(source)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(doc)
    }
}
