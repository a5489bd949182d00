//! Markup format
//!
//! Parsing delegates to the block parser and never fails; serializing uses the
//! configured [`SerializeRules`].

use super::format::Format;
use super::serializer::{serialize_with_rules, SerializeRules};
use crate::markup::ast::Document;
use crate::markup::error::FormatError;
use crate::markup::parsing::parse_document;

#[derive(Debug, Clone, Default)]
pub struct MarkupFormat {
    rules: SerializeRules,
}

impl MarkupFormat {
    pub fn new(rules: SerializeRules) -> Self {
        Self { rules }
    }
}

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Sourcebook markup"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_document(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_with_rules(doc, &self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::formats::serializer::HeadingStyle;

    #[test]
    fn test_markup_format_round_trip() {
        let format = MarkupFormat::default();
        let source = "# Title\n\n{{wide\nBody\n}}";
        let doc = format.parse(source).unwrap();
        assert_eq!(format.serialize(&doc).unwrap(), source);
    }

    #[test]
    fn test_markup_format_uses_rules() {
        let format = MarkupFormat::new(SerializeRules {
            heading_style: HeadingStyle::Collapse,
            ..SerializeRules::default()
        });
        let doc = format.parse("### Deep").unwrap();
        assert_eq!(format.serialize(&doc).unwrap(), "## Deep");
    }
}
