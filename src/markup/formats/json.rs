//! JSON tree format
//!
//! The record tree `{type, attrs, content, text, marks}` consumed by the renderer and
//! written verbatim to storage. Syntax errors surface as [`FormatError::Parse`]; JSON
//! that is well formed but breaks the tree contract surfaces as [`FormatError::Tree`].

use super::format::Format;
use crate::markup::ast::{Document, RawNode};
use crate::markup::error::FormatError;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let raw: RawNode =
            serde_json::from_str(source).map_err(|e| FormatError::Parse(e.to_string()))?;
        Ok(Document::try_from(raw)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::{Block, Inline};
    use crate::markup::error::TreeError;

    #[test]
    fn test_json_reads_record_tree() {
        let source = r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#;
        let doc = JsonFormat.parse(source).unwrap();
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Inline::text("hi")])]
        );
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(matches!(
            JsonFormat.parse("{"),
            Err(FormatError::Parse(_))
        ));
    }

    #[test]
    fn test_json_contract_violation() {
        let result = JsonFormat.parse(r#"{"type":"paragraph"}"#);
        assert!(matches!(
            result,
            Err(FormatError::Tree(TreeError::UnexpectedRoot(_)))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Document::new(vec![Block::heading(2, vec![Inline::bold("x")])]);
        let json = JsonFormat.serialize(&doc).unwrap();
        assert_eq!(JsonFormat.parse(&json).unwrap(), doc);
    }
}
