//! Error types
//!
//! Markup input never produces an error: every partial state of a live edit parses to
//! some valid tree (see [`Recovery`](crate::markup::recovery::Recovery)). The errors
//! here cover contract violations on the tree side and format dispatch.

use thiserror::Error;

/// A value handed over as a document tree that does not satisfy the tree contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("expected a `doc` root node, found `{0}`")]
    UnexpectedRoot(String),

    #[error("`{node}` is not allowed here: expected {expected} content, found {found} content")]
    MisplacedNode {
        node: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("`{node}` node is missing its `{field}` field")]
    MissingField { node: String, field: &'static str },

    #[error("`{node}` node has an invalid `{field}`: {reason}")]
    InvalidField {
        node: String,
        field: &'static str,
        reason: String,
    },
}

impl TreeError {
    pub(crate) fn invalid(node: &str, field: &'static str, reason: impl Into<String>) -> Self {
        TreeError::InvalidField {
            node: node.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the [`Format`](crate::markup::formats::Format) layer.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid document tree: {0}")]
    Tree(#[from] TreeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_node() {
        let err = TreeError::invalid("heading", "level", "expected 1-6, found 9");
        assert_eq!(
            err.to_string(),
            "`heading` node has an invalid `level`: expected 1-6, found 9"
        );

        let err = TreeError::MisplacedNode {
            node: "text".into(),
            found: "inline",
            expected: "block",
        };
        assert_eq!(
            err.to_string(),
            "`text` is not allowed here: expected block content, found inline content"
        );
    }

    #[test]
    fn tree_errors_convert_into_format_errors() {
        let err: FormatError = TreeError::UnexpectedRoot("paragraph".into()).into();
        assert!(matches!(err, FormatError::Tree(_)));
        assert_eq!(
            err.to_string(),
            "invalid document tree: expected a `doc` root node, found `paragraph`"
        );
    }
}
