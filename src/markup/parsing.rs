//! Block parsing
//!
//!     Markup is read line by line. Each trimmed line is classified by the ordered line
//!     grammar in [`line_grammar`]; the scan engine in [`engine`] turns the classified
//!     lines into blocks, buffering paragraph text and tracking the one custom block that
//!     may be open at a time.
//!
//!     Parsing never fails. Unclosed blocks are closed at end of input, unmatched `{{`
//!     stays text, malformed style tags become class names. What was recovered is
//!     available from [`parse_document_with_report`].

pub mod line_grammar;

mod engine;

use crate::markup::ast::Document;
use crate::markup::recovery::Recovery;
use engine::ParseState;

/// A parsed document plus the recoveries made while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub document: Document,
    pub recoveries: Vec<Recovery>,
}

/// Parses markup into a document tree.
pub fn parse_document(source: &str) -> Document {
    parse_document_with_report(source).document
}

/// Parses markup and reports every recovery made on the way.
pub fn parse_document_with_report(source: &str) -> ParseReport {
    let mut state = ParseState::new();
    for line in source.lines() {
        state.push_line(line);
    }
    let (document, recoveries) = state.finish();
    tracing::debug!(
        blocks = document.content.len(),
        recoveries = recoveries.len(),
        "parsed document"
    );
    ParseReport {
        document,
        recoveries,
    }
}
