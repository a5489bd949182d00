//! Recovered parse conditions
//!
//!     Markup arrives keystroke by keystroke from a live editor, so every partial state
//!     has to parse to something valid. The conditions below are never errors; the parser
//!     recovers locally and records what it did. Each recovery is also emitted as a
//!     `tracing` debug event under the `brewmark::recovery` target.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// A style-tag token that is not a valid id, style or attribute; kept as a class name.
    MalformedAttributeToken { token: String },
    /// A custom block still open at end of input; closed implicitly.
    UnterminatedBlock { block: &'static str },
    /// `{{` with no following `}}`; the rest of the run is kept as text.
    UnterminatedMustacheSpan { text: String },
    /// `{{footnote}}` with a whitespace-only body; left as paragraph text.
    EmptyFootnote { line: String },
}

impl Recovery {
    pub fn kind(&self) -> &'static str {
        match self {
            Recovery::MalformedAttributeToken { .. } => "malformed-attribute-token",
            Recovery::UnterminatedBlock { .. } => "unterminated-block",
            Recovery::UnterminatedMustacheSpan { .. } => "unterminated-mustache-span",
            Recovery::EmptyFootnote { .. } => "empty-footnote",
        }
    }
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recovery::MalformedAttributeToken { token } => {
                write!(f, "style tag token '{}' kept as a class name", token)
            }
            Recovery::UnterminatedBlock { block } => {
                write!(f, "{} was never closed with '}}}}'; closed at end of input", block)
            }
            Recovery::UnterminatedMustacheSpan { text } => {
                write!(f, "'{{{{' without '}}}}' kept as text: {}", text)
            }
            Recovery::EmptyFootnote { line } => {
                write!(f, "empty footnote left as paragraph text: {}", line)
            }
        }
    }
}

/// Collects recoveries for one parse call.
///
/// A sink is created per call and threaded through the components by reference; it is
/// never shared between calls.
#[derive(Debug, Default)]
pub struct RecoverySink {
    recoveries: Vec<Recovery>,
}

impl RecoverySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, recovery: Recovery) {
        tracing::debug!(target: "brewmark::recovery", kind = recovery.kind(), "{}", recovery);
        self.recoveries.push(recovery);
    }

    pub fn into_recoveries(self) -> Vec<Recovery> {
        self.recoveries
    }
}
