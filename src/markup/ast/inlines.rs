//! Inline nodes and marks.

use super::attributes::AttributeBag;
use super::raw::{RawMark, RawNode};
use serde::{Deserialize, Serialize};

/// Named macro references written as `\kind{argument}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroKind {
    Spell,
    Ability,
    Skill,
    Condition,
    Damage,
}

impl MacroKind {
    pub const ALL: [MacroKind; 5] = [
        MacroKind::Spell,
        MacroKind::Ability,
        MacroKind::Skill,
        MacroKind::Condition,
        MacroKind::Damage,
    ];

    /// The word after the backslash in markup.
    pub fn keyword(self) -> &'static str {
        match self {
            MacroKind::Spell => "spell",
            MacroKind::Ability => "ability",
            MacroKind::Skill => "skill",
            MacroKind::Condition => "condition",
            MacroKind::Damage => "damage",
        }
    }

    /// The mark `type` name the renderer dispatches on.
    pub fn mark_name(self) -> &'static str {
        match self {
            MacroKind::Spell => "spellMark",
            MacroKind::Ability => "abilityMark",
            MacroKind::Skill => "skillMark",
            MacroKind::Condition => "conditionMark",
            MacroKind::Damage => "damageMark",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    pub fn from_mark_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.mark_name() == name)
    }
}

/// Annotation on a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMark", into = "RawMark")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Macro(MacroKind),
    /// A mark this crate does not know, kept verbatim.
    Unknown(RawMark),
}

impl Mark {
    pub fn type_name(&self) -> &str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Code => "code",
            Mark::Macro(kind) => kind.mark_name(),
            Mark::Unknown(raw) => &raw.mark_type,
        }
    }
}

/// Text-level content inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum Inline {
    /// A run of text. `marks` is an ordered set: no mark appears twice.
    Text { text: String, marks: Vec<Mark> },
    /// `{{tags content}}`
    MustacheSpan {
        attrs: AttributeBag,
        content: Vec<Inline>,
    },
    /// `:fa-name:`; the name keeps its `fa-`/`far-`/`fab-` prefix.
    IconMark { name: String },
    /// `:ei_name:`
    Emoji { name: String, set: String },
    Unknown(RawNode),
}

impl Inline {
    /// Unmarked text.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Text carrying a single mark.
    pub fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Inline::Text {
            text: text.into(),
            marks: vec![mark],
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::marked(text, Mark::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::marked(text, Mark::Italic)
    }

    pub fn type_name(&self) -> &str {
        match self {
            Inline::Text { .. } => "text",
            Inline::MustacheSpan { .. } => "mustacheSpan",
            Inline::IconMark { .. } => "iconMark",
            Inline::Emoji { .. } => "emoji",
            Inline::Unknown(raw) => &raw.node_type,
        }
    }

    /// Returns the text of a text node that has no marks.
    pub fn as_plain_text(&self) -> Option<&str> {
        match self {
            Inline::Text { text, marks } if marks.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Flattens this node to its text, dropping all structure.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text { text, .. } => text.clone(),
            Inline::MustacheSpan { content, .. } => content.iter().map(Inline::plain_text).collect(),
            Inline::IconMark { .. } | Inline::Emoji { .. } => String::new(),
            Inline::Unknown(raw) => raw.plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_names_round_trip() {
        for kind in MacroKind::ALL {
            assert_eq!(MacroKind::from_keyword(kind.keyword()), Some(kind));
            assert_eq!(MacroKind::from_mark_name(kind.mark_name()), Some(kind));
        }
        assert_eq!(MacroKind::from_keyword("cantrip"), None);
    }

    #[test]
    fn plain_text_only_for_unmarked_text() {
        assert_eq!(Inline::text("a").as_plain_text(), Some("a"));
        assert_eq!(Inline::bold("a").as_plain_text(), None);
        assert_eq!(
            Inline::IconMark {
                name: "fa-dragon".into()
            }
            .as_plain_text(),
            None
        );
    }

    #[test]
    fn plain_text_flattens_spans() {
        let span = Inline::MustacheSpan {
            attrs: AttributeBag::new(),
            content: vec![Inline::text("Brandon "), Inline::bold("Sanderson")],
        };
        assert_eq!(span.plain_text(), "Brandon Sanderson");
    }
}
