//! Attribute bag carried by style-tagged nodes
//!
//! Absent fields are `None`, never an empty string or an empty map. Every
//! constructor and the raw-node conversion go through [`AttributeBag::canonicalized`]
//! so two bags describing the same attributes always compare equal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered `key -> value` map used for both styles and plain attributes.
pub type StyleMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBag {
    #[serde(default)]
    pub id: Option<String>,
    /// Space-joined class list.
    #[serde(default)]
    pub classes: Option<String>,
    #[serde(default)]
    pub styles: Option<StyleMap>,
    #[serde(default)]
    pub attributes: Option<StyleMap>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.classes.is_none()
            && self.styles.is_none()
            && self.attributes.is_none()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a class after any existing ones.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.push_class(&class.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles
            .get_or_insert_with(StyleMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(StyleMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub(crate) fn push_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        match &mut self.classes {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.classes = Some(class.to_string()),
        }
    }

    /// Iterates the individual class names in order.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
    }

    /// Collapses empty strings and empty maps to `None`.
    pub fn canonicalized(mut self) -> Self {
        if self.id.as_deref() == Some("") {
            self.id = None;
        }
        if let Some(classes) = &self.classes {
            let joined = classes.split_whitespace().collect::<Vec<_>>().join(" ");
            self.classes = if joined.is_empty() { None } else { Some(joined) };
        }
        if self.styles.as_ref().is_some_and(|m| m.is_empty()) {
            self.styles = None;
        }
        if self.attributes.as_ref().is_some_and(|m| m.is_empty()) {
            self.attributes = None;
        }
        self
    }
}
