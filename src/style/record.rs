//! The primitive style output: an ordered property map with nested blocks.
//!
//! A [`StyleRecord`] maps CSS property names (kebab-case) to [`StyleValue`]s.
//! Keys starting with `&` are pseudo-selector blocks (`&:hover`), keys
//! starting with `@` are media-query blocks. Insertion order is preserved so
//! that output is deterministic and flat properties render before blocks.

use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::style::scalar::fmt_number;

/// A single style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A unitless number (opacity, z-index, flex-grow, font-weight).
    Number(f64),
    /// A length in pixels.
    Px(f64),
    /// A pass-through string (`"100%"`, `"#5b94f0"`, `"ease-in-out"`).
    Str(String),
    /// A nested block keyed by a pseudo-selector or media query.
    Block(StyleRecord),
}

impl StyleValue {
    /// Render the value as CSS text. Blocks have no scalar text.
    pub fn css_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(fmt_number(*n)),
            Self::Px(n) => Some(format!("{}px", fmt_number(*n))),
            Self::Str(s) => Some(s.clone()),
            Self::Block(_) => None,
        }
    }

    /// Returns the nested record for block values.
    pub fn as_block(&self) -> Option<&StyleRecord> {
        match self {
            Self::Block(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Px(n) => serializer.serialize_str(&format!("{}px", fmt_number(*n))),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Block(record) => record.serialize(serializer),
        }
    }
}

/// An insertion-ordered map of style properties and nested blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    entries: Vec<(String, StyleValue)>,
}

impl StyleRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries (flat properties and blocks).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Set a property, overwriting any existing value in place. The first
    /// insertion of a key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set a pixel length.
    pub fn set_px(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, StyleValue::Px(value));
    }

    /// Set a unitless number.
    pub fn set_num(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, StyleValue::Number(value));
    }

    /// Set a string value.
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, StyleValue::Str(value.into()));
    }

    /// Set a nested block. Empty blocks are dropped.
    pub fn set_block(&mut self, key: impl Into<String>, block: StyleRecord) {
        if !block.is_empty() {
            self.set(key, StyleValue::Block(block));
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a nested block by key.
    pub fn get_block(&self, key: &str) -> Option<&StyleRecord> {
        self.get(key).and_then(StyleValue::as_block)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `other` on top of `self`: every key in `other` wins. When both
    /// sides hold a block under the same key the blocks merge recursively, so
    /// an override can adjust a single property inside `&:hover` without
    /// discarding the rest of the block.
    pub fn merge(&self, other: &StyleRecord) -> StyleRecord {
        let mut merged = self.clone();
        merged.merge_in(other);
        merged
    }

    /// In-place variant of [`merge`](Self::merge).
    pub fn merge_in(&mut self, other: &StyleRecord) {
        for (key, value) in &other.entries {
            let merged = match (self.get(key), value) {
                (Some(StyleValue::Block(base)), StyleValue::Block(over)) => {
                    StyleValue::Block(base.merge(over))
                }
                _ => value.clone(),
            };
            self.set(key.clone(), merged);
        }
    }

    /// Render the record as a CSS rule set for `selector`.
    ///
    /// Flat properties form one rule; `&`-prefixed blocks become derived
    /// selectors (`&:hover` → `.btn:hover`); `@`-prefixed blocks wrap a rule
    /// for the same selector. Blocks render after the flat rule, in insertion
    /// order.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        let flat: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, v)| !matches!(v, StyleValue::Block(_)))
            .collect();

        if !flat.is_empty() {
            let _ = writeln!(out, "{selector} {{");
            for (key, value) in &flat {
                if let Some(text) = value.css_text() {
                    let _ = writeln!(out, "  {key}: {text};");
                }
            }
            let _ = writeln!(out, "}}");
        }

        for (key, value) in &self.entries {
            let StyleValue::Block(block) = value else {
                continue;
            };
            if let Some(rest) = key.strip_prefix('&') {
                out.push_str(&block.to_css(&format!("{selector}{rest}")));
            } else if key.starts_with('@') {
                let _ = writeln!(out, "{key} {{");
                for line in block.to_css(selector).lines() {
                    let _ = writeln!(out, "  {line}");
                }
                let _ = writeln!(out, "}}");
            } else {
                // Unrecognized block key: treat as a descendant selector.
                out.push_str(&block.to_css(&format!("{selector} {key}")));
            }
        }

        out
    }
}

impl Serialize for StyleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl FromIterator<(String, StyleValue)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        let mut record = StyleRecord::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}
