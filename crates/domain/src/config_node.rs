//! Raw dashboard configuration as an explicit tree.
//!
//! Dashboard authors mix built-in and third-party cards freely, so nothing
//! about a card's shape can be assumed. [`ConfigNode`] keeps only the
//! distinctions the normalizer cares about: text, mappings (in document
//! order), sequences, and everything else.

use serde::Deserialize;

/// One node of a dashboard configuration tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ConfigNode {
    Text(String),
    Mapping(Vec<(String, ConfigNode)>),
    Sequence(Vec<ConfigNode>),
    /// Numbers, booleans, null.
    #[default]
    Other,
}

impl ConfigNode {
    /// Look up `key` when this node is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            Self::Mapping(entries) => entries
                .iter()
                .find_map(|(name, value)| (name == key).then_some(value)),
            _ => None,
        }
    }

    /// The text of this node, if it is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text stored under `key`, if any.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Self::as_text)
    }

    /// The text stored under `key` when it is present and non-empty.
    #[must_use]
    pub fn non_empty_text(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|text| !text.is_empty())
    }

    /// The elements stored under `key` when it holds a sequence, empty otherwise.
    #[must_use]
    pub fn items(&self, key: &str) -> &[ConfigNode] {
        match self.get(key) {
            Some(Self::Sequence(items)) => items,
            _ => &[],
        }
    }

    /// Whether `key` holds a sequence.
    #[must_use]
    pub fn has_sequence(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Self::Sequence(_)))
    }

    /// The card/view `type` discriminator, lowercased; empty when absent.
    #[must_use]
    pub fn kind(&self) -> String {
        self.text("type").unwrap_or_default().to_lowercase()
    }
}

impl From<serde_json::Value> for ConfigNode {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Other,
        }
    }
}

impl From<&str> for ConfigNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
