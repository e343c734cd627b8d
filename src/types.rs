//! Common types used throughout combination-feed
//!
//! Wire shapes for the combinations endpoint plus the bean record shapes
//! served by the same API.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Combination Records
// ============================================================================

/// A single combination record as returned by the API.
///
/// Only `combinationId` matters to pagination; every other field is kept
/// verbatim so renderers can show whatever the API sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationRecord {
    /// Identity key used for deduplication
    #[serde(rename = "combinationId", deserialize_with = "string_or_number")]
    pub combination_id: String,
    /// Remaining descriptive fields
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl CombinationRecord {
    /// Create a record with no descriptive fields
    pub fn new(combination_id: impl Into<String>) -> Self {
        Self {
            combination_id: combination_id.into(),
            fields: JsonObject::new(),
        }
    }

    /// Add a descriptive field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Identity key
    pub fn id(&self) -> &str {
        &self.combination_id
    }

    /// Look up a descriptive field
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    /// Human-readable label, taken from the `name` field when present
    pub fn label(&self) -> &str {
        self.fields
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or(self.combination_id.as_str())
    }
}

/// One page of the combinations endpoint:
/// `{ "items": [...], "totalCount": n }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationPage {
    /// Records on this page
    pub items: Vec<CombinationRecord>,
    /// Server-reported total across all pages
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl CombinationPage {
    /// Create a page from records and a total count
    pub fn new(items: Vec<CombinationRecord>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

/// The API has served ids both as strings and as integers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for combinationId, got {other}"
        ))),
    }
}

// ============================================================================
// Bean Records
// ============================================================================

/// Short bean description used in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanType {
    pub bean_id: String,
    pub flavor_name: String,
    pub image_url: String,
    pub description: String,
}

/// Full bean card with grouping and dietary flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanCard {
    pub bean_id: String,
    #[serde(default)]
    pub group_name: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub flavor_name: String,
    pub description: String,
    pub color_group: String,
    pub background_color: String,
    pub image_url: String,
    pub gluten_free: bool,
    pub sugar_free: bool,
    pub seasonal: bool,
    pub kosher: bool,
}

impl From<&BeanCard> for BeanType {
    fn from(card: &BeanCard) -> Self {
        Self {
            bean_id: card.bean_id.clone(),
            flavor_name: card.flavor_name.clone(),
            image_url: card.image_url.clone(),
            description: card.description.clone(),
        }
    }
}
