//! Raw catalog snapshot data model
//!
//! The snapshot is produced by an external fetch collaborator (Steam Web API
//! pagination plus the items_game key/value file) and handed to this crate
//! fully parsed. Nothing here performs I/O; the types only describe the shape
//! the rest of the crate consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One item definition from the primary catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Internal name, e.g. `"Paint Can 1"` or `"Paintkit 206"`
    pub name: String,
    pub defindex: u32,
    pub item_class: String,
    /// Display name, e.g. `"Indubitably Green"`
    pub item_name: String,
    #[serde(default)]
    pub proper_name: bool,
    pub item_quality: u32,
    #[serde(default)]
    pub craft_class: Option<String>,
    #[serde(default)]
    pub capabilities: Option<Capabilities>,
    #[serde(default)]
    pub used_by_classes: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
}

/// Capability flags on a catalog item. Only the flags the crate reads are
/// modeled; unknown flags are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub paintable: bool,
    #[serde(default)]
    pub nameable: bool,
    #[serde(default)]
    pub can_gift_wrap: bool,
}

/// An attribute attached to a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub name: String,
    pub class: String,
    pub value: f64,
}

/// One attribute definition from the catalog's attribute table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    pub defindex: u32,
    #[serde(default)]
    pub attribute_class: Option<String>,
}

/// One unusual-effect particle definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub system: Option<String>,
}

/// One kill-tracking score type (the source of the strange-parts export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreType {
    #[serde(rename = "type")]
    pub type_id: u32,
    pub type_name: String,
}

/// The secondary machine-readable item catalog, keyed by defindex. Only the
/// static attributes are kept; they carry crate-series values missing from
/// the primary catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsGame {
    #[serde(default)]
    pub items: BTreeMap<u32, ItemsGameEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsGameEntry {
    #[serde(default)]
    pub static_attrs: BTreeMap<String, serde_json::Value>,
}

/// A complete catalog snapshot, immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    /// `attribute_controlled_attached_particles` in the upstream response
    #[serde(default)]
    pub particles: Vec<ParticleEffect>,
    /// Internal quality key -> quality id, e.g. `"rarity4" -> 5`
    #[serde(default)]
    pub qualities: BTreeMap<String, u32>,
    /// Internal quality key -> display name, e.g. `"rarity4" -> "Unusual"`
    #[serde(default)]
    pub quality_names: BTreeMap<String, String>,
    /// Paintkit id -> paintkit display name
    #[serde(default)]
    pub paintkits: BTreeMap<u32, String>,
    #[serde(default)]
    pub score_types: Vec<ScoreType>,
    #[serde(default)]
    pub items_game: ItemsGame,
}

impl CatalogSnapshot {
    /// Coerce an items_game static attribute to a number. The key/value
    /// source stores these either as a bare scalar or as `{ "value": ... }`.
    pub(crate) fn static_attr_value(value: &serde_json::Value) -> Option<u32> {
        let scalar = match value {
            serde_json::Value::Object(map) => map.get("value")?,
            other => other,
        };
        match scalar {
            serde_json::Value::Number(n) => n.as_u64().map(|v| v as u32),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
