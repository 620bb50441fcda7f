//! Structured item records
//!
//! An [`ItemRecord`] names one tradable TF2 item exactly: base definition,
//! quality, and every modifier that changes which item it is. Parsing
//! produces a [`PartialRecord`] first, since a display name may fail to
//! resolve a definition index or a quality.

use serde::{Deserialize, Serialize};

/// Well-known quality ids.
pub mod quality {
    pub const NORMAL: u32 = 0;
    pub const GENUINE: u32 = 1;
    pub const VINTAGE: u32 = 3;
    pub const UNUSUAL: u32 = 5;
    pub const UNIQUE: u32 = 6;
    pub const STRANGE: u32 = 11;
    pub const COLLECTORS: u32 = 14;
    pub const DECORATED: u32 = 15;
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A fully resolved item: definition index, quality, and modifiers.
///
/// `craftable` and `tradable` default to `true`; every other modifier
/// defaults to absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub defindex: u32,
    pub quality: u32,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub craftable: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub tradable: bool,
    /// Killstreak tier: 1 basic, 2 specialized, 3 professional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killstreak: Option<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub australium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub festive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paintkit: Option<u32>,
    /// Wear tier 1 (Factory New) through 5 (Battle Scarred)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wear: Option<u8>,
    /// Elevated quality, e.g. Strange on an Unusual item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality2: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craft_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crate_series: Option<u32>,
    /// Definition index the tool applies to (kits, strangifiers, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Definition index the tool produces (fabricators, chemistry sets)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_quality: Option<u32>,
    /// Paint-can color as the decimal RGB value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint: Option<u32>,
}

impl ItemRecord {
    pub fn new(defindex: u32, quality: u32) -> Self {
        Self {
            defindex,
            quality,
            craftable: true,
            tradable: true,
            killstreak: None,
            australium: false,
            effect: None,
            festive: false,
            paintkit: None,
            wear: None,
            quality2: None,
            craft_number: None,
            crate_series: None,
            target: None,
            output: None,
            output_quality: None,
            paint: None,
        }
    }
}

/// A record under construction during name parsing. Unlike [`ItemRecord`],
/// the definition index and quality may still be unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRecord {
    pub defindex: Option<u32>,
    pub quality: Option<u32>,
    pub craftable: bool,
    pub tradable: bool,
    pub killstreak: Option<u8>,
    pub australium: bool,
    pub effect: Option<u32>,
    pub festive: bool,
    pub paintkit: Option<u32>,
    pub wear: Option<u8>,
    pub quality2: Option<u32>,
    pub craft_number: Option<u32>,
    pub crate_series: Option<u32>,
    pub target: Option<u32>,
    pub output: Option<u32>,
    pub output_quality: Option<u32>,
    pub paint: Option<u32>,
}

impl Default for PartialRecord {
    fn default() -> Self {
        Self {
            defindex: None,
            quality: None,
            craftable: true,
            tradable: true,
            killstreak: None,
            australium: false,
            effect: None,
            festive: false,
            paintkit: None,
            wear: None,
            quality2: None,
            craft_number: None,
            crate_series: None,
            target: None,
            output: None,
            output_quality: None,
            paint: None,
        }
    }
}

impl PartialRecord {
    /// Whether both mandatory fields resolved.
    pub fn is_resolved(&self) -> bool {
        self.defindex.is_some() && self.quality.is_some()
    }

    /// Convert into a complete record, or `None` if the definition index or
    /// quality never resolved.
    pub fn into_record(self) -> Option<ItemRecord> {
        let (defindex, quality) = (self.defindex?, self.quality?);
        Some(ItemRecord {
            defindex,
            quality,
            craftable: self.craftable,
            tradable: self.tradable,
            killstreak: self.killstreak,
            australium: self.australium,
            effect: self.effect,
            festive: self.festive,
            paintkit: self.paintkit,
            wear: self.wear,
            quality2: self.quality2,
            craft_number: self.craft_number,
            crate_series: self.crate_series,
            target: self.target,
            output: self.output,
            output_quality: self.output_quality,
            paint: self.paint,
        })
    }
}
