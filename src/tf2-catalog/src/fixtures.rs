//! Shared test catalog
//!
//! A hand-built snapshot small enough to reason about, with one example of
//! every shape the lookups care about: stock and upgradeable weapons, the
//! duplicate Name Tag, paint cans, retired keys, crates with and without
//! series attributes, decorated skin items, and the tool family.

use std::collections::BTreeMap;

use serde_json::json;

use crate::catalog::Catalog;
use crate::snapshot::{
    AttributeDef, Capabilities, CatalogItem, CatalogSnapshot, ItemAttribute, ItemsGame,
    ItemsGameEntry, ParticleEffect, ScoreType,
};

fn item(
    defindex: u32,
    name: &str,
    item_name: &str,
    item_class: &str,
    item_quality: u32,
) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        defindex,
        item_class: item_class.to_string(),
        item_name: item_name.to_string(),
        proper_name: false,
        item_quality,
        craft_class: None,
        capabilities: None,
        used_by_classes: Vec::new(),
        attributes: Vec::new(),
    }
}

fn weapon(defindex: u32, name: &str, item_name: &str, class: &str) -> CatalogItem {
    CatalogItem {
        craft_class: Some("weapon".to_string()),
        used_by_classes: vec![class.to_string()],
        ..item(defindex, name, item_name, "tf_weapon", 6)
    }
}

fn paint_can(defindex: u32, name: &str, item_name: &str, decimal: f64) -> CatalogItem {
    CatalogItem {
        attributes: vec![ItemAttribute {
            name: "set item tint RGB".to_string(),
            class: "set_item_tint_rgb".to_string(),
            value: decimal,
        }],
        ..item(defindex, name, item_name, "tool", 6)
    }
}

fn supply_crate(defindex: u32, name: &str, item_name: &str) -> CatalogItem {
    item(defindex, name, item_name, "supply_crate", 6)
}

pub(crate) fn snapshot() -> CatalogSnapshot {
    let mut items = vec![
        CatalogItem {
            item_quality: 0,
            craft_class: Some("weapon".to_string()),
            ..item(13, "TF_WEAPON_SCATTERGUN", "Scattergun", "tf_weapon_scattergun", 0)
        },
        weapon(200, "upgradeable_TF_WEAPON_SCATTERGUN", "Scattergun", "Scout"),
        weapon(348, "Sharpened Volcano Fragment", "Sharpened Volcano Fragment", "Pyro"),
        CatalogItem {
            proper_name: true,
            ..item(347, "The Essential Accessories", "Essential Accessories", "tf_wearable", 6)
        },
        weapon(466, "The Maul", "Maul", "Soldier"),
        weapon(810, "The Red-Tape Recorder", "Red-Tape Recorder", "Spy"),
        item(831, "The Red-Tape Recorder Genuine", "Red-Tape Recorder", "tf_weapon", 1),
        item(1172, "Taunt: Kazotsky Kick", "Taunt: Kazotsky Kick", "tf_wearable", 6),
        item(2093, "TTG Name Tag", "Name Tag", "tool", 6),
        item(5020, "Name Tag", "Name Tag", "tool", 6),
        item(5021, "Decoder Ring", "Mann Co. Supply Crate Key", "tool", 6),
        item(5023, "Paint Can", "Paint Can", "tool", 6),
        paint_can(5027, "Paint Can 1", "Indubitably Green", 7_511_618.0),
        paint_can(5037, "Paint Can 18", "Australium Gold", 15_185_211.0),
        CatalogItem {
            attributes: vec![ItemAttribute {
                name: "set supply crate series".to_string(),
                class: "supply_crate_series".to_string(),
                value: 1.0,
            }],
            ..supply_crate(5022, "Supply Crate", "Mann Co. Supply Crate")
        },
        supply_crate(5041, "Supply Crate 2", "Mann Co. Supply Crate"),
        supply_crate(5734, "Mann Co. Supply Munition 82", "Mann Co. Supply Munition"),
        supply_crate(5739, "Mann Co. Audition Reel", "Mann Co. Audition Reel"),
        supply_crate(5912, "Gargoyle Case", "Gargoyle Case"),
        item(5079, "Decoder Ring Scorched", "Decoder Ring", "tool", 6),
        item(5713, "Decoder Ring Spooky", "Decoder Ring", "tool", 6),
        item(5792, "Decoder Ring Nice 2014", "Decoder Ring", "tool", 6),
        item(6012, "Strange Part: Headshots", "Strange Part: Headshot Kills", "tool", 6),
        item(6522, "Strangifier", "Strangifier", "tool", 6),
        item(6523, "Specialized Kit", "Kit", "tool", 6),
        item(6526, "Professional Kit", "Kit", "tool", 6),
        item(6527, "Basic Kit", "Kit", "tool", 6),
        item(9258, "Taunt Unusualifier", "Unusualifier", "tool", 5),
        item(15002, "warbird_scattergun_airwolf", "Scattergun", "tf_weapon_scattergun", 15),
        item(17006, "Paintkit 206", "War Paint", "tool", 15),
        item(20002, "Specialized Fabricator", "Fabricator", "tool", 6),
        item(20003, "Professional Fabricator", "Fabricator", "tool", 6),
        item(20006, "Chemistry Set", "Chemistry Set", "tool", 6),
        CatalogItem {
            capabilities: Some(Capabilities { paintable: true, ..Capabilities::default() }),
            ..item(30187, "Haunted Hat", "Haunted Hat", "tf_wearable", 6)
        },
        item(30786, "Gauzed Gaze", "Gauzed Gaze", "tf_wearable", 6),
        item(30787, "Bubble Pipe", "Bubble Pipe", "tf_wearable", 5),
        item(31357, "Flame Warrior", "Flame Warrior", "tf_wearable", 6),
    ];
    // hand the sorter something to do
    items.reverse();

    CatalogSnapshot {
        items,
        attributes: vec![
            AttributeDef {
                name: "attach particle effect".to_string(),
                defindex: 134,
                attribute_class: Some("set_attached_particle".to_string()),
            },
            AttributeDef {
                name: "set supply crate series".to_string(),
                defindex: 187,
                attribute_class: Some("supply_crate_series".to_string()),
            },
            AttributeDef {
                name: "kill eater".to_string(),
                defindex: 214,
                attribute_class: Some("kill_eater".to_string()),
            },
        ],
        particles: vec![
            ParticleEffect { id: 4, name: "Community Sparkle".to_string(), system: None },
            ParticleEffect { id: 8, name: "Haunted Ghosts".to_string(), system: None },
            ParticleEffect { id: 33, name: "Orbiting Fire".to_string(), system: None },
            ParticleEffect { id: 289, name: "Treasure Trove".to_string(), system: None },
            ParticleEffect { id: 701, name: "Cool".to_string(), system: None },
            ParticleEffect { id: 703, name: "Hot".to_string(), system: None },
        ],
        qualities: BTreeMap::from([
            ("collectors".to_string(), 14),
            ("community".to_string(), 7),
            ("haunted".to_string(), 13),
            ("normal".to_string(), 0),
            ("paintkitweapon".to_string(), 15),
            ("rarity1".to_string(), 1),
            ("rarity4".to_string(), 5),
            ("strange".to_string(), 11),
            ("unique".to_string(), 6),
            ("vintage".to_string(), 3),
        ]),
        quality_names: BTreeMap::from([
            ("collectors".to_string(), "Collector's".to_string()),
            ("community".to_string(), "Community".to_string()),
            ("haunted".to_string(), "Haunted".to_string()),
            ("normal".to_string(), "Normal".to_string()),
            ("paintkitweapon".to_string(), "Decorated Weapon".to_string()),
            ("rarity1".to_string(), "Genuine".to_string()),
            ("rarity4".to_string(), "Unusual".to_string()),
            ("strange".to_string(), "Strange".to_string()),
            ("unique".to_string(), "Unique".to_string()),
            ("vintage".to_string(), "Vintage".to_string()),
        ]),
        paintkits: BTreeMap::from([
            (11, "Night Owl".to_string()),
            (14, "Purple Range".to_string()),
            (206, "Pizza Polished".to_string()),
        ]),
        score_types: vec![
            ScoreType { type_id: 0, type_name: "Kills".to_string() },
            ScoreType { type_id: 7, type_name: "Ubers".to_string() },
            ScoreType { type_id: 27, type_name: "Dominations".to_string() },
            ScoreType { type_id: 38, type_name: "Headshot Kills".to_string() },
            ScoreType { type_id: 97, type_name: "Kills".to_string() },
        ],
        items_game: ItemsGame {
            items: BTreeMap::from([(
                5912,
                ItemsGameEntry {
                    static_attrs: BTreeMap::from([(
                        "set supply crate series".to_string(),
                        json!({ "value": "98" }),
                    )]),
                },
            )]),
        },
    }
}

pub(crate) fn catalog() -> Catalog {
    Catalog::new(snapshot())
}
