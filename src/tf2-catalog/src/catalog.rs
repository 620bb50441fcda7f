//! Indexed catalog
//!
//! [`Catalog`] takes ownership of a [`CatalogSnapshot`], sorts the big
//! arrays, and derives the small lookup maps the parser and renderer walk:
//! qualities, unusual effects, paintkits, paint cans, and crate series.
//! Building the same snapshot twice yields the same index, so a rebuilt
//! catalog can replace a live one without observable drift.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use crate::item::ItemRecord;
use crate::reference;
use crate::snapshot::{AttributeDef, CatalogItem, CatalogSnapshot};

/// Effect ids whose names drifted across catalog revisions; the historical
/// names stay pinned so old listings keep resolving.
const PINNED_EFFECTS: [(&str, u32); 3] =
    [("Orbiting Fire", 33), ("Ether Trail", 103), ("Fragmenting Reality", 141)];

/// Bounded binary search over a defindex/id-sorted slice. The probe budget
/// covers a fully sorted slice; if the slice arrived unsorted the linear
/// fallback still finds the element.
fn search_sorted<T>(items: &[T], id: u32, key: fn(&T) -> u32) -> Option<&T> {
    if items.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = items.len() - 1;
    let mut probes = (items.len() as f64).log2().ceil() as i64 + 2;

    while low <= high && probes > 0 {
        let mid = (low + high) / 2;
        match key(&items[mid]).cmp(&id) {
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
            std::cmp::Ordering::Equal => return Some(&items[mid]),
        }
        probes -= 1;
    }

    items.iter().find(|item| key(item) == id)
}

/// Remove every `"the "` occurrence and trim, so "The Essential Accessories"
/// and "Essential Accessories" compare equal.
fn strip_the(name: &str) -> String {
    let mut out = name.to_string();
    while let Some(pos) = out.find("the ") {
        out.replace_range(pos..pos + 4, "");
        out = out.trim().to_string();
    }
    out
}

fn upsert(entries: &mut Vec<(String, u32)>, name: &str, id: u32) {
    match entries.iter_mut().find(|(n, _)| n == name) {
        Some(entry) => entry.1 = id,
        None => entries.push((name.to_string(), id)),
    }
}

/// The nine playable classes, as spelled in catalog `used_by_classes` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Scout,
    Soldier,
    Pyro,
    Demoman,
    Heavy,
    Engineer,
    Medic,
    Sniper,
    Spy,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 9] = [
        Self::Scout,
        Self::Soldier,
        Self::Pyro,
        Self::Demoman,
        Self::Heavy,
        Self::Engineer,
        Self::Medic,
        Self::Sniper,
        Self::Spy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scout => "Scout",
            Self::Soldier => "Soldier",
            Self::Pyro => "Pyro",
            Self::Demoman => "Demoman",
            Self::Heavy => "Heavy",
            Self::Engineer => "Engineer",
            Self::Medic => "Medic",
            Self::Sniper => "Sniper",
            Self::Spy => "Spy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character class: {0}")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// An immutable snapshot plus the derived lookup structures.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    snapshot: CatalogSnapshot,
    /// Quality display name -> id, in internal-key order
    qualities: Vec<(String, u32)>,
    /// Unusual effect name -> id, in particle order, consecutive duplicates
    /// dropped, pinned overrides applied
    effects: Vec<(String, u32)>,
    /// Paintkit name -> id, in id order
    paintkits: Vec<(String, u32)>,
    /// Paint display name -> decimal color, Legacy Paint first
    paints: Vec<(String, u32)>,
    /// Crate defindex -> series number, merged from item attributes and the
    /// items_game static attributes, the latter winning
    crate_series: HashMap<u32, u32>,
}

impl Catalog {
    pub fn new(mut snapshot: CatalogSnapshot) -> Self {
        snapshot.items.sort_by_key(|item| item.defindex);
        snapshot.attributes.sort_by_key(|attribute| attribute.defindex);
        snapshot.particles.sort_by_key(|particle| particle.id);

        let mut qualities = Vec::with_capacity(snapshot.qualities.len());
        for (key, id) in &snapshot.qualities {
            if let Some(display) = snapshot.quality_names.get(key) {
                qualities.push((display.clone(), *id));
            }
        }

        let mut effects: Vec<(String, u32)> = Vec::with_capacity(snapshot.particles.len());
        let mut previous = "";
        for particle in &snapshot.particles {
            if particle.name == previous {
                continue;
            }
            previous = particle.name.as_str();
            upsert(&mut effects, &particle.name, particle.id);
        }
        for (name, id) in PINNED_EFFECTS {
            upsert(&mut effects, name, id);
        }

        let mut paintkits: Vec<(String, u32)> = Vec::with_capacity(snapshot.paintkits.len());
        for (id, name) in &snapshot.paintkits {
            upsert(&mut paintkits, name, *id);
        }

        let mut paints = vec![(reference::LEGACY_PAINT_NAME.to_string(), reference::LEGACY_PAINT_VALUE)];
        for item in Self::paint_cans(&snapshot) {
            if let Some(attribute) = item.attributes.first() {
                upsert(&mut paints, &item.item_name, attribute.value as u32);
            }
        }

        let mut crate_series = HashMap::new();
        for item in &snapshot.items {
            if let Some(attribute) =
                item.attributes.iter().find(|a| a.name == "set supply crate series")
            {
                crate_series.insert(item.defindex, attribute.value as u32);
            }
        }
        for (defindex, entry) in &snapshot.items_game.items {
            if let Some(value) = entry.static_attrs.get("set supply crate series") {
                if let Some(series) = CatalogSnapshot::static_attr_value(value) {
                    crate_series.insert(*defindex, series);
                }
            }
        }

        Self { snapshot, qualities, effects, paintkits, paints, crate_series }
    }

    fn paint_cans(snapshot: &CatalogSnapshot) -> impl Iterator<Item = &CatalogItem> {
        snapshot
            .items
            .iter()
            .filter(|item| item.name.contains("Paint Can") && item.name != "Paint Can")
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    // ========================================================================
    // Item and attribute lookup
    // ========================================================================

    pub fn item_by_defindex(&self, defindex: u32) -> Option<&CatalogItem> {
        search_sorted(&self.snapshot.items, defindex, |item| item.defindex)
    }

    pub fn attribute_by_defindex(&self, defindex: u32) -> Option<&AttributeDef> {
        search_sorted(&self.snapshot.attributes, defindex, |attribute| attribute.defindex)
    }

    /// Case-insensitive display-name lookup. Skips the duplicate Name Tag
    /// definition and stock-quality items so weapons resolve to their
    /// upgradeable variant.
    pub fn item_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.snapshot.items.iter().find(|item| {
            name.eq_ignore_ascii_case(&item.item_name)
                && !(item.item_name == "Name Tag"
                    && item.defindex == reference::NAME_TAG_DUPLICATE)
                && item.item_quality != 0
        })
    }

    /// Like [`Self::item_by_name`] but ignores "The " on either side.
    pub fn item_by_name_loose(&self, name: &str) -> Option<&CatalogItem> {
        let wanted = strip_the(&name.to_lowercase());
        self.snapshot.items.iter().find(|item| {
            strip_the(&item.item_name.to_lowercase()) == wanted
                && !(item.item_name == "Name Tag"
                    && item.defindex == reference::NAME_TAG_DUPLICATE)
                && item.item_quality != 0
        })
    }

    /// Internal-name lookup, exact match.
    pub fn item_by_internal_name(&self, name: &str) -> Option<&CatalogItem> {
        self.snapshot.items.iter().find(|item| item.name == name)
    }

    // ========================================================================
    // Derived-map accessors
    // ========================================================================

    pub fn qualities(&self) -> &[(String, u32)] {
        &self.qualities
    }

    pub fn effects(&self) -> &[(String, u32)] {
        &self.effects
    }

    pub fn paintkits(&self) -> &[(String, u32)] {
        &self.paintkits
    }

    pub fn paints(&self) -> &[(String, u32)] {
        &self.paints
    }

    pub fn quality_name_by_id(&self, id: u32) -> Option<&str> {
        self.snapshot
            .qualities
            .iter()
            .find(|(_, quality_id)| **quality_id == id)
            .and_then(|(key, _)| self.snapshot.quality_names.get(key))
            .map(String::as_str)
    }

    pub fn quality_id_by_name(&self, name: &str) -> Option<u32> {
        self.qualities
            .iter()
            .find(|(quality_name, _)| quality_name.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
    }

    /// Effect name by id, from the raw particle list.
    pub fn effect_name_by_id(&self, id: u32) -> Option<&str> {
        search_sorted(&self.snapshot.particles, id, |particle| particle.id)
            .map(|particle| particle.name.as_str())
    }

    pub fn effect_id_by_name(&self, name: &str) -> Option<u32> {
        self.snapshot
            .particles
            .iter()
            .find(|particle| particle.name.eq_ignore_ascii_case(name))
            .map(|particle| particle.id)
    }

    pub fn paintkit_name_by_id(&self, id: u32) -> Option<&str> {
        self.snapshot.paintkits.get(&id).map(String::as_str)
    }

    pub fn paintkit_id_by_name(&self, name: &str) -> Option<u32> {
        self.snapshot
            .paintkits
            .iter()
            .find(|(_, kit_name)| kit_name.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    pub fn paint_name_by_decimal(&self, decimal: u32) -> Option<&str> {
        if decimal == reference::LEGACY_PAINT_VALUE {
            return Some(reference::LEGACY_PAINT_NAME);
        }
        Self::paint_cans(&self.snapshot)
            .find(|item| item.attributes.iter().any(|a| a.value as u32 == decimal))
            .map(|item| item.item_name.as_str())
    }

    pub fn paint_decimal_by_name(&self, name: &str) -> Option<u32> {
        if name == reference::LEGACY_PAINT_NAME {
            return Some(reference::LEGACY_PAINT_VALUE);
        }
        Self::paint_cans(&self.snapshot)
            .find(|item| item.item_name.eq_ignore_ascii_case(name))
            .and_then(|item| item.attributes.first())
            .map(|attribute| attribute.value as u32)
    }

    pub fn crate_series_for(&self, defindex: u32) -> Option<u32> {
        self.crate_series.get(&defindex).copied()
    }

    // ========================================================================
    // Bulk exports
    // ========================================================================

    /// Purchasable strange parts: score-type name -> part id.
    pub fn strange_parts(&self) -> Vec<(&str, u32)> {
        self.snapshot
            .score_types
            .iter()
            .filter(|score| {
                !reference::STRANGE_PART_EXCLUSIONS.contains(&score.type_name.as_str())
                    && score.type_id != 0
                    && score.type_id != 97
            })
            .map(|score| (score.type_name.as_str(), score.type_id))
            .collect()
    }

    /// All unusual effect names with their ids.
    pub fn unusual_effects(&self) -> Vec<(&str, u32)> {
        self.snapshot
            .particles
            .iter()
            .map(|particle| (particle.name.as_str(), particle.id))
            .collect()
    }

    pub fn paintable_defindexes(&self) -> Vec<u32> {
        self.snapshot
            .items
            .iter()
            .filter(|item| item.capabilities.as_ref().is_some_and(|caps| caps.paintable))
            .map(|item| item.defindex)
            .collect()
    }

    /// Craftable weapons, with promo reskins filtered out.
    pub fn craftable_weapons(&self) -> Vec<&CatalogItem> {
        self.snapshot
            .items
            .iter()
            .filter(|item| {
                !reference::CRAFT_WEAPON_EXCLUSIONS.contains(&item.defindex)
                    && item.item_quality == 6
                    && item.craft_class.as_deref() == Some("weapon")
            })
            .collect()
    }

    pub fn weapons_for_crafting_by_class(&self, class: CharacterClass) -> Vec<u32> {
        self.craftable_weapons()
            .into_iter()
            .filter(|item| item.used_by_classes.iter().any(|c| c == class.as_str()))
            .map(|item| item.defindex)
            .collect()
    }

    pub fn craftable_weapons_for_trading(&self) -> Vec<u32> {
        self.craftable_weapons().into_iter().map(|item| item.defindex).collect()
    }

    /// Craftable weapons that also circulate Non-Craftable. Sharpened
    /// Volcano Fragment and Sun-on-a-Stick never do.
    pub fn uncraftable_weapons_for_trading(&self) -> Vec<u32> {
        self.craftable_weapons()
            .into_iter()
            .filter(|item| !reference::UNCRAFTABLE_TRADING_EXCLUSIONS.contains(&item.defindex))
            .map(|item| item.defindex)
            .collect()
    }

    // ========================================================================
    // Convenience wrappers
    // ========================================================================

    /// Parse a display name into a complete record, or `None` if the name
    /// never resolved a definition index and quality.
    pub fn record_from_name(&self, name: &str) -> Option<ItemRecord> {
        crate::parse::parse_name(self, name).into_record()
    }
}

/// Shared handle that lets readers keep using the current catalog while a
/// refreshed snapshot is indexed off to the side. Readers either see the old
/// index or the new one, never a mix.
#[derive(Debug)]
pub struct CatalogStore {
    inner: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { inner: RwLock::new(Arc::new(catalog)) }
    }

    /// Current catalog. The `Arc` stays valid across a concurrent replace.
    pub fn load(&self) -> Arc<Catalog> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    /// Index `snapshot` and publish it in one swap.
    pub fn replace(&self, snapshot: CatalogSnapshot) {
        let catalog = Arc::new(Catalog::new(snapshot));
        *self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_rebuild_is_identical() {
        let snapshot = fixtures::snapshot();
        assert_eq!(Catalog::new(snapshot.clone()), Catalog::new(snapshot));
    }

    #[test]
    fn test_items_sorted_and_searchable() {
        let catalog = fixtures::catalog();
        let items = &catalog.snapshot().items;
        assert!(items.windows(2).all(|w| w[0].defindex <= w[1].defindex));

        for item in items {
            let found = catalog.item_by_defindex(item.defindex).unwrap();
            assert_eq!(found.defindex, item.defindex);
        }
        assert!(catalog.item_by_defindex(999_999).is_none());
    }

    #[test]
    fn test_search_sorted_linear_fallback() {
        // unsorted input exhausts the probe budget but still resolves
        let ids = [9u32, 2, 7, 1, 5];
        assert_eq!(search_sorted(&ids, 1, |id| *id), Some(&1));
        assert_eq!(search_sorted(&ids, 5, |id| *id), Some(&5));
        assert_eq!(search_sorted(&ids, 4, |id| *id), None);
        assert_eq!(search_sorted::<u32>(&[], 4, |id| *id), None);
    }

    #[test]
    fn test_item_by_name_skips_stock_and_duplicate_name_tag() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.item_by_name("Scattergun").unwrap().defindex, 200);
        assert_eq!(catalog.item_by_name("name tag").unwrap().defindex, 5020);
    }

    #[test]
    fn test_item_by_name_loose() {
        let catalog = fixtures::catalog();
        assert_eq!(
            catalog.item_by_name_loose("the essential accessories").unwrap().defindex,
            347
        );
        assert_eq!(
            catalog.item_by_name_loose("essential accessories").unwrap().defindex,
            347
        );
        assert!(catalog.item_by_name_loose("no such item").is_none());
    }

    #[test]
    fn test_quality_map() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.quality_id_by_name("unusual"), Some(5));
        assert_eq!(catalog.quality_id_by_name("Collector's"), Some(14));
        assert_eq!(catalog.quality_name_by_id(11), Some("Strange"));
        assert_eq!(catalog.quality_name_by_id(42), None);
    }

    #[test]
    fn test_effect_map_pins_and_duplicates() {
        let catalog = fixtures::catalog();
        // pinned entry overrides whatever the particle list says
        assert!(catalog.effects().iter().any(|(name, id)| name == "Orbiting Fire" && *id == 33));
        assert!(catalog.effects().iter().any(|(name, id)| name == "Ether Trail" && *id == 103));
        assert_eq!(catalog.effect_id_by_name("Treasure Trove"), Some(289));
        assert_eq!(catalog.effect_name_by_id(289), Some("Treasure Trove"));
    }

    #[test]
    fn test_paint_maps() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.paints()[0], ("Legacy Paint".to_string(), 5_801_378));
        assert_eq!(catalog.paint_decimal_by_name("Indubitably Green"), Some(7_511_618));
        assert_eq!(catalog.paint_name_by_decimal(7_511_618), Some("Indubitably Green"));
        assert_eq!(catalog.paint_name_by_decimal(5_801_378), Some("Legacy Paint"));
        assert_eq!(catalog.paint_decimal_by_name("Legacy Paint"), Some(5_801_378));
        assert_eq!(catalog.paint_name_by_decimal(123), None);
    }

    #[test]
    fn test_crate_series_merged_from_both_sources() {
        let catalog = fixtures::catalog();
        // from the item attribute
        assert_eq!(catalog.crate_series_for(5022), Some(1));
        // from items_game static attributes
        assert_eq!(catalog.crate_series_for(5912), Some(98));
        assert_eq!(catalog.crate_series_for(5021), None);
    }

    #[test]
    fn test_strange_parts_filtered() {
        let catalog = fixtures::catalog();
        let parts = catalog.strange_parts();
        assert!(parts.iter().any(|(name, id)| *name == "Headshot Kills" && *id == 38));
        assert!(!parts.iter().any(|(name, _)| *name == "Ubers"));
        assert!(!parts.iter().any(|(_, id)| *id == 0 || *id == 97));
    }

    #[test]
    fn test_craftable_weapon_exports() {
        let catalog = fixtures::catalog();
        let weapons = catalog.craftable_weapons_for_trading();
        assert!(weapons.contains(&200));
        // promo reskin is excluded even though it has a weapon craft class
        assert!(!weapons.contains(&466));
        // stock weapons never craft
        assert!(!weapons.contains(&13));

        let scout = catalog.weapons_for_crafting_by_class(CharacterClass::Scout);
        assert!(scout.contains(&200));
        assert!(catalog.weapons_for_crafting_by_class(CharacterClass::Medic).is_empty());

        let uncraftable = catalog.uncraftable_weapons_for_trading();
        assert!(uncraftable.contains(&200));
        assert!(!uncraftable.contains(&348));
    }

    #[test]
    fn test_character_class_parsing() {
        assert_eq!("scout".parse::<CharacterClass>().unwrap(), CharacterClass::Scout);
        assert_eq!("Demoman".parse::<CharacterClass>().unwrap(), CharacterClass::Demoman);
        assert!("pyro shark".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_store_replace_is_atomic_to_readers() {
        let store = CatalogStore::new(fixtures::catalog());
        let before = store.load();

        let mut snapshot = fixtures::snapshot();
        snapshot.items.retain(|item| item.defindex != 5021);
        store.replace(snapshot);

        // the old handle still answers from the old index
        assert!(before.item_by_defindex(5021).is_some());
        assert!(store.load().item_by_defindex(5021).is_none());
    }
}
