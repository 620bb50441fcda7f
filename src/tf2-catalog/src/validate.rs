//! Existence checks
//!
//! A record can be structurally fine yet name an item that never drops:
//! a Vintage-only cosmetic in Strange, a craftable Spooky Key, a crate
//! series on the wrong crate. [`exists`] rejects those combinations using
//! the catalog plus the fixed reference tables.

use crate::catalog::Catalog;
use crate::item::{quality, ItemRecord};
use crate::reference;

/// Modifiers that crates and cases never carry.
fn has_non_crate_modifiers(item: &ItemRecord) -> bool {
    item.quality != quality::UNIQUE
        || item.killstreak.is_some()
        || item.australium
        || item.effect.is_some()
        || item.festive
        || item.paintkit.is_some()
        || item.wear.is_some()
        || item.quality2.is_some()
        || item.craft_number.is_some()
        || item.target.is_some()
        || item.output.is_some()
        || item.output_quality.is_some()
        || item.paint.is_some()
}

/// Whether `item` names a combination that can actually exist.
pub fn exists(catalog: &Catalog, item: &ItemRecord) -> bool {
    let Some(schema_item) = catalog.item_by_defindex(item.defindex) else {
        return false;
    };

    // items whose catalog quality is Normal, Vintage, Unusual, or Strange
    // only exist in that quality
    if matches!(schema_item.item_quality, 0 | 3 | 5 | 11)
        && item.quality != schema_item.item_quality
    {
        return false;
    }

    // Genuine-only promo twins exist only in Genuine, and their any-quality
    // counterparts never do
    if (item.quality != quality::GENUINE
        && reference::exclusive_genuine_base(item.defindex).is_some())
        || (item.quality == quality::GENUINE
            && reference::exclusive_genuine(item.defindex).is_some())
    {
        return false;
    }

    // retired keys only dropped Craftable, except the 2014 winter pair
    // which may be either; the four never-craftable keys fail both branches
    // and so never exist
    if reference::retired_key(item.defindex).is_some() {
        if reference::RETIRED_KEYS_NEVER_CRAFTABLE.contains(&item.defindex) && item.craftable {
            return false;
        }
        if !item.craftable
            && !reference::RETIRED_KEYS_EITHER_CRAFTABILITY.contains(&item.defindex)
        {
            return false;
        }
    }

    if schema_item.item_class == "supply_crate" && item.crate_series.is_none() {
        if !reference::SERIESLESS_CRATES.contains(&item.defindex) {
            return false;
        }
        if has_non_crate_modifiers(item) {
            return false;
        }
    }

    if let Some(series) = item.crate_series {
        if has_non_crate_modifiers(item) {
            return false;
        }
        if schema_item.item_class != "supply_crate" {
            return false;
        }

        if reference::is_known_crate_series(series) {
            if !reference::crate_family_matches(series, item.defindex) {
                return false;
            }
        } else if catalog.crate_series_for(item.defindex) != Some(series) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn check(item: &ItemRecord) -> bool {
        exists(&fixtures::catalog(), item)
    }

    #[test]
    fn test_unknown_defindex() {
        assert!(!check(&ItemRecord::new(424_242, 6)));
    }

    #[test]
    fn test_plain_items_exist() {
        assert!(check(&ItemRecord::new(5021, 6)));
        assert!(check(&ItemRecord::new(200, 6)));
        assert!(check(&ItemRecord::new(200, 11)));
    }

    #[test]
    fn test_fixed_quality_items() {
        // stock weapons only exist Normal
        assert!(check(&ItemRecord::new(13, 0)));
        assert!(!check(&ItemRecord::new(13, 6)));
        // an Unusual-only cosmetic cannot be Unique
        assert!(check(&ItemRecord::new(30787, 5)));
        assert!(!check(&ItemRecord::new(30787, 6)));
    }

    #[test]
    fn test_exclusive_genuine() {
        // the twin exists only in Genuine
        assert!(check(&ItemRecord::new(831, 1)));
        assert!(!check(&ItemRecord::new(831, 6)));
        // the base item exists in any quality but Genuine
        assert!(check(&ItemRecord::new(810, 6)));
        assert!(!check(&ItemRecord::new(810, 1)));
    }

    #[test]
    fn test_retired_key_craftability() {
        // ordinary retired keys only exist Craftable
        let mut scorched = ItemRecord::new(5079, 6);
        assert!(check(&scorched));
        scorched.craftable = false;
        assert!(!check(&scorched));

        // the 2014 winter keys pass in either craftability
        let mut nice = ItemRecord::new(5792, 6);
        assert!(check(&nice));
        nice.craftable = false;
        assert!(check(&nice));

        // the never-craftable keys fail both branches
        let mut spooky = ItemRecord::new(5713, 6);
        assert!(!check(&spooky));
        spooky.craftable = false;
        assert!(!check(&spooky));
    }

    #[test]
    fn test_seriesless_crates() {
        // only the known seriesless crates may omit the series
        assert!(check(&ItemRecord::new(5739, 6)));
        assert!(!check(&ItemRecord::new(5912, 6)));

        let mut item = ItemRecord::new(5739, 6);
        item.killstreak = Some(1);
        assert!(!check(&item));
    }

    #[test]
    fn test_crate_series_families() {
        let mut crate1 = ItemRecord::new(5022, 6);
        crate1.crate_series = Some(1);
        assert!(check(&crate1));

        // series 1 belongs to 5022, not 5041
        let mut wrong = ItemRecord::new(5041, 6);
        wrong.crate_series = Some(1);
        assert!(!check(&wrong));

        let mut munition = ItemRecord::new(5734, 6);
        munition.crate_series = Some(82);
        assert!(check(&munition));
        munition.crate_series = Some(83);
        assert!(!check(&munition));
    }

    #[test]
    fn test_unknown_series_resolves_through_catalog_map() {
        let mut case = ItemRecord::new(5912, 6);
        case.crate_series = Some(98);
        assert!(check(&case));
        case.crate_series = Some(99);
        assert!(!check(&case));
    }

    #[test]
    fn test_series_on_non_crate() {
        let mut item = ItemRecord::new(200, 6);
        item.crate_series = Some(1);
        assert!(!check(&item));
    }

    #[test]
    fn test_crates_reject_every_other_modifier() {
        let base = {
            let mut item = ItemRecord::new(5022, 6);
            item.crate_series = Some(1);
            item
        };
        assert!(check(&base));

        let mutations: [fn(&mut ItemRecord); 8] = [
            |i| i.quality = 11,
            |i| i.killstreak = Some(1),
            |i| i.australium = true,
            |i| i.effect = Some(33),
            |i| i.festive = true,
            |i| i.wear = Some(1),
            |i| i.craft_number = Some(1),
            |i| i.paint = Some(7_511_618),
        ];
        for mutate in mutations {
            let mut item = base.clone();
            mutate(&mut item);
            assert!(!check(&item), "modified crate should not exist");
        }
    }
}
