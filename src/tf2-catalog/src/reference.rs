//! Fixed reference tables
//!
//! These tables never change with a catalog snapshot: wear and killstreak
//! vocabularies, tool defindexes, decorated-weapon skin remaps, the exclusive
//! Genuine promo pairs, retired crate keys, and the legacy supply-crate
//! series families. Values are published item data and are treated as a
//! contract; do not "correct" entries against a newer catalog.

use phf::phf_map;

// ============================================================================
// Wear and killstreak vocabularies
// ============================================================================

/// Wear suffix names, indexed by tier - 1.
pub const WEAR_NAMES: [&str; 5] = [
    "Factory New",
    "Minimal Wear",
    "Field-Tested",
    "Well-Worn",
    "Battle Scarred",
];

/// Lowercase wear phrases as they appear in display names.
pub const WEAR_PHRASES: [(&str, u8); 5] = [
    ("(factory new)", 1),
    ("(minimal wear)", 2),
    ("(field-tested)", 3),
    ("(well-worn)", 4),
    ("(battle scarred)", 5),
];

/// Killstreak prefix names, indexed by tier - 1.
pub const KILLSTREAK_NAMES: [&str; 3] =
    ["Killstreak", "Specialized Killstreak", "Professional Killstreak"];

/// Lowercase killstreak phrases, most specific first.
pub const KILLSTREAK_PHRASES: [(&str, u8); 3] = [
    ("professional killstreak", 3),
    ("specialized killstreak", 2),
    ("killstreak", 1),
];

// ============================================================================
// Tool defindexes
// ============================================================================

pub const UNUSUALIFIER: u32 = 9258;
pub const STRANGIFIER: u32 = 6522;
pub const STRANGIFIER_CHEMISTRY_SET: u32 = 20000;
pub const CHEMISTRY_SET: u32 = 20006;
pub const FESTIVE_CHEMISTRY_SET: u32 = 20007;
pub const FABRICATOR_SPECIALIZED: u32 = 20002;
pub const FABRICATOR_PROFESSIONAL: u32 = 20003;
pub const KIT_BASIC: u32 = 6527;
pub const KIT_SPECIALIZED: u32 = 6523;
pub const KIT_PROFESSIONAL: u32 = 6526;

pub const SALVAGED_CRATE: u32 = 5068;
pub const SELECT_RESERVE_CRATE: u32 = 5660;

/// The second "Name Tag" definition; by-name lookup skips it in favor of 5020.
pub const NAME_TAG_DUPLICATE: u32 = 2093;

/// Synthetic decimal value for paint no longer in the catalog.
pub const LEGACY_PAINT_VALUE: u32 = 5_801_378;
pub const LEGACY_PAINT_NAME: &str = "Legacy Paint";

// ============================================================================
// Decorated-weapon skin remaps
// ============================================================================

/// Paintkit id -> dedicated skin-item defindex, one table per weapon kind.
static PISTOL_SKINS: phf::Map<u32, u32> = phf_map! {
    0u32 => 15013, 18u32 => 15018, 35u32 => 15035, 41u32 => 15041,
    46u32 => 15046, 56u32 => 15056, 61u32 => 15061, 63u32 => 15060,
    69u32 => 15100, 70u32 => 15101, 74u32 => 15102, 78u32 => 15126,
    81u32 => 15148,
};

static ROCKET_LAUNCHER_SKINS: phf::Map<u32, u32> = phf_map! {
    1u32 => 15014, 6u32 => 15006, 28u32 => 15028, 43u32 => 15043,
    52u32 => 15052, 57u32 => 15057, 60u32 => 15081, 69u32 => 15104,
    70u32 => 15105, 76u32 => 15129, 79u32 => 15130, 80u32 => 15150,
};

static MEDI_GUN_SKINS: phf::Map<u32, u32> = phf_map! {
    2u32 => 15010, 5u32 => 15008, 25u32 => 15025, 39u32 => 15039,
    50u32 => 15050, 65u32 => 15078, 72u32 => 15097, 76u32 => 15120,
    78u32 => 15121, 79u32 => 15122, 81u32 => 15145, 83u32 => 15146,
};

static REVOLVER_SKINS: phf::Map<u32, u32> = phf_map! {
    3u32 => 15011, 27u32 => 15027, 42u32 => 15042, 51u32 => 15051,
    63u32 => 15064, 64u32 => 15062, 65u32 => 15063, 72u32 => 15103,
    76u32 => 15127, 77u32 => 15128, 81u32 => 15149,
};

static STICKYBOMB_LAUNCHER_SKINS: phf::Map<u32, u32> = phf_map! {
    4u32 => 15012, 8u32 => 15009, 24u32 => 15024, 38u32 => 15038,
    45u32 => 15045, 48u32 => 15048, 60u32 => 15082, 62u32 => 15083,
    63u32 => 15084, 68u32 => 15113, 76u32 => 15137, 78u32 => 15138,
    81u32 => 15155,
};

static SNIPER_RIFLE_SKINS: phf::Map<u32, u32> = phf_map! {
    7u32 => 15007, 14u32 => 15000, 19u32 => 15019, 23u32 => 15023,
    33u32 => 15033, 59u32 => 15059, 62u32 => 15070, 64u32 => 15071,
    65u32 => 15072, 66u32 => 15111, 67u32 => 15112, 76u32 => 15135,
    78u32 => 15136, 82u32 => 15154,
};

static FLAME_THROWER_SKINS: phf::Map<u32, u32> = phf_map! {
    9u32 => 15005, 17u32 => 15017, 30u32 => 15030, 34u32 => 15034,
    49u32 => 15049, 54u32 => 15054, 60u32 => 15066, 61u32 => 15068,
    62u32 => 15067, 66u32 => 15089, 67u32 => 15090, 76u32 => 15115,
    80u32 => 15141,
};

static MINIGUN_SKINS: phf::Map<u32, u32> = phf_map! {
    10u32 => 15004, 20u32 => 15020, 26u32 => 15026, 31u32 => 15031,
    40u32 => 15040, 55u32 => 15055, 61u32 => 15088, 62u32 => 15087,
    63u32 => 15086, 70u32 => 15098, 73u32 => 15099, 76u32 => 15123,
    77u32 => 15125, 78u32 => 15124, 84u32 => 15147,
};

static SCATTERGUN_SKINS: phf::Map<u32, u32> = phf_map! {
    11u32 => 15002, 15u32 => 15015, 21u32 => 15021, 29u32 => 15029,
    36u32 => 15036, 53u32 => 15053, 61u32 => 15069, 63u32 => 15065,
    69u32 => 15106, 72u32 => 15107, 74u32 => 15108, 76u32 => 15131,
    83u32 => 15157, 85u32 => 15151,
};

static SHOTGUN_SKINS: phf::Map<u32, u32> = phf_map! {
    12u32 => 15003, 16u32 => 15016, 44u32 => 15044, 47u32 => 15047,
    60u32 => 15085, 72u32 => 15109, 76u32 => 15132, 78u32 => 15133,
    86u32 => 15152,
};

static SMG_SKINS: phf::Map<u32, u32> = phf_map! {
    13u32 => 15001, 22u32 => 15022, 32u32 => 15032, 37u32 => 15037,
    58u32 => 15058, 65u32 => 15076, 69u32 => 15110, 79u32 => 15134,
    81u32 => 15153,
};

static WRENCH_SKINS: phf::Map<u32, u32> = phf_map! {
    60u32 => 15074, 61u32 => 15073, 64u32 => 15075, 75u32 => 15114,
    77u32 => 15140, 78u32 => 15139, 82u32 => 15156,
};

static GRENADE_LAUNCHER_SKINS: phf::Map<u32, u32> = phf_map! {
    60u32 => 15077, 63u32 => 15079, 67u32 => 15091, 68u32 => 15092,
    76u32 => 15116, 77u32 => 15117, 80u32 => 15142, 84u32 => 15158,
};

static KNIFE_SKINS: phf::Map<u32, u32> = phf_map! {
    64u32 => 15080, 69u32 => 15094, 70u32 => 15095, 71u32 => 15096,
    77u32 => 15119, 78u32 => 15118, 81u32 => 15143, 82u32 => 15144,
};

/// Weapon kinds that have dedicated skin-item defindexes. The order matters:
/// name matching tries each kind in declaration order and "stickybomb
/// launcher" must come before shorter tokens it could shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Pistol,
    RocketLauncher,
    MediGun,
    Revolver,
    StickybombLauncher,
    SniperRifle,
    FlameThrower,
    Minigun,
    Scattergun,
    Shotgun,
    Smg,
    GrenadeLauncher,
    Wrench,
    Knife,
}

impl WeaponKind {
    /// Lowercase token to look for in a display name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Pistol => "pistol",
            Self::RocketLauncher => "rocket launcher",
            Self::MediGun => "medi gun",
            Self::Revolver => "revolver",
            Self::StickybombLauncher => "stickybomb launcher",
            Self::SniperRifle => "sniper rifle",
            Self::FlameThrower => "flame thrower",
            Self::Minigun => "minigun",
            Self::Scattergun => "scattergun",
            Self::Shotgun => "shotgun",
            Self::Smg => "smg",
            Self::GrenadeLauncher => "grenade launcher",
            Self::Wrench => "wrench",
            Self::Knife => "knife",
        }
    }

    pub fn skins(self) -> &'static phf::Map<u32, u32> {
        match self {
            Self::Pistol => &PISTOL_SKINS,
            Self::RocketLauncher => &ROCKET_LAUNCHER_SKINS,
            Self::MediGun => &MEDI_GUN_SKINS,
            Self::Revolver => &REVOLVER_SKINS,
            Self::StickybombLauncher => &STICKYBOMB_LAUNCHER_SKINS,
            Self::SniperRifle => &SNIPER_RIFLE_SKINS,
            Self::FlameThrower => &FLAME_THROWER_SKINS,
            Self::Minigun => &MINIGUN_SKINS,
            Self::Scattergun => &SCATTERGUN_SKINS,
            Self::Shotgun => &SHOTGUN_SKINS,
            Self::Smg => &SMG_SKINS,
            Self::GrenadeLauncher => &GRENADE_LAUNCHER_SKINS,
            Self::Wrench => &WRENCH_SKINS,
            Self::Knife => &KNIFE_SKINS,
        }
    }
}

pub const WEAPON_KINDS: [WeaponKind; 14] = [
    WeaponKind::Pistol,
    WeaponKind::RocketLauncher,
    WeaponKind::MediGun,
    WeaponKind::Revolver,
    WeaponKind::StickybombLauncher,
    WeaponKind::SniperRifle,
    WeaponKind::FlameThrower,
    WeaponKind::Minigun,
    WeaponKind::Scattergun,
    WeaponKind::Shotgun,
    WeaponKind::Smg,
    WeaponKind::GrenadeLauncher,
    WeaponKind::Wrench,
    WeaponKind::Knife,
];

// ============================================================================
// Exclusive Genuine promo items
// ============================================================================

/// Promo items whose Genuine variant has its own defindex. Left column is
/// the any-quality item, right column the Genuine-only twin.
const EXCLUSIVE_GENUINE: [(u32, u32); 11] = [
    (810, 831),     // Red-Tape Recorder
    (811, 832),     // Huo-Long Heater
    (812, 833),     // Flying Guillotine
    (813, 834),     // Neon Annihilator
    (814, 835),     // Triad Trinket
    (815, 836),     // Champ Stamp
    (816, 837),     // Marxman
    (817, 838),     // Human Cannonball
    (30720, 30740), // Arkham Cowl
    (30721, 30741), // Firefly
    (30724, 30739), // Fear Monger
];

/// Genuine-only defindex for an any-quality promo item.
pub fn exclusive_genuine(defindex: u32) -> Option<u32> {
    EXCLUSIVE_GENUINE
        .iter()
        .find(|(base, _)| *base == defindex)
        .map(|(_, genuine)| *genuine)
}

/// Any-quality defindex for a Genuine-only promo item.
pub fn exclusive_genuine_base(defindex: u32) -> Option<u32> {
    EXCLUSIVE_GENUINE
        .iter()
        .find(|(_, genuine)| *genuine == defindex)
        .map(|(base, _)| *base)
}

// ============================================================================
// Retired crate keys
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetiredKey {
    pub defindex: u32,
    pub name: &'static str,
}

/// Crate keys no longer sold; their catalog display names are all
/// "Decoder Ring" so both directions need this table.
pub const RETIRED_KEYS: [RetiredKey; 15] = [
    RetiredKey { defindex: 5049, name: "Festive Winter Crate Key" },
    RetiredKey { defindex: 5067, name: "Refreshing Summer Cooler Key" },
    RetiredKey { defindex: 5072, name: "Naughty Winter Crate Key" },
    RetiredKey { defindex: 5073, name: "Nice Winter Crate Key" },
    RetiredKey { defindex: 5079, name: "Scorched Key" },
    RetiredKey { defindex: 5081, name: "Fall Key" },
    RetiredKey { defindex: 5628, name: "Eerie Key" },
    RetiredKey { defindex: 5631, name: "Naughty Winter Crate Key 2012" },
    RetiredKey { defindex: 5632, name: "Nice Winter Crate Key 2012" },
    RetiredKey { defindex: 5713, name: "Spooky Key" },
    RetiredKey { defindex: 5716, name: "Naughty Winter Crate Key 2013" },
    RetiredKey { defindex: 5717, name: "Nice Winter Crate Key 2013" },
    RetiredKey { defindex: 5762, name: "Limited Late Summer Crate Key" },
    RetiredKey { defindex: 5791, name: "Naughty Winter Crate Key 2014" },
    RetiredKey { defindex: 5792, name: "Nice Winter Crate Key 2014" },
];

/// Retired keys that only ever dropped as Non-Craftable.
pub const RETIRED_KEYS_NEVER_CRAFTABLE: [u32; 4] = [5713, 5716, 5717, 5762];

/// Retired keys accepted in either craftability; every other retired key
/// must be Craftable.
pub const RETIRED_KEYS_EITHER_CRAFTABILITY: [u32; 2] = [5791, 5792];

pub fn retired_key(defindex: u32) -> Option<&'static RetiredKey> {
    RETIRED_KEYS.iter().find(|key| key.defindex == defindex)
}

/// Case-insensitive name lookup; `name` is expected lowercase already.
pub fn retired_key_by_name(name: &str) -> Option<&'static RetiredKey> {
    RETIRED_KEYS
        .iter()
        .find(|key| key.name.to_lowercase() == name)
}

// ============================================================================
// Supply-crate series families
// ============================================================================

/// Series numbers of the original Mann Co. Supply Crate (5022).
pub const CRATE_SERIES_5022: [u32; 17] =
    [1, 3, 7, 12, 13, 18, 19, 23, 26, 31, 34, 39, 43, 47, 54, 57, 75];

/// Series numbers of the second-generation crate (5041).
pub const CRATE_SERIES_5041: [u32; 17] =
    [2, 4, 8, 11, 14, 17, 20, 24, 27, 32, 37, 42, 44, 49, 56, 71, 76];

/// Series numbers of the third-generation crate (5045).
pub const CRATE_SERIES_5045: [u32; 16] =
    [5, 9, 10, 15, 16, 21, 25, 28, 29, 33, 38, 41, 45, 55, 59, 77];

/// Salvaged crate (5068) series numbers.
pub const CRATE_SERIES_SALVAGED: [u32; 3] = [30, 40, 50];

/// Munition series -> munition crate defindex.
pub static MUNITION_CRATES: phf::Map<u32, u32> = phf_map! {
    82u32 => 5734,
    83u32 => 5735,
    84u32 => 5742,
    85u32 => 5752,
    90u32 => 5781,
    91u32 => 5802,
    92u32 => 5803,
    103u32 => 5859,
};

/// Crates that exist without a series number and with no other modifiers.
pub const SERIESLESS_CRATES: [u32; 4] = [5739, 5760, 5737, 5738];

/// Whether a series number belongs to any legacy crate family.
pub fn is_known_crate_series(series: u32) -> bool {
    CRATE_SERIES_5022.contains(&series)
        || CRATE_SERIES_5041.contains(&series)
        || CRATE_SERIES_5045.contains(&series)
        || CRATE_SERIES_SALVAGED.contains(&series)
        || MUNITION_CRATES.contains_key(&series)
}

/// Whether a legacy series number pairs with the given crate defindex.
pub fn crate_family_matches(series: u32, defindex: u32) -> bool {
    (CRATE_SERIES_5022.contains(&series) && defindex == 5022)
        || (CRATE_SERIES_5041.contains(&series) && defindex == 5041)
        || (CRATE_SERIES_5045.contains(&series) && defindex == 5045)
        || (CRATE_SERIES_SALVAGED.contains(&series) && defindex == SALVAGED_CRATE)
        || MUNITION_CRATES.get(&series) == Some(&defindex)
}

// ============================================================================
// Quality-prefix and strange-part exceptions
// ============================================================================

/// Item names that start with a quality word without carrying that quality.
pub const QUALITY_NAME_EXCEPTIONS: [&str; 10] = [
    "haunted ghosts",
    "haunted phantasm jr",
    "haunted phantasm",
    "haunted metal scrap",
    "haunted hat",
    "unusual cap",
    "vintage tyrolean",
    "vintage merryweather",
    "haunted kraken",
    "haunted forever!",
];

/// Lowercase markers of strange tool items whose full display name must be
/// looked up verbatim before any parsing.
pub const STRANGE_TOOL_MARKERS: [&str; 5] = [
    "strange part:",
    "strange cosmetic part:",
    "strange filter:",
    "strange count transfer tool",
    "strange bacon grease",
];

/// Built-in kill-tracking score types that are not purchasable strange parts.
pub const STRANGE_PART_EXCLUSIONS: [&str; 40] = [
    "Ubers",
    "Kill Assists",
    "Sentry Kills",
    "Sodden Victims",
    "Spies Shocked",
    "Heads Taken",
    "Humiliations",
    "Gifts Given",
    "Deaths Feigned",
    "Buildings Sapped",
    "Tickle Fights Won",
    "Opponents Flattened",
    "Food Items Eaten",
    "Banners Deployed",
    "Seconds Cloaked",
    "Health Dispensed to Teammates",
    "Teammates Teleported",
    "KillEaterEvent_UniquePlayerKills",
    "Points Scored",
    "Double Donks",
    "Teammates Whipped",
    "Wrangled Sentry Kills",
    "Carnival Kills",
    "Carnival Underworld Kills",
    "Carnival Games Won",
    "Contracts Completed",
    "Contract Points",
    "Contract Bonus Points",
    "Times Performed",
    "Kills and Assists during Invasion Event",
    "Kills and Assists on 2Fort Invasion",
    "Kills and Assists on Probed",
    "Kills and Assists on Byre",
    "Kills and Assists on Watergate",
    "Souls Collected",
    "Merasmissions Completed",
    "Halloween Transmutes Performed",
    "Power Up Canteens Used",
    "Contract Points Earned",
    "Contract Points Contributed To Friends",
];

/// Promo reskins excluded from the craftable-weapon exports even though the
/// catalog marks them with a weapon craft class.
pub const CRAFT_WEAPON_EXCLUSIONS: [u32; 19] = [
    266,   // Horseless Headless Horsemann's Headtaker
    452,   // Three-Rune Blade
    466,   // Maul
    474,   // Conscientious Objector
    572,   // Unarmed Combat
    574,   // Wanga Prick
    587,   // Apoco-Fists
    638,   // Sharp Dresser
    735,   // Sapper
    736,   // Sapper
    737,   // Construction PDA
    851,   // AWPer Hand
    880,   // Freedom Staff
    933,   // Ap-Sap
    939,   // Bat Outta Hell
    947,   // Quackenbirdt
    1013,  // Ham Shank
    1152,  // Grappling Hook
    30474, // Nostromo Napalmer
];

/// Sharpened Volcano Fragment and Sun-on-a-Stick: craftable-only, so they
/// are dropped from the uncraftable trading export.
pub const UNCRAFTABLE_TRADING_EXCLUSIONS: [u32; 2] = [348, 349];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_genuine_both_directions() {
        assert_eq!(exclusive_genuine(810), Some(831));
        assert_eq!(exclusive_genuine_base(831), Some(810));
        assert_eq!(exclusive_genuine(831), None);
        assert_eq!(exclusive_genuine_base(810), None);
        assert_eq!(exclusive_genuine(30724), Some(30739));
    }

    #[test]
    fn test_retired_key_lookup() {
        let key = retired_key(5079).unwrap();
        assert_eq!(key.name, "Scorched Key");
        assert_eq!(retired_key_by_name("scorched key").unwrap().defindex, 5079);
        assert!(retired_key(5021).is_none());
        assert!(retired_key_by_name("Scorched Key").is_none());
    }

    #[test]
    fn test_crate_family_pairings() {
        assert!(crate_family_matches(1, 5022));
        assert!(!crate_family_matches(1, 5041));
        assert!(crate_family_matches(2, 5041));
        assert!(crate_family_matches(5, 5045));
        assert!(crate_family_matches(40, 5068));
        assert!(crate_family_matches(82, 5734));
        assert!(!crate_family_matches(82, 5735));
        assert!(is_known_crate_series(103));
        assert!(!is_known_crate_series(98));
    }

    #[test]
    fn test_skin_tables() {
        assert_eq!(SCATTERGUN_SKINS.get(&11), Some(&15002));
        assert_eq!(WeaponKind::Scattergun.skins().get(&206), None);
        assert_eq!(KNIFE_SKINS.get(&64), Some(&15080));
        assert_eq!(WEAPON_KINDS[4].token(), "stickybomb launcher");
    }

    #[test]
    fn test_strange_part_denylist_entries() {
        assert!(STRANGE_PART_EXCLUSIONS.contains(&"Ubers"));
        // plain "Kills" is weeded out by its score type, not by name
        assert!(!STRANGE_PART_EXCLUSIONS.contains(&"Kills"));
    }

    #[test]
    fn test_craftability_key_subsets_are_disjoint() {
        for defindex in RETIRED_KEYS_NEVER_CRAFTABLE {
            assert!(retired_key(defindex).is_some());
            assert!(!RETIRED_KEYS_EITHER_CRAFTABILITY.contains(&defindex));
        }
    }
}
