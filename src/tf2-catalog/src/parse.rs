//! Display-name parsing
//!
//! [`parse_name`] folds a lowercased display name through a fixed pipeline
//! of stages. Each stage recognizes one kind of modifier, records it on the
//! partial record, removes the matched phrase from the working name, and
//! either continues or stops the fold. The stage order is load-bearing:
//! killstreak before quality prefixes, effects before paintkits, tool
//! compounds before the crate and fallback lookups.
//!
//! Matching is deliberately permissive. Phrases match anywhere in the name,
//! only the first occurrence is removed, and the exception lists below paper
//! over item names that collide with modifier vocabulary ("Haunted Hat" is
//! not a Haunted-quality hat). Changing any of this changes which names
//! resolve, so the quirks stay.

use crate::catalog::Catalog;
use crate::item::{quality, PartialRecord};
use crate::reference;

/// Working state threaded through the stage fold.
struct ParseState {
    name: String,
    item: PartialRecord,
    /// Whether "Strange(e)" appeared, as opposed to an elevated quality
    /// inferred from a plain "Strange" prefix.
    explicit_elevated: bool,
    /// Trailing "#N" captured before the fallback lookup.
    number: Option<u32>,
}

enum Flow {
    Continue,
    Stop,
}

type Stage = fn(&Catalog, &mut ParseState) -> Flow;

const STAGES: [Stage; 17] = [
    stage_strange_tools,
    stage_wear,
    stage_elevated_strange,
    stage_strange,
    stage_craftability,
    stage_tradability,
    stage_unusualifier,
    stage_killstreak,
    stage_australium,
    stage_festivized,
    stage_quality_prefix,
    stage_effect,
    stage_paintkit,
    stage_paint,
    stage_tools,
    stage_war_paint,
    stage_crates_and_fallback,
];

/// Parse a display name into a partial record. The record is complete when
/// both the definition index and quality resolved; callers decide what a
/// partial result means to them.
pub fn parse_name(catalog: &Catalog, name: &str) -> PartialRecord {
    let mut state = ParseState {
        name: name.to_lowercase(),
        item: PartialRecord::default(),
        explicit_elevated: false,
        number: None,
    };

    for stage in STAGES {
        if matches!(stage(catalog, &mut state), Flow::Stop) {
            break;
        }
    }

    state.item
}

/// Remove the first occurrence of `token` and trim the ends. Interior
/// whitespace is left alone.
fn strip_once(name: &mut String, token: &str) -> bool {
    if let Some(pos) = name.find(token) {
        name.replace_range(pos..pos + token.len(), "");
        *name = name.trim().to_string();
        true
    } else {
        false
    }
}

fn replace_first(name: &mut String, from: &str, to: &str) {
    if let Some(pos) = name.find(from) {
        name.replace_range(pos..pos + from.len(), to);
    }
}

/// Parse the integer that follows `prefix` in `name`.
fn number_after(name: &str, prefix: &str) -> Option<u32> {
    let pos = name.find(prefix)?;
    name[pos + prefix.len()..].trim().parse().ok()
}

// ============================================================================
// Stages
// ============================================================================

/// Strange tool items ("Strange Part: ...") carry quality vocabulary in
/// their real display names, so they resolve by verbatim lookup before any
/// other stage can shred them.
fn stage_strange_tools(catalog: &Catalog, state: &mut ParseState) -> Flow {
    if !reference::STRANGE_TOOL_MARKERS.iter().any(|marker| state.name.contains(marker)) {
        return Flow::Continue;
    }

    if let Some(item) = catalog.item_by_name(&state.name) {
        state.item.defindex = Some(item.defindex);
        state.item.quality = state.item.quality.or(Some(item.item_quality));
    }
    Flow::Stop
}

fn stage_wear(_: &Catalog, state: &mut ParseState) -> Flow {
    for (phrase, tier) in reference::WEAR_PHRASES {
        if state.name.contains(phrase) {
            strip_once(&mut state.name, phrase);
            state.item.wear = Some(tier);
            break;
        }
    }
    Flow::Continue
}

fn stage_elevated_strange(_: &Catalog, state: &mut ParseState) -> Flow {
    if state.name.contains("strange(e)") {
        state.item.quality2 = Some(quality::STRANGE);
        state.explicit_elevated = true;
        strip_once(&mut state.name, "strange(e)");
    }
    Flow::Continue
}

fn stage_strange(_: &Catalog, state: &mut ParseState) -> Flow {
    if state.name.contains("strange") {
        state.item.quality = Some(quality::STRANGE);
        strip_once(&mut state.name, "strange");
    }
    Flow::Continue
}

fn stage_craftability(_: &Catalog, state: &mut ParseState) -> Flow {
    replace_first(&mut state.name, "uncraftable", "non-craftable");
    if state.name.contains("non-craftable") {
        strip_once(&mut state.name, "non-craftable");
        state.item.craftable = false;
    }
    Flow::Continue
}

fn stage_tradability(_: &Catalog, state: &mut ParseState) -> Flow {
    replace_first(&mut state.name, "untradeable", "non-tradable");
    replace_first(&mut state.name, "untradable", "non-tradable");
    replace_first(&mut state.name, "non-tradeable", "non-tradable");
    if state.name.contains("non-tradable") {
        strip_once(&mut state.name, "non-tradable");
        state.item.tradable = false;
    }
    Flow::Continue
}

/// "Unusual Taunt: ... Unusualifier" resolves to the Unusualifier tool with
/// the taunt as its target.
fn stage_unusualifier(catalog: &Catalog, state: &mut ParseState) -> Flow {
    if !state.name.contains("unusualifier") {
        return Flow::Continue;
    }

    strip_once(&mut state.name, "unusual ");
    strip_once(&mut state.name, " unusualifier");
    state.item.defindex = Some(reference::UNUSUALIFIER);
    state.item.quality = Some(quality::UNUSUAL);
    state.item.target = catalog.item_by_name(&state.name).map(|item| item.defindex);
    Flow::Stop
}

fn stage_killstreak(_: &Catalog, state: &mut ParseState) -> Flow {
    for (phrase, tier) in reference::KILLSTREAK_PHRASES {
        if state.name.contains(phrase) {
            strip_once(&mut state.name, &format!("{phrase} "));
            state.item.killstreak = Some(tier);
            break;
        }
    }
    Flow::Continue
}

fn stage_australium(_: &Catalog, state: &mut ParseState) -> Flow {
    // "Australium Gold" is a paint, not the metal
    if state.name.contains("australium") && !state.name.contains("australium gold") {
        strip_once(&mut state.name, "australium");
        state.item.australium = true;
    }
    Flow::Continue
}

fn stage_festivized(_: &Catalog, state: &mut ParseState) -> Flow {
    // "Festivized Formation" is a war paint name
    if state.name.contains("festivized") && !state.name.contains("festivized formation") {
        strip_once(&mut state.name, "festivized");
        state.item.festive = true;
    }
    Flow::Continue
}

/// Quality display names used as prefixes ("Vintage ...", "Genuine ...").
/// Item names that begin with a quality word are fenced off through the
/// exception list before matching.
fn stage_quality_prefix(catalog: &Catalog, state: &mut ParseState) -> Flow {
    let mut quality_search = state.name.clone();
    for exception in reference::QUALITY_NAME_EXCEPTIONS {
        if state.name.contains(exception) {
            strip_once(&mut quality_search, exception);
            break;
        }
    }

    // "Haunted Ghosts Vintage Tyrolean" reduces to an exception itself;
    // nothing left that could be a quality prefix
    if reference::QUALITY_NAME_EXCEPTIONS.contains(&quality_search.as_str()) {
        return Flow::Continue;
    }

    for (quality_name, quality_id) in catalog.qualities() {
        let quality_lower = quality_name.to_lowercase();

        if quality_lower == "collector's"
            && quality_search.contains("collector's")
            && quality_search.contains("chemistry set")
        {
            continue;
        }
        if quality_lower == "community" && quality_search.starts_with("community sparkle") {
            continue;
        }

        if quality_search.starts_with(&quality_lower) {
            strip_once(&mut state.name, &quality_lower);
            state.item.quality2 = state.item.quality2.or(state.item.quality);
            state.item.quality = Some(*quality_id);
            break;
        }
    }
    Flow::Continue
}

/// Unusual effect names, matched as substrings against the derived effect
/// map. The guard clauses fence off item names that contain effect words.
fn stage_effect(catalog: &Catalog, state: &mut ParseState) -> Flow {
    let name = &state.name;
    let exclude_atomic =
        ["bonk! atomic punch", "atomic accolade"].iter().any(|ex| name.contains(ex));

    for (effect_name, effect_id) in catalog.effects() {
        let effect = effect_name.to_lowercase();
        let name = &state.name;

        if effect == "stardust" && name.contains("starduster") {
            let mut sub = name.clone();
            strip_once(&mut sub, "stardust");
            if !sub.contains("starduster") {
                continue;
            }
        }
        if effect == "showstopper"
            && !name.contains("taunt: ")
            && !name.contains("shred alert")
        {
            continue;
        }
        if effect == "smoking"
            && (name == "smoking jacket"
                || name.contains("smoking skid lid")
                || name == "the smoking skid lid")
            && !name.contains("smoking smoking")
        {
            continue;
        }
        if effect == "haunted ghosts"
            && name.contains("haunted ghosts")
            && state.item.wear.is_some()
        {
            continue;
        }
        if effect == "spellbound"
            && (name.contains("taunt:") || name.contains("shred alert"))
        {
            continue;
        }
        if effect == "haunted" && name.contains("haunted kraken") {
            continue;
        }
        if effect == "frostbite" && name.contains("frostbite bonnet") {
            continue;
        }
        if effect == "accursed" && name.contains("accursed apparition") {
            continue;
        }
        if effect == "atomic" && (name.contains("subatomic") || exclude_atomic) {
            continue;
        }
        if effect == "hot"
            && (state.item.wear.is_none()
                || (!name.contains("hot ") && name.contains("shotgun"))
                || name.contains("shot ")
                || name.contains("plaid potshotter"))
        {
            continue;
        }
        if effect == "cool" && state.item.wear.is_none() {
            continue;
        }

        if state.name.contains(&effect) {
            strip_once(&mut state.name, &effect);
            state.item.effect = Some(*effect_id);

            // Community Sparkle keeps the base quality unless none is known
            if *effect_id == 4 && state.item.quality.is_none() {
                state.item.quality = Some(quality::UNUSUAL);
            } else if state.item.quality != Some(quality::UNUSUAL) {
                state.item.quality2 = state.item.quality2.or(state.item.quality);
                state.item.quality = Some(quality::UNUSUAL);
            }
            break;
        }
    }
    Flow::Continue
}

/// Paintkit names on decorated weapons; only meaningful once a wear tier
/// proved the name describes a decorated item. A hit may remap the defindex
/// to a dedicated skin item.
fn stage_paintkit(catalog: &Catalog, state: &mut ParseState) -> Flow {
    if state.item.wear.is_none() {
        return Flow::Continue;
    }

    for (paintkit_name, paintkit_id) in catalog.paintkits() {
        let paintkit = paintkit_name.to_lowercase();

        // "Night Owl" must not swallow "Night Owl Mk.II", and likewise for
        // the (Green) and Chilly variants
        if state.name.contains("mk.ii") && !paintkit.contains("mk.ii") {
            continue;
        }
        if state.name.contains("(green)") && !paintkit.contains("(green)") {
            continue;
        }
        if state.name.contains("chilly") && !paintkit.contains("chilly") {
            continue;
        }

        if state.name.contains(&paintkit) {
            // both removals before the single trim, or the leading space of
            // " | " is gone by the time we look for it
            replace_first(&mut state.name, &paintkit, "");
            replace_first(&mut state.name, " | ", "");
            state.name = state.name.trim().to_string();
            state.item.paintkit = Some(*paintkit_id);

            // A decorated weapon with an effect is Unusual only when the
            // Strange was written explicitly as an elevation
            if state.item.effect.is_some() {
                if state.item.quality == Some(quality::UNUSUAL)
                    && state.item.quality2 == Some(quality::STRANGE)
                {
                    if state.explicit_elevated {
                        state.item.quality = Some(quality::DECORATED);
                    } else {
                        state.item.quality = Some(quality::STRANGE);
                        state.item.quality2 = None;
                    }
                } else if state.item.quality == Some(quality::UNUSUAL)
                    && state.item.quality2.is_none()
                {
                    state.item.quality = Some(quality::DECORATED);
                }
            }
            if state.item.quality.is_none() {
                state.item.quality = Some(quality::DECORATED);
            }
            break;
        }
    }

    if let Some(paintkit_id) = state.item.paintkit {
        for kind in reference::WEAPON_KINDS {
            if state.name.contains(kind.token()) {
                if let Some(&defindex) = kind.skins().get(&paintkit_id) {
                    state.item.defindex = Some(defindex);
                    return Flow::Stop;
                }
            }
        }
    }
    Flow::Continue
}

fn stage_paint(catalog: &Catalog, state: &mut ParseState) -> Flow {
    if !state.name.contains("(paint: ") {
        return Flow::Continue;
    }

    replace_first(&mut state.name, "(paint: ", "");
    replace_first(&mut state.name, ")", "");
    state.name = state.name.trim().to_string();

    for (paint_name, decimal) in catalog.paints() {
        let paint = paint_name.to_lowercase();
        if state.name.contains(&paint) {
            strip_once(&mut state.name, &paint);
            state.item.paint = Some(*decimal);
            break;
        }
    }
    Flow::Continue
}

/// Killstreak fabricators, chemistry sets, strangifiers, and kits. These
/// compound tools wrap another item name, which becomes the target or
/// output of the tool.
fn stage_tools(catalog: &Catalog, state: &mut ParseState) -> Flow {
    let item = &mut state.item;

    if state.name.contains("kit fabricator") && item.killstreak.is_some_and(|k| k > 1) {
        let professional = item.killstreak.is_some_and(|k| k > 2);
        strip_once(&mut state.name, "kit fabricator");
        item.defindex = Some(if professional {
            reference::FABRICATOR_PROFESSIONAL
        } else {
            reference::FABRICATOR_SPECIALIZED
        });

        // generic fabricators name no target item
        if !state.name.is_empty() {
            let Some(target) = catalog.item_by_name(&state.name) else {
                return Flow::Stop;
            };
            item.target = Some(target.defindex);
            item.quality = item.quality.or(Some(target.item_quality));
        }
        if item.quality.is_none() {
            item.quality = Some(quality::UNIQUE);
        }
        item.output = Some(if professional {
            reference::KIT_PROFESSIONAL
        } else {
            reference::KIT_SPECIALIZED
        });
        item.output_quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    if (!state.name.contains("strangifier chemistry set")
        || state.name.contains("collector's"))
        && state.name.contains("chemistry set")
    {
        strip_once(&mut state.name, "collector's ");
        strip_once(&mut state.name, "chemistry set");

        // "A Rather Festive Tree" is an output name, not the festive variant
        item.defindex = Some(
            if state.name.contains("festive") && !state.name.contains("a rather festive tree") {
                reference::FESTIVE_CHEMISTRY_SET
            } else {
                reference::CHEMISTRY_SET
            },
        );

        let Some(output) = catalog.item_by_name(&state.name) else {
            return Flow::Stop;
        };
        item.output = Some(output.defindex);
        item.output_quality = Some(quality::COLLECTORS);
        item.quality = item.quality.or(Some(output.item_quality));
        return Flow::Stop;
    }

    if state.name.contains("strangifier chemistry set") {
        strip_once(&mut state.name, "strangifier chemistry set");

        let Some(target) = catalog.item_by_name(&state.name) else {
            return Flow::Stop;
        };
        item.defindex = Some(reference::STRANGIFIER_CHEMISTRY_SET);
        item.target = Some(target.defindex);
        item.quality = Some(quality::UNIQUE);
        item.output = Some(reference::STRANGIFIER);
        item.output_quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    if state.name.contains("strangifier") {
        strip_once(&mut state.name, "strangifier");
        item.defindex = Some(reference::STRANGIFIER);

        let Some(target) = catalog.item_by_name(&state.name) else {
            return Flow::Stop;
        };
        item.target = Some(target.defindex);
        item.quality = item.quality.or(Some(target.item_quality));
        return Flow::Stop;
    }

    if state.name.contains("kit") && item.killstreak.is_some() {
        strip_once(&mut state.name, "kit");
        item.defindex = Some(match item.killstreak {
            Some(1) => reference::KIT_BASIC,
            Some(2) => reference::KIT_SPECIALIZED,
            _ => reference::KIT_PROFESSIONAL,
        });

        // generic kits name no target item
        if !state.name.is_empty() {
            let Some(target) = catalog.item_by_name(&state.name) else {
                return Flow::Stop;
            };
            item.target = Some(target.defindex);
        }
        if item.quality.is_none() {
            item.quality = Some(quality::UNIQUE);
        }
        return Flow::Stop;
    }

    Flow::Continue
}

/// A bare "War Paint" residue with a known paintkit resolves through the
/// catalog's internal "Paintkit N" item names.
fn stage_war_paint(catalog: &Catalog, state: &mut ParseState) -> Flow {
    let Some(paintkit_id) = state.item.paintkit else {
        return Flow::Continue;
    };
    if !state.name.contains("war paint") {
        return Flow::Continue;
    }

    if state.item.quality.is_none() {
        state.item.quality = Some(quality::DECORATED);
    }
    let internal = format!("Paintkit {paintkit_id}");
    if let Some(item) = catalog.item_by_internal_name(&internal) {
        state.item.defindex = Some(item.defindex);
    }
    Flow::Stop
}

/// Crate series names, trailing craft numbers, retired keys, and finally
/// the plain display-name lookup.
fn stage_crates_and_fallback(catalog: &Catalog, state: &mut ParseState) -> Flow {
    let name = &mut state.name;
    replace_first(name, " series ", " ");
    replace_first(name, " series#", " #");

    if name.contains("salvaged mann co. supply crate #") {
        state.item.crate_series = number_after(name, "salvaged mann co. supply crate #");
        state.item.defindex = Some(reference::SALVAGED_CRATE);
        state.item.quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    if name.contains("select reserve mann co. supply crate #") {
        state.item.defindex = Some(reference::SELECT_RESERVE_CRATE);
        state.item.crate_series = Some(60);
        state.item.quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    if name.contains("mann co. supply crate #") {
        let series = number_after(name, "mann co. supply crate #");
        if let Some(series) = series {
            if reference::CRATE_SERIES_5022.contains(&series) {
                state.item.defindex = Some(5022);
            } else if reference::CRATE_SERIES_5041.contains(&series) {
                state.item.defindex = Some(5041);
            } else if reference::CRATE_SERIES_5045.contains(&series) {
                state.item.defindex = Some(5045);
            }
        }
        state.item.crate_series = series;
        state.item.quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    if name.contains("mann co. supply munition #") {
        let series = number_after(name, "mann co. supply munition #");
        state.item.defindex =
            series.and_then(|s| reference::MUNITION_CRATES.get(&s).copied());
        state.item.crate_series = series;
        state.item.quality = Some(quality::UNIQUE);
        return Flow::Stop;
    }

    // capture a trailing "#N"; whether it is a craft number depends on what
    // the fallback lookup resolves
    if let Some(pos) = name
        .char_indices()
        .find(|&(i, c)| {
            c == '#' && name[i + 1..].chars().next().is_some_and(|d| d.is_ascii_digit())
        })
        .map(|(i, _)| i)
    {
        let digits: String =
            name[pos + 1..].chars().take_while(char::is_ascii_digit).collect();
        state.number = digits.parse().ok();
        name.replace_range(pos..pos + 1 + digits.len(), "");
        *name = name.trim().to_string();
    }

    if let Some(retired) = reference::retired_key_by_name(name) {
        state.item.defindex = Some(retired.defindex);
        state.item.quality = state.item.quality.or(Some(quality::UNIQUE));
        return Flow::Stop;
    }

    let Some(schema_item) = catalog.item_by_name_loose(name) else {
        return Flow::Stop;
    };

    state.item.defindex = Some(schema_item.defindex);
    state.item.quality = state.item.quality.or(Some(schema_item.item_quality));

    // promo items resolve to their Genuine-only twin
    if state.item.quality == Some(quality::GENUINE) {
        if let Some(genuine) = reference::exclusive_genuine(schema_item.defindex) {
            state.item.defindex = Some(genuine);
        }
    }

    if schema_item.item_class == "supply_crate" {
        state.item.crate_series = catalog.crate_series_for(schema_item.defindex);
    } else if state.number.is_some() {
        state.item.craft_number = state.number;
    }
    Flow::Stop
}
