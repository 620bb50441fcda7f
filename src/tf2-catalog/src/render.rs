//! Display-name rendering
//!
//! The inverse of parsing: assemble the canonical display name from a
//! resolved [`ItemRecord`]. Every id is looked up against the catalog and
//! any miss fails the whole render; a partially rendered name would go
//! undetected by callers that feed names to listings.

use crate::catalog::Catalog;
use crate::item::{quality, ItemRecord};
use crate::reference;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no catalog item with defindex {0}")]
    UnknownDefindex(u32),
    #[error("no quality with id {0}")]
    UnknownQuality(u32),
    #[error("no unusual effect with id {0}")]
    UnknownEffect(u32),
    #[error("no paintkit with id {0}")]
    UnknownPaintkit(u32),
    #[error("no paint with decimal value {0}")]
    UnknownPaint(u32),
    #[error("target item {0} is not in the catalog")]
    UnknownTarget(u32),
    #[error("output item {0} is not in the catalog")]
    UnknownOutput(u32),
    #[error("wear tier {0} is out of range")]
    InvalidWear(u8),
    #[error("killstreak tier {0} is out of range")]
    InvalidKillstreak(u8),
}

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub struct NameOptions {
    /// Prefix "The " for proper-named items when nothing else precedes
    pub proper: bool,
    /// Join paintkit and item name with " | " instead of a space
    pub pipe_for_skin: bool,
    /// Steam Community Market format: no craftability or tradability
    /// prefixes, no effect names, URL-escaped crate series
    pub market: bool,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self { proper: true, pipe_for_skin: false, market: false }
    }
}

/// Render the display name for `item`.
pub fn item_name(
    catalog: &Catalog,
    item: &ItemRecord,
    options: NameOptions,
) -> Result<String, RenderError> {
    let schema_item = catalog
        .item_by_defindex(item.defindex)
        .ok_or(RenderError::UnknownDefindex(item.defindex))?;

    let quality_name = |id: u32| {
        catalog
            .quality_name_by_id(id)
            .ok_or(RenderError::UnknownQuality(id))
    };

    let mut name = String::new();

    if !options.market {
        if !item.tradable {
            name.push_str("Non-Tradable ");
        }
        if !item.craftable {
            name.push_str("Non-Craftable ");
        }
    }

    if let Some(elevated) = item.quality2 {
        name.push_str(quality_name(elevated)?);
        if !options.market && (item.wear.is_some() || item.paintkit.is_some()) {
            name.push_str("(e)");
        }
        name.push(' ');
    }

    // Unusual shows its quality only without an effect; Decorated never
    // shows it; Unique shows it only under an elevated quality. Items that
    // are Unusual by definition always show it.
    let show_quality = (item.quality == quality::UNIQUE && item.quality2.is_some())
        || (item.quality != quality::UNIQUE
            && item.quality != quality::DECORATED
            && item.quality != quality::UNUSUAL)
        || (item.quality == quality::UNUSUAL && item.effect.is_none())
        || schema_item.item_quality == quality::UNUSUAL;
    if show_quality {
        name.push_str(quality_name(item.quality)?);
        name.push(' ');
    }

    if !options.market {
        if let Some(effect) = item.effect {
            name.push_str(
                catalog
                    .effect_name_by_id(effect)
                    .ok_or(RenderError::UnknownEffect(effect))?,
            );
            name.push(' ');
        }
    }

    if item.festive {
        name.push_str("Festivized ");
    }

    if let Some(tier) = item.killstreak {
        let tier_name = (1..=3)
            .contains(&tier)
            .then(|| reference::KILLSTREAK_NAMES[usize::from(tier) - 1])
            .ok_or(RenderError::InvalidKillstreak(tier))?;
        name.push_str(tier_name);
        name.push(' ');
    }

    if let Some(target) = item.target {
        let target_item = catalog
            .item_by_defindex(target)
            .ok_or(RenderError::UnknownTarget(target))?;
        name.push_str(&target_item.item_name);
        name.push(' ');
    }

    if let Some(output_quality) = item.output_quality {
        if output_quality != quality::UNIQUE {
            name = format!("{} {name}", quality_name(output_quality)?);
        }
    }

    if let Some(output) = item.output {
        let output_item = catalog
            .item_by_defindex(output)
            .ok_or(RenderError::UnknownOutput(output))?;
        name.push_str(&output_item.item_name);
        name.push(' ');
    }

    if item.australium {
        name.push_str("Australium ");
    }

    if let Some(paintkit) = item.paintkit {
        name.push_str(
            catalog
                .paintkit_name_by_id(paintkit)
                .ok_or(RenderError::UnknownPaintkit(paintkit))?,
        );
        name.push_str(if options.pipe_for_skin { " | " } else { " " });
    }

    if options.proper && name.is_empty() && schema_item.proper_name {
        name.push_str("The ");
    }

    match reference::retired_key(item.defindex) {
        Some(retired) => name.push_str(retired.name),
        None => name.push_str(&schema_item.item_name),
    }

    if let Some(wear) = item.wear {
        let wear_name = reference::WEAR_NAMES
            .get(usize::from(wear).wrapping_sub(1))
            .ok_or(RenderError::InvalidWear(wear))?;
        name.push_str(&format!(" ({wear_name})"));
    }

    if let Some(series) = item.crate_series {
        if options.market {
            // the market only appends the series when the crate item itself
            // leads with the series attribute
            let leads_with_series = schema_item
                .attributes
                .first()
                .is_some_and(|attribute| attribute.class == "supply_crate_series");
            if leads_with_series {
                name.push_str(&format!(" Series %23{series}"));
            }
        } else {
            name.push_str(&format!(" #{series}"));
        }
    } else if let Some(craft_number) = item.craft_number {
        name.push_str(&format!(" #{craft_number}"));
    }

    if !options.market {
        if let Some(paint) = item.paint {
            let paint_name = catalog
                .paint_name_by_decimal(paint)
                .ok_or(RenderError::UnknownPaint(paint))?;
            name.push_str(&format!(" (Paint: {paint_name})"));
        }
    }

    Ok(name)
}
