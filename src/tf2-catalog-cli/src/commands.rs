use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tf2_catalog::{Catalog, CatalogSnapshot, CharacterClass, ItemRecord, NameOptions};

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    Ok(Catalog::new(snapshot))
}

fn parse_record(record: &str) -> Result<ItemRecord> {
    serde_json::from_str(record).context("failed to parse the item record JSON")
}

pub fn parse(catalog: &Catalog, name: &str, check: bool) -> Result<()> {
    let Some(item) = catalog.record_from_name(name) else {
        bail!("{name:?} did not resolve to an item");
    };

    println!("{}", serde_json::to_string_pretty(&item)?);

    if check && !tf2_catalog::exists(catalog, &item) {
        bail!("parsed, but this combination does not exist");
    }
    Ok(())
}

pub fn name(
    catalog: &Catalog,
    record: &str,
    no_proper: bool,
    pipe: bool,
    market: bool,
) -> Result<()> {
    let item = parse_record(record)?;
    let options = NameOptions { proper: !no_proper, pipe_for_skin: pipe, market };
    let name = tf2_catalog::item_name(catalog, &item, options)?;
    println!("{name}");
    Ok(())
}

pub fn exists(catalog: &Catalog, record: &str) -> Result<()> {
    let item = parse_record(record)?;
    if !tf2_catalog::exists(catalog, &item) {
        bail!("defindex {} with these modifiers does not exist", item.defindex);
    }
    println!("exists");
    Ok(())
}

pub fn stats(catalog: &Catalog) -> Result<()> {
    let snapshot = catalog.snapshot();
    println!("items:             {}", snapshot.items.len());
    println!("attributes:        {}", snapshot.attributes.len());
    println!("effects:           {}", catalog.effects().len());
    println!("paintkits:         {}", catalog.paintkits().len());
    println!("paints:            {}", catalog.paints().len());
    println!("qualities:         {}", catalog.qualities().len());
    println!("strange parts:     {}", catalog.strange_parts().len());
    println!("craftable weapons: {}", catalog.craftable_weapons().len());
    println!("paintable items:   {}", catalog.paintable_defindexes().len());
    Ok(())
}

pub fn parts(catalog: &Catalog) -> Result<()> {
    let mut parts = catalog.strange_parts();
    parts.sort_by_key(|(_, id)| *id);
    for (name, id) in parts {
        println!("{id:>4}  {name}");
    }
    Ok(())
}

pub fn weapons(catalog: &Catalog, class: Option<&str>, uncraftable: bool) -> Result<()> {
    let defindexes = match (class, uncraftable) {
        (Some(_), true) => bail!("--class and --uncraftable are mutually exclusive"),
        (Some(class), false) => {
            let class: CharacterClass = class.parse()?;
            catalog.weapons_for_crafting_by_class(class)
        }
        (None, true) => catalog.uncraftable_weapons_for_trading(),
        (None, false) => catalog.craftable_weapons_for_trading(),
    };

    for defindex in defindexes {
        println!("{defindex}");
    }
    Ok(())
}
