//! # tf2-catalog
//!
//! Team Fortress 2 item catalog - bidirectional translation between item
//! display names and structured item records.
//!
//! This library provides functionality to:
//! - Index a catalog snapshot for defindex and name lookups
//! - Parse display names into structured item records
//! - Render the canonical display name of a record
//! - Check whether a record names an item combination that can exist
//! - Export derived maps (qualities, effects, paints, strange parts, ...)
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! use tf2_catalog::{Catalog, CatalogSnapshot, NameOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = fs::read_to_string("schema.json")?;
//! let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
//! let catalog = Catalog::new(snapshot);
//!
//! let item = catalog
//!     .record_from_name("Strange Australium Scattergun")
//!     .expect("name did not resolve");
//! assert_eq!(item.defindex, 200);
//! assert_eq!(item.quality, 11);
//!
//! let name = tf2_catalog::item_name(&catalog, &item, NameOptions::default())?;
//! assert_eq!(name, "Strange Australium Scattergun");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod item;
pub mod parse;
pub mod reference;
pub mod render;
pub mod snapshot;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, CatalogStore, CharacterClass, UnknownClass};
#[doc(inline)]
pub use item::{ItemRecord, PartialRecord};
#[doc(inline)]
pub use parse::parse_name;
#[doc(inline)]
pub use render::{item_name, NameOptions, RenderError};
#[doc(inline)]
pub use snapshot::{CatalogItem, CatalogSnapshot};
#[doc(inline)]
pub use validate::exists;
