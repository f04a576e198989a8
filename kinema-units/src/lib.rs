//! Kinema Units - Physical units for the console tools
//!
//! Two independent sources of unit knowledge live here:
//! - `UnitCatalog`: dimension-aware catalog used by the unit browser to
//!   list compatible units (length, mass, time, speed, force, energy,
//!   power, pressure, temperature, volume)
//! - `ConversionTable`: the calculator's hardcoded factor table
//!   (mass, velocity, force, distance, time, energy)

mod dimension;
mod unit;
mod quantity;
mod catalog;
mod conversion;

pub use dimension::Dimension;
pub use unit::{Unit, CatalogError};
pub use quantity::Quantity;
pub use catalog::{UnitCatalog, CategoryEntry, CATALOG_CATEGORIES, catalog_category};
pub use conversion::{ConversionTable, QuantityCategory, ResolvedUnit};
