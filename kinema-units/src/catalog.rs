//! Unit catalog - the browsable set of units, grouped by dimension
//!
//! The catalog answers one question for the console: which units are
//! compatible with a given base unit. It is not used for calculator math,
//! see `conversion` for that.

use std::collections::{BTreeSet, HashMap};
use crate::{Dimension, Unit};
use crate::unit::CatalogError;

/// A browsable category and the base unit used to query it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub base_unit: &'static str,
}

/// Categories offered by the unit browser, in menu order
pub static CATALOG_CATEGORIES: [CategoryEntry; 10] = [
    CategoryEntry { name: "Length", base_unit: "m" },
    CategoryEntry { name: "Mass", base_unit: "kg" },
    CategoryEntry { name: "Time", base_unit: "s" },
    CategoryEntry { name: "Speed", base_unit: "m/s" },
    CategoryEntry { name: "Force", base_unit: "N" },
    CategoryEntry { name: "Energy", base_unit: "J" },
    CategoryEntry { name: "Power", base_unit: "W" },
    CategoryEntry { name: "Pressure", base_unit: "Pa" },
    CategoryEntry { name: "Temperature", base_unit: "kelvin" },
    CategoryEntry { name: "Volume", base_unit: "liter" },
];

/// Find a browsable category by name (case-insensitive)
pub fn catalog_category(name: &str) -> Option<&'static CategoryEntry> {
    CATALOG_CATEGORIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Units of one dimension, plus spelled-out names that resolve to them
struct UnitGroup {
    dimension: Dimension,
    symbols: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
}

static UNIT_GROUPS: [UnitGroup; 10] = [
    UnitGroup {
        dimension: Dimension::LENGTH,
        symbols: &[
            "m", "km", "cm", "mm", "um", "nm", "in", "ft", "yd", "mi", "nmi", "au", "ly",
            "pc",
        ],
        aliases: &[
            ("meter", "m"), ("metre", "m"), ("kilometer", "km"), ("centimeter", "cm"),
            ("millimeter", "mm"), ("μm", "um"), ("micron", "um"), ("inch", "in"),
            ("foot", "ft"), ("feet", "ft"), ("yard", "yd"), ("mile", "mi"),
        ],
    },
    UnitGroup {
        dimension: Dimension::MASS,
        symbols: &[
            "kg", "g", "mg", "ug", "t", "lb", "oz", "st", "ton", "lton", "ct", "gr",
        ],
        aliases: &[
            ("kilogram", "kg"), ("gram", "g"), ("milligram", "mg"), ("pound", "lb"),
            ("lbs", "lb"), ("ounce", "oz"), ("tonne", "t"), ("μg", "ug"),
        ],
    },
    UnitGroup {
        dimension: Dimension::TIME,
        symbols: &[
            "s", "ms", "us", "ns", "min", "h", "d", "wk", "mo", "yr",
        ],
        aliases: &[
            ("second", "s"), ("sec", "s"), ("minute", "min"), ("hour", "h"), ("hr", "h"),
            ("day", "d"), ("week", "wk"), ("year", "yr"), ("μs", "us"),
        ],
    },
    UnitGroup {
        dimension: Dimension::VELOCITY,
        symbols: &[
            "m/s", "km/h", "mph", "ft/s", "kn", "c", "mach",
        ],
        aliases: &[
            ("kph", "km/h"), ("kmh", "km/h"), ("knot", "kn"), ("fps", "ft/s"),
        ],
    },
    UnitGroup {
        dimension: Dimension::FORCE,
        symbols: &[
            "N", "kN", "mN", "dyn", "lbf", "kgf",
        ],
        aliases: &[
            ("newton", "N"),
        ],
    },
    UnitGroup {
        dimension: Dimension::ENERGY,
        symbols: &[
            "J", "kJ", "MJ", "mJ", "cal", "kcal", "Wh", "kWh", "eV", "BTU", "erg", "ftlb",
        ],
        aliases: &[
            ("joule", "J"), ("calorie", "cal"), ("kilocalorie", "kcal"),
        ],
    },
    UnitGroup {
        dimension: Dimension::POWER,
        symbols: &[
            "W", "kW", "MW", "mW", "hp", "PS",
        ],
        aliases: &[
            ("watt", "W"), ("horsepower", "hp"),
        ],
    },
    UnitGroup {
        dimension: Dimension::PRESSURE,
        symbols: &[
            "Pa", "kPa", "MPa", "hPa", "bar", "mbar", "atm", "psi", "mmHg", "torr",
        ],
        aliases: &[
            ("pascal", "Pa"), ("atmosphere", "atm"),
        ],
    },
    UnitGroup {
        dimension: Dimension::TEMPERATURE,
        symbols: &[
            "K", "degC", "degF", "degR",
        ],
        aliases: &[
            ("kelvin", "K"), ("celsius", "degC"), ("°C", "degC"), ("fahrenheit", "degF"),
            ("°F", "degF"), ("rankine", "degR"),
        ],
    },
    UnitGroup {
        dimension: Dimension::VOLUME,
        symbols: &[
            "m3", "L", "dL", "mL", "cm3", "gal", "qt", "pt", "cup", "floz", "impgal", "ft3",
            "in3",
        ],
        aliases: &[
            ("liter", "L"), ("litre", "L"), ("l", "L"), ("milliliter", "mL"), ("ml", "mL"),
            ("cc", "cm3"), ("gallon", "gal"),
        ],
    },
];

/// Registry of all known units
pub struct UnitCatalog {
    units: HashMap<&'static str, Unit>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut units = HashMap::new();
        let mut aliases = HashMap::new();
        for group in UNIT_GROUPS.iter() {
            for &symbol in group.symbols {
                units.insert(symbol, Unit::new(symbol, group.dimension));
            }
            aliases.extend(group.aliases.iter().copied());
        }
        UnitCatalog { units, aliases }
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Symbols of every unit sharing the dimension of `base`.
    ///
    /// Canonical symbols only (aliases are not listed), sorted ascending.
    pub fn compatible_units(&self, base: &str) -> Result<BTreeSet<String>, CatalogError> {
        let base_unit = self.get(base)
            .ok_or_else(|| CatalogError::UnknownUnit(base.to_string()))?;

        Ok(self.units.values()
            .filter(|u| u.is_compatible(base_unit))
            .map(|u| u.symbol.to_string())
            .collect())
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
