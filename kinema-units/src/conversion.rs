//! Calculator conversion table
//!
//! A small, hardcoded mapping from unit symbol to base-unit factor per
//! quantity category. Kept separate from the unit catalog: the factors are
//! the rounded values the calculator has always used (km/h = 0.277778,
//! lb = 0.453592) and results must not drift.

use kinema_core::KinemaError;

/// One quantity category of the calculator table.
///
/// The first unit is the base (SI) unit and has factor 1; it doubles as
/// the fallback when the user types an unknown symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityCategory {
    pub name: &'static str,
    pub units: &'static [(&'static str, f64)],
}

/// The unit the calculator settled on for one input
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUnit {
    pub symbol: &'static str,
    pub factor: f64,
    /// True when the requested symbol was unknown and the base unit was used
    pub fell_back: bool,
}

impl QuantityCategory {
    /// The base unit: first entry, factor 1
    pub fn base_unit(&self) -> &'static str {
        self.units.first().map(|(symbol, _)| *symbol).unwrap_or("")
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|(symbol, _)| *symbol).collect()
    }

    /// Resolve a typed symbol, substituting the base unit for unknown input.
    ///
    /// Unknown symbols are not an error: the calculator reports the
    /// substitution and continues with factor 1.
    pub fn resolve(&self, symbol: &str) -> ResolvedUnit {
        let symbol = symbol.trim();
        match self.units.iter().find(|(s, _)| *s == symbol) {
            Some((s, factor)) => ResolvedUnit { symbol: *s, factor: *factor, fell_back: false },
            None => ResolvedUnit { symbol: self.base_unit(), factor: 1.0, fell_back: true },
        }
    }

    /// Check the base-unit invariant: first unit has factor 1 and no other does
    pub fn validate(&self) -> Result<(), KinemaError> {
        let base_count = self.units.iter().filter(|(_, factor)| *factor == 1.0).count();
        match self.units.first() {
            Some((_, factor)) if *factor == 1.0 && base_count == 1 => Ok(()),
            _ => Err(KinemaError::internal(format!(
                "category '{}' must list exactly one base unit (factor 1) first", self.name))),
        }
    }
}

static MASS: [(&str, f64); 3] = [("kg", 1.0), ("g", 0.001), ("lb", 0.453592)];
static VELOCITY: [(&str, f64); 3] = [("m/s", 1.0), ("km/h", 0.277778), ("mph", 0.44704)];
static FORCE: [(&str, f64); 2] = [("N", 1.0), ("lbf", 4.44822)];
static DISTANCE: [(&str, f64); 4] = [("m", 1.0), ("cm", 0.01), ("km", 1000.0), ("mi", 1609.34)];
static TIME: [(&str, f64); 3] = [("s", 1.0), ("min", 60.0), ("hr", 3600.0)];
static ENERGY: [(&str, f64); 3] = [("J", 1.0), ("cal", 4.184), ("kWh", 3_600_000.0)];

/// Immutable set of quantity categories used by the calculator
#[derive(Debug, Clone)]
pub struct ConversionTable {
    categories: Vec<QuantityCategory>,
}

impl ConversionTable {
    /// Build a table, rejecting categories that break the base-unit invariant
    pub fn new(categories: Vec<QuantityCategory>) -> Result<Self, KinemaError> {
        for category in &categories {
            category.validate()?;
        }
        Ok(Self { categories })
    }

    /// The calculator's standard table
    pub fn standard() -> Self {
        Self {
            categories: vec![
                QuantityCategory { name: "mass", units: &MASS },
                QuantityCategory { name: "velocity", units: &VELOCITY },
                QuantityCategory { name: "force", units: &FORCE },
                QuantityCategory { name: "distance", units: &DISTANCE },
                QuantityCategory { name: "time", units: &TIME },
                QuantityCategory { name: "energy", units: &ENERGY },
            ],
        }
    }

    pub fn get(&self, name: &str) -> Result<&QuantityCategory, KinemaError> {
        self.categories.iter()
            .find(|c| c.name == name)
            .ok_or_else(|| KinemaError::unknown_category(name))
    }

    pub fn categories(&self) -> &[QuantityCategory] {
        &self.categories
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_base_factor_is_one() {
        let table = ConversionTable::standard();
        for category in table.categories() {
            let base = category.resolve(category.base_unit());
            assert_eq!(base.factor, 1.0, "{}", category.name);
            assert!(!base.fell_back, "{}", category.name);
            assert!(category.validate().is_ok(), "{}", category.name);
        }
    }

    #[test]
    fn test_standard_table_passes_constructor() {
        let table = ConversionTable::new(ConversionTable::standard().categories().to_vec());
        assert!(table.is_ok());
    }

    #[test]
    fn test_base_units() {
        let table = ConversionTable::standard();
        assert_eq!(table.get("mass").unwrap().base_unit(), "kg");
        assert_eq!(table.get("velocity").unwrap().base_unit(), "m/s");
        assert_eq!(table.get("energy").unwrap().base_unit(), "J");
    }

    #[test]
    fn test_known_unit_resolves() {
        let table = ConversionTable::standard();
        let resolved = table.get("mass").unwrap().resolve("g");
        assert_eq!(resolved, ResolvedUnit { symbol: "g", factor: 0.001, fell_back: false });
    }

    #[test]
    fn test_unknown_unit_falls_back_to_base() {
        let table = ConversionTable::standard();
        let resolved = table.get("mass").unwrap().resolve("xyz");
        assert_eq!(resolved.symbol, "kg");
        assert_eq!(resolved.factor, 1.0);
        assert!(resolved.fell_back);
    }

    #[test]
    fn test_resolved_factors() {
        let table = ConversionTable::standard();
        assert_eq!(table.get("time").unwrap().resolve("min").factor, 60.0);
        assert_eq!(table.get("distance").unwrap().resolve(" km ").factor, 1000.0);
        assert_eq!(table.get("mass").unwrap().resolve("stone").factor, 1.0);
    }

    #[test]
    fn test_unknown_category() {
        let table = ConversionTable::standard();
        let err = table.get("charge").unwrap_err();
        assert_eq!(err.code, kinema_core::codes::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_rejects_missing_base_unit() {
        static BAD: [(&str, f64); 2] = [("g", 0.001), ("kg", 1.0)];
        let result = ConversionTable::new(vec![QuantityCategory { name: "mass", units: &BAD }]);
        assert!(result.is_err());

        static DOUBLE: [(&str, f64); 2] = [("kg", 1.0), ("kilo", 1.0)];
        let result = ConversionTable::new(vec![QuantityCategory { name: "mass", units: &DOUBLE }]);
        assert!(result.is_err());
    }
}
