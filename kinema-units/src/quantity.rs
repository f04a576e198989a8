//! Quantity type - a value with a unit label

use std::fmt;

/// A computed physical quantity.
///
/// The unit is a display label, not a catalog unit: formula results may
/// carry composite labels such as `lb*km/h` that the catalog does not know.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Quantity { value, unit: unit.into() }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(6.0, "kg*m/s").to_string(), "6 kg*m/s");
        assert_eq!(Quantity::new(0.5, "J").to_string(), "0.5 J");
        assert_eq!(Quantity::new(3.0, "").to_string(), "3");
    }
}
