//! Kinema Formulas
//!
//! Provides:
//! - `Formula`: pure computations over base-unit inputs, with metadata
//!   describing which quantities to prompt for
//! - `FormulaRegistry`: ordered registry the calculator menu is built from
//! - `DisplayCatalog`: symbolic formulas for the viewer

mod traits;
mod registry;
pub mod mechanics;
pub mod display;

pub use traits::{Formula, FormulaMeta, FormulaInput, InputMeta};
pub use registry::FormulaRegistry;
pub use display::{DisplayCatalog, DisplayFormula, FigureStyle, HAlign, standard_display_catalog};

/// Load the mechanics formulas into registry
pub fn load_mechanics_library(registry: FormulaRegistry) -> FormulaRegistry {
    registry
        .with_formula(mechanics::Momentum)
        .with_formula(mechanics::Force)
        .with_formula(mechanics::KineticEnergy)
        .with_formula(mechanics::WorkDone)
        .with_formula(mechanics::Power)
}

/// Create registry with the standard formulas
pub fn standard_registry() -> FormulaRegistry {
    load_mechanics_library(FormulaRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_units::ConversionTable;

    #[test]
    fn test_load_mechanics_library() {
        let registry = load_mechanics_library(FormulaRegistry::new());
        assert_eq!(registry.len(), 5);
        assert!(registry.get("momentum").is_some());
        assert!(registry.get("force").is_some());
        assert!(registry.get("kinetic_energy").is_some());
        assert!(registry.get("work_done").is_some());
        assert!(registry.get("power").is_some());
    }

    #[test]
    fn test_every_input_category_exists_in_table() {
        let table = ConversionTable::standard();
        for meta in standard_registry().metas() {
            for input in meta.inputs {
                assert!(
                    table.get(input.category).is_ok(),
                    "{}.{} reads unknown category {}", meta.name, input.name, input.category
                );
            }
        }
    }
}
