//! Unit catalog browser
//!
//! Lists every unit compatible with a category's base unit, laid out in
//! columns read top to bottom, then left to right.

use crate::console::Console;
use crate::menu::Menu;
use kinema_core::KinemaError;
use kinema_units::{catalog_category, UnitCatalog, CATALOG_CATEGORIES};

/// Column layout for unit listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: usize,
    pub width: usize,
}

impl ColumnLayout {
    pub fn new(columns: usize, width: usize) -> Self {
        Self { columns: columns.max(1), width }
    }

    /// Rows needed for `count` items
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Lay items out column-major: cell (row, col) holds
    /// `items[row + col * rows]`.
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> Vec<String> {
        let rows = self.rows(items.len());
        (0..rows)
            .map(|row| {
                (0..self.columns)
                    .filter_map(|col| items.get(row + col * rows))
                    .map(|item| format!("{:<width$}", item.as_ref(), width = self.width))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(3, 20)
    }
}

pub struct UnitBrowser<'a> {
    catalog: &'a UnitCatalog,
    layout: ColumnLayout,
}

impl<'a> UnitBrowser<'a> {
    pub fn new(catalog: &'a UnitCatalog, layout: ColumnLayout) -> Self {
        Self { catalog, layout }
    }

    /// Category names in menu order
    pub fn categories(&self) -> Vec<&'static str> {
        CATALOG_CATEGORIES.iter().map(|c| c.name).collect()
    }

    /// Canonical symbols of every unit compatible with the category's
    /// base unit, sorted
    pub fn units_for_category(&self, category: &str) -> Result<Vec<String>, KinemaError> {
        let entry = catalog_category(category).ok_or_else(|| {
            KinemaError::unknown_category(category)
                .with_suggestion(format!("Available: {}", self.categories().join(", ")))
        })?;
        let units = self.catalog.compatible_units(entry.base_unit)?;
        Ok(units.into_iter().collect())
    }

    /// Print the listing for one category
    pub fn show(&self, console: &mut Console<'_>, category: &str) -> Result<(), KinemaError> {
        let units = self.units_for_category(category)?;
        tracing::debug!(category, count = units.len(), "listing units");
        console.say("\nAvailable Units:\n")?;
        for line in self.layout.format(&units) {
            console.say(line)?;
        }
        Ok(())
    }

    /// Category selection menu
    pub fn menu(&self) -> Menu<'_> {
        self.categories().into_iter().fold(
            Menu::new("Select a unit category to view available units:"),
            move |menu, category| {
                menu.entry(category, move |console: &mut Console<'_>| self.show(console, category))
            },
        )
    }
}
