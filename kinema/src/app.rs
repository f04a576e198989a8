//! Top-level menu wiring the three tools together

use crate::browser::UnitBrowser;
use crate::calculator::Calculator;
use crate::config::Settings;
use crate::console::Console;
use crate::menu::Menu;
use crate::viewer::{FormulaRenderer, FormulaViewer};
use kinema_core::KinemaError;
use kinema_formulas::{standard_display_catalog, standard_registry, DisplayCatalog, FormulaRegistry};
use kinema_units::{ConversionTable, UnitCatalog};

/// Everything the tools read, built once at startup
pub struct App {
    settings: Settings,
    catalog: UnitCatalog,
    table: ConversionTable,
    formulas: FormulaRegistry,
    displays: DisplayCatalog,
}

impl App {
    /// Build the standard catalogs. Fails only if the conversion table
    /// breaks its base-unit invariant.
    pub fn new(settings: Settings) -> Result<Self, KinemaError> {
        let table = ConversionTable::new(ConversionTable::standard().categories().to_vec())?;
        Ok(Self {
            settings,
            catalog: UnitCatalog::new(),
            table,
            formulas: standard_registry(),
            displays: standard_display_catalog(),
        })
    }

    /// Run the main menu until the user quits or input closes
    pub fn run(&self, console: &mut Console<'_>, renderer: &dyn FormulaRenderer) -> Result<(), KinemaError> {
        let browser = UnitBrowser::new(&self.catalog, self.settings.layout());
        let calculator = Calculator::new(&self.formulas, &self.table);
        let viewer = FormulaViewer::new(&self.displays, renderer);

        let mut main_menu = Menu::new("Main Menu")
            .with_prompt("Enter your choice (number): ")
            .with_exit_label("Quit")
            .with_exit_message("Exiting. Goodbye!")
            .entry("View physics formulas", |console: &mut Console<'_>| viewer.menu().run(console))
            .entry("Use physics formulas", |console: &mut Console<'_>| calculator.menu().run(console))
            .entry("View available units", |console: &mut Console<'_>| browser.menu().run(console));

        match main_menu.run(console) {
            Err(err) if err.is_end_of_input() => {
                tracing::info!("input closed mid-operation");
                Ok(())
            }
            other => other,
        }
    }
}
