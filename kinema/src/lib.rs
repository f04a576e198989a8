//! Kinema
//!
//! Console physics toolkit. Three tools behind one menu:
//! - unit browser: units compatible with a quantity category
//! - calculator: mechanics formulas over typed quantities
//! - viewer: symbolic formulas drawn on the terminal

pub mod app;
pub mod browser;
pub mod calculator;
pub mod config;
pub mod console;
pub mod latex;
pub mod menu;
pub mod viewer;

pub use app::App;
pub use browser::{ColumnLayout, UnitBrowser};
pub use calculator::Calculator;
pub use config::Settings;
pub use console::Console;
pub use latex::LatexError;
pub use menu::{Choice, Menu, MenuState};
pub use viewer::{FormulaRenderer, FormulaViewer, TerminalRenderer};
