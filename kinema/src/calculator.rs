//! Formula calculator
//!
//! Prompts for each input of a formula (unit, then magnitude), converts it
//! to the category's base unit through the conversion table and prints the
//! result line.

use crate::console::Console;
use crate::menu::Menu;
use kinema_core::{parse_number, KinemaError};
use kinema_formulas::{FormulaInput, FormulaRegistry, InputMeta};
use kinema_units::{ConversionTable, Quantity};

pub struct Calculator<'a> {
    formulas: &'a FormulaRegistry,
    table: &'a ConversionTable,
}

impl<'a> Calculator<'a> {
    pub fn new(formulas: &'a FormulaRegistry, table: &'a ConversionTable) -> Self {
        Self { formulas, table }
    }

    /// Formula names in menu order
    pub fn available_formulas(&self) -> Vec<&'static str> {
        self.formulas.names()
    }

    /// Read one input: unit symbol (falling back to the base unit when
    /// unrecognised), then magnitude. Returns the value in base units.
    pub fn read_input(&self, console: &mut Console<'_>, input: &InputMeta) -> Result<FormulaInput, KinemaError> {
        let category = self.table.get(input.category)?;

        console.say(input.prompt)?;
        console.say(format!(
            "Available units for {}: {}",
            category.name,
            category.symbols().join(", ")
        ))?;

        let typed = console.require("Enter unit: ")?;
        let unit = category.resolve(&typed);
        if unit.fell_back {
            tracing::warn!(category = category.name, unit = %typed, fallback = unit.symbol, "unknown unit");
            console.say("Invalid unit. Using SI unit by default.")?;
        }

        let raw = console.require(&format!("Enter value in {}: ", unit.symbol))?;
        let value = parse_number(&raw)?;
        Ok(FormulaInput::new(value * unit.factor, unit.symbol))
    }

    /// Read every input of the named formula and evaluate it
    pub fn compute(&self, console: &mut Console<'_>, name: &str) -> Result<(&'static str, Quantity), KinemaError> {
        let formula = self.formulas.get(name).ok_or_else(|| self.formulas.unknown(name))?;
        let meta = formula.meta();

        let inputs = meta.inputs.iter()
            .map(|input| self.read_input(console, input))
            .collect::<Result<Vec<_>, _>>()?;

        let result = self.formulas.evaluate(meta.name, &inputs)?;
        Ok((meta.title, result))
    }

    /// Run the named formula interactively and print `{Title} = {result}`
    pub fn run_formula(&self, console: &mut Console<'_>, name: &str) -> Result<(), KinemaError> {
        let (title, result) = self.compute(console, name)?;
        console.say(format!("{} = {}", title, result))
    }

    /// Formula selection menu
    pub fn menu(&self) -> Menu<'_> {
        self.available_formulas().into_iter().fold(
            Menu::new("Physics Formulas:")
                .with_prompt("\nEnter the number of the formula you want to use: ")
                .with_invalid_message("Invalid selection. Please try again."),
            move |menu, name| {
                menu.entry(name, move |console: &mut Console<'_>| self.run_formula(console, name))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_core::codes;
    use std::io::Cursor;

    fn run(name: &str, script: &str) -> (Result<(), KinemaError>, String) {
        let formulas = kinema_formulas::standard_registry();
        let table = ConversionTable::standard();
        let calculator = Calculator::new(&formulas, &table);
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(script.to_string()), &mut out);
            calculator.run_formula(&mut console, name)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_available_formulas() {
        let formulas = kinema_formulas::standard_registry();
        let table = ConversionTable::standard();
        let calculator = Calculator::new(&formulas, &table);
        assert_eq!(
            calculator.available_formulas(),
            vec!["momentum", "force", "kinetic_energy", "work_done", "power"]
        );
    }

    #[test]
    fn test_momentum_in_base_units() {
        let (result, output) = run("momentum", "kg\n2\nm/s\n3\n");
        assert!(result.is_ok());
        assert!(output.starts_with("Enter mass\nAvailable units for mass: kg, g, lb\nEnter unit: Enter value in kg: "));
        assert!(output.contains("Available units for velocity: m/s, km/h, mph\n"));
        assert!(output.ends_with("Momentum = 6 kg*m/s\n"), "{}", output);
    }

    #[test]
    fn test_unknown_unit_falls_back() {
        let (result, output) = run("momentum", "xyz\n2\nm/s\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("Invalid unit. Using SI unit by default.\nEnter value in kg: "));
        assert!(output.ends_with("Momentum = 6 kg*m/s\n"));
    }

    #[test]
    fn test_force_converts_grams() {
        let (result, output) = run("force", "g\n2000\nm/s\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("Enter acceleration\n"));
        assert!(output.ends_with("Force = 6 N\n"), "{}", output);
    }

    #[test]
    fn test_kinetic_energy() {
        let (_, output) = run("kinetic_energy", "kg\n2\nm/s\n3\n");
        assert!(output.ends_with("Kinetic Energy = 9 J\n"));
    }

    #[test]
    fn test_work_done_in_kilometres() {
        let (_, output) = run("work_done", "N\n2\nkm\n3\n");
        assert!(output.ends_with("Work Done = 6000 J\n"));
    }

    #[test]
    fn test_power_in_minutes() {
        let (_, output) = run("power", "J\n120\nmin\n1\n");
        assert!(output.ends_with("Power = 2 W\n"));
    }

    #[test]
    fn test_power_zero_time_is_recoverable() {
        let (result, output) = run("power", "J\n10\ns\n0\n");
        let err = result.unwrap_err();
        assert_eq!(err.code, codes::DIV_ZERO);
        assert!(err.is_recoverable());
        assert!(!output.contains("Power ="));
    }

    #[test]
    fn test_non_numeric_value() {
        let (result, _) = run("momentum", "kg\nabc\n");
        let err = result.unwrap_err();
        assert_eq!(err.code, codes::INVALID_NUMBER);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_value_whitespace_ignored() {
        let (_, output) = run("force", "kg\n  2 \nm/s\n3\n");
        assert!(output.ends_with("Force = 6 N\n"));
    }

    #[test]
    fn test_end_of_input_mid_formula() {
        let (result, _) = run("momentum", "kg\n");
        assert!(result.unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_unknown_formula() {
        let (result, _) = run("torque", "");
        assert_eq!(result.unwrap_err().code, codes::UNKNOWN_FORMULA);
    }

    #[test]
    fn test_menu_session() {
        let formulas = kinema_formulas::standard_registry();
        let table = ConversionTable::standard();
        let calculator = Calculator::new(&formulas, &table);
        let mut out = Vec::new();
        {
            let script = "7\n1\nkg\n2\nm/s\n3\n5\nJ\n1\ns\n0\n0\n";
            let mut console = Console::new(Cursor::new(script), &mut out);
            calculator.menu().run(&mut console).unwrap();
        }
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\nPhysics Formulas:\n1. momentum\n2. force\n3. kinetic_energy\n4. work_done\n5. power\n0. Return to main menu.\n"));
        assert!(output.contains("Invalid selection. Please try again."));
        assert!(output.contains("Momentum = 6 kg*m/s\n"));
        assert!(output.contains("Error: Division by zero"), "{}", output);
    }
}
