//! Formula traits

use kinema_core::KinemaError;
use kinema_units::Quantity;

/// Metadata about one formula input
#[derive(Debug, Clone)]
pub struct InputMeta {
    pub name: &'static str,
    /// Line shown before the unit choices (e.g. "Enter mass")
    pub prompt: &'static str,
    /// Calculator table category the input is read through
    pub category: &'static str,
}

impl InputMeta {
    pub const fn new(name: &'static str, prompt: &'static str, category: &'static str) -> Self {
        Self { name, prompt, category }
    }
}

/// Metadata for a formula
#[derive(Debug, Clone)]
pub struct FormulaMeta {
    pub name: &'static str,
    /// Heading used when printing the result (e.g. "Kinetic Energy")
    pub title: &'static str,
    pub inputs: &'static [InputMeta],
}

/// One formula input, already converted to the category's base unit
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaInput {
    pub value: f64,
    /// Symbol the value was entered in, before conversion
    pub unit: String,
}

impl FormulaInput {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }
}

/// Pure formula evaluated over base-unit inputs
pub trait Formula: Send + Sync {
    fn meta(&self) -> FormulaMeta;
    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError>;
}

/// Check the input count against the formula's declared inputs
pub(crate) fn expect_inputs(meta: &FormulaMeta, inputs: &[FormulaInput]) -> Result<(), KinemaError> {
    if inputs.len() != meta.inputs.len() {
        return Err(KinemaError::arg_count(meta.name, meta.inputs.len(), inputs.len()));
    }
    Ok(())
}
