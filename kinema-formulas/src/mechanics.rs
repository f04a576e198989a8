//! Classical mechanics formulas
//!
//! Inputs arrive in base units (kg, m/s, N, m, s, J). Result labels are
//! fixed SI units except momentum, which echoes the units the user typed.

use kinema_core::{KinemaError, checked_div};
use kinema_units::Quantity;
use crate::traits::{Formula, FormulaMeta, FormulaInput, InputMeta, expect_inputs};

// ============ momentum ============

pub struct Momentum;

static MOMENTUM_INPUTS: [InputMeta; 2] = [
    InputMeta::new("mass", "Enter mass", "mass"),
    InputMeta::new("velocity", "Enter velocity", "velocity"),
];

impl Formula for Momentum {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "momentum",
            title: "Momentum",
            inputs: &MOMENTUM_INPUTS,
        }
    }

    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        expect_inputs(&self.meta(), inputs)?;
        let (mass, velocity) = (&inputs[0], &inputs[1]);
        // Label is not normalised to SI: 2 g at 3 km/h reads "g*km/h"
        // even though the value is in kg·m/s.
        let unit = format!("{}*{}", mass.unit, velocity.unit);
        Ok(Quantity::new(mass.value * velocity.value, unit))
    }
}

// ============ force ============

pub struct Force;

// Acceleration is read through the velocity table.
static FORCE_INPUTS: [InputMeta; 2] = [
    InputMeta::new("mass", "Enter mass", "mass"),
    InputMeta::new("acceleration", "Enter acceleration", "velocity"),
];

impl Formula for Force {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "force",
            title: "Force",
            inputs: &FORCE_INPUTS,
        }
    }

    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        expect_inputs(&self.meta(), inputs)?;
        Ok(Quantity::new(inputs[0].value * inputs[1].value, "N"))
    }
}

// ============ kinetic_energy ============

pub struct KineticEnergy;

static KINETIC_ENERGY_INPUTS: [InputMeta; 2] = [
    InputMeta::new("mass", "Enter mass", "mass"),
    InputMeta::new("velocity", "Enter velocity", "velocity"),
];

impl Formula for KineticEnergy {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "kinetic_energy",
            title: "Kinetic Energy",
            inputs: &KINETIC_ENERGY_INPUTS,
        }
    }

    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        expect_inputs(&self.meta(), inputs)?;
        let (m, v) = (inputs[0].value, inputs[1].value);
        Ok(Quantity::new(0.5 * m * v.powi(2), "J"))
    }
}

// ============ work_done ============

pub struct WorkDone;

static WORK_DONE_INPUTS: [InputMeta; 2] = [
    InputMeta::new("force", "Enter force", "force"),
    InputMeta::new("distance", "Enter distance", "distance"),
];

impl Formula for WorkDone {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "work_done",
            title: "Work Done",
            inputs: &WORK_DONE_INPUTS,
        }
    }

    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        expect_inputs(&self.meta(), inputs)?;
        Ok(Quantity::new(inputs[0].value * inputs[1].value, "J"))
    }
}

// ============ power ============

pub struct Power;

static POWER_INPUTS: [InputMeta; 2] = [
    InputMeta::new("work", "Enter work", "energy"),
    InputMeta::new("time", "Enter time", "time"),
];

impl Formula for Power {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "power",
            title: "Power",
            inputs: &POWER_INPUTS,
        }
    }

    fn evaluate(&self, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        expect_inputs(&self.meta(), inputs)?;
        let watts = checked_div(inputs[0].value, inputs[1].value)?;
        Ok(Quantity::new(watts, "W"))
    }
}
