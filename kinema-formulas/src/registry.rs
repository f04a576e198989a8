//! Formula Registry

use crate::{Formula, FormulaInput, FormulaMeta};
use kinema_core::KinemaError;
use kinema_units::Quantity;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered registry of calculator formulas.
///
/// Registration order is menu order. Names are matched case-insensitively.
pub struct FormulaRegistry {
    formulas: Vec<Arc<dyn Formula>>,
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self { formulas: Vec::new() }
    }

    /// Register a formula; a later formula with the same name replaces the
    /// earlier one in place.
    pub fn with_formula<F: Formula + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        let formula: Arc<dyn Formula> = Arc::new(f);
        match self.position(&name) {
            Some(i) => self.formulas[i] = formula,
            None => self.formulas.push(formula),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formula> {
        self.position(&name.to_lowercase()).map(|i| self.formulas[i].as_ref())
    }

    /// Formula names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.formulas.iter().map(|f| f.meta().name).collect()
    }

    pub fn metas(&self) -> Vec<FormulaMeta> {
        self.formulas.iter().map(|f| f.meta()).collect()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn evaluate(&self, name: &str, inputs: &[FormulaInput]) -> Result<Quantity, KinemaError> {
        match self.get(name) {
            Some(f) => {
                let result = f.evaluate(inputs)?;
                tracing::debug!(formula = name, result = %result, "formula evaluated");
                Ok(result)
            }
            None => Err(self.unknown(name)),
        }
    }

    /// Build an UNKNOWN_FORMULA error with suggestions for close names
    pub fn unknown(&self, name: &str) -> KinemaError {
        let similar = self.find_similar(name);
        let err = KinemaError::unknown_formula(name);
        if similar.is_empty() {
            return err.with_suggestion(format!("Available: {}", self.names().join(", ")));
        }
        let suggestions: Vec<&str> = similar.into_iter().take(3).collect();
        err.with_suggestion(format!("Similar: {}", suggestions.join(", ")))
    }

    fn position(&self, name_lower: &str) -> Option<usize> {
        self.formulas.iter().position(|f| f.meta().name.eq_ignore_ascii_case(name_lower))
    }

    /// Formula names similar to the given name, best match first
    fn find_similar(&self, name: &str) -> Vec<&'static str> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(&'static str, usize)> = self.names().into_iter()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                if score > 0 { Some((candidate, score)) } else { None }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = if candidate.starts_with(query) {
            100
        } else if candidate.contains(query) {
            50
        } else if query.contains(candidate) {
            30
        } else {
            0
        };

        // Shared characters only count once something already matched or
        // the overlap is substantial.
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        if score > 0 || common * 2 >= candidate_chars.len() {
            score += common * 2;
        }

        score
    }
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics;
    use kinema_core::codes;

    fn registry() -> FormulaRegistry {
        crate::standard_registry()
    }

    #[test]
    fn test_names_in_registration_order() {
        assert_eq!(
            registry().names(),
            vec!["momentum", "force", "kinetic_energy", "work_done", "power"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let reg = registry();
        assert!(reg.get("Momentum").is_some());
        assert!(reg.get("POWER").is_some());
        assert!(reg.get("torque").is_none());
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let reg = FormulaRegistry::new()
            .with_formula(mechanics::Momentum)
            .with_formula(mechanics::Power)
            .with_formula(mechanics::Momentum);
        assert_eq!(reg.names(), vec!["momentum", "power"]);
    }

    #[test]
    fn test_evaluate_by_name() {
        let inputs = [FormulaInput::new(10.0, "J"), FormulaInput::new(2.0, "s")];
        let result = registry().evaluate("power", &inputs).unwrap();
        assert_eq!(result, Quantity::new(5.0, "W"));
    }

    #[test]
    fn test_unknown_formula_suggests_similar() {
        let err = registry().evaluate("kinetic", &[]).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_FORMULA);
        let suggestion = err.suggestion.unwrap();
        assert!(suggestion.starts_with("Similar: kinetic_energy"), "{}", suggestion);
    }

    #[test]
    fn test_unknown_formula_lists_available() {
        let err = registry().evaluate("zzz", &[]).unwrap_err();
        assert_eq!(
            err.suggestion.as_deref(),
            Some("Available: momentum, force, kinetic_energy, work_done, power")
        );
    }
}
