//! Settings
//!
//! Defaults, optionally overridden by a JSON file named in `KINEMA_CONFIG`,
//! then by individual environment variables.

use crate::browser::ColumnLayout;
use kinema_core::KinemaError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_VAR: &str = "KINEMA_CONFIG";
pub const COLUMNS_VAR: &str = "KINEMA_COLUMNS";
pub const COLUMN_WIDTH_VAR: &str = "KINEMA_COLUMN_WIDTH";
pub const LOG_VAR: &str = "KINEMA_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Columns in the unit listing
    pub columns: usize,
    /// Width each unit is padded to
    pub column_width: usize,
    /// Log filter directive, e.g. `warn` or `kinema=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: 3,
            column_width: 20,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self, KinemaError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load using `var` to look up environment variables
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, KinemaError> {
        let mut settings = match var(CONFIG_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(value) = var(COLUMNS_VAR) {
            settings.columns = parse_count(COLUMNS_VAR, &value)?;
        }
        if let Some(value) = var(COLUMN_WIDTH_VAR) {
            settings.column_width = parse_count(COLUMN_WIDTH_VAR, &value)?;
        }
        if let Some(value) = var(LOG_VAR) {
            settings.log_filter = value;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, KinemaError> {
        let text = fs::read_to_string(path)
            .map_err(|e| KinemaError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, KinemaError> {
        serde_json::from_str(text)
            .map_err(|e| KinemaError::config(format!("invalid settings file: {}", e)))
    }

    pub fn validate(&self) -> Result<(), KinemaError> {
        if self.columns < 1 {
            return Err(KinemaError::config("columns must be at least 1")
                .with_suggestion(format!("Set {} to a positive number", COLUMNS_VAR)));
        }
        if self.column_width < 1 {
            return Err(KinemaError::config("column_width must be at least 1")
                .with_suggestion(format!("Set {} to a positive number", COLUMN_WIDTH_VAR)));
        }
        Ok(())
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::new(self.columns, self.column_width)
    }
}

fn parse_count(var: &str, value: &str) -> Result<usize, KinemaError> {
    value.trim().parse::<usize>()
        .map_err(|_| KinemaError::config(format!("{} must be a whole number, got '{}'", var, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_core::{codes, Severity};
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(vars(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.layout(), ColumnLayout::new(3, 20));
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_vars(vars(&[
            (COLUMNS_VAR, "4"),
            (COLUMN_WIDTH_VAR, " 12 "),
            (LOG_VAR, "kinema=debug"),
        ])).unwrap();
        assert_eq!(settings.columns, 4);
        assert_eq!(settings.column_width, 12);
        assert_eq!(settings.log_filter, "kinema=debug");
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = Settings::from_vars(vars(&[(COLUMNS_VAR, "0")])).unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
        assert_eq!(err.severity, Severity::Fatal);
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = Settings::from_vars(vars(&[(COLUMN_WIDTH_VAR, "0")])).unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = Settings::from_vars(vars(&[(COLUMNS_VAR, "three")])).unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
        assert!(err.message.contains("three"));
    }

    #[test]
    fn test_json_partial() {
        let settings = Settings::from_json(r#"{"columns": 2}"#).unwrap();
        assert_eq!(settings.columns, 2);
        assert_eq!(settings.column_width, 20);
    }

    #[test]
    fn test_json_rejects_unknown_keys() {
        let err = Settings::from_json(r#"{"colums": 2}"#).unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_vars(vars(&[(CONFIG_VAR, "/nonexistent/kinema.json")])).unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
    }

    #[test]
    fn test_file_then_env() {
        let path = std::env::temp_dir().join(format!("kinema-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{"columns": 5, "column_width": 8}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();
        let settings = Settings::from_vars(vars(&[
            (CONFIG_VAR, path_str.as_str()),
            (COLUMNS_VAR, "2"),
        ])).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.columns, 2);
        assert_eq!(settings.column_width, 8);
    }
}
