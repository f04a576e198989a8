//! Structured errors
//!
//! Every failure the console can recover from is a value carrying a
//! machine-readable code, a message for the user and an optional hint.
//! The severity decides whether a menu loop reports the error and keeps
//! going or hands it up to the process.

use crate::NumberError;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const INVALID_SELECTION: &str = "INVALID_SELECTION";
    pub const UNKNOWN_FORMULA: &str = "UNKNOWN_FORMULA";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const LATEX_ERROR: &str = "LATEX_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const END_OF_INPUT: &str = "END_OF_INPUT";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation continued with a degraded result
    Warning,
    /// Operation aborted, the enclosing menu keeps running
    Error,
    /// The program cannot continue
    Fatal,
}

/// Structured error shared by every Kinema crate
#[derive(Debug, Clone, PartialEq)]
pub struct KinemaError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl KinemaError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Whether a menu loop may report this error and continue
    pub fn is_recoverable(&self) -> bool {
        self.severity != Severity::Fatal
    }

    pub fn is_end_of_input(&self) -> bool {
        self.code == codes::END_OF_INPUT
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_number(input: &str) -> Self {
        Self::new(codes::INVALID_NUMBER, format!("Invalid number: '{}'", input))
            .with_suggestion("Enter a plain number such as 2, 0.5 or 1e3")
    }

    pub fn invalid_selection(input: &str, max: usize) -> Self {
        Self::new(codes::INVALID_SELECTION, format!("Invalid selection: '{}'", input))
            .with_suggestion(format!("Enter a number between 0 and {}", max))
    }

    pub fn unknown_formula(name: &str) -> Self {
        Self::new(codes::UNKNOWN_FORMULA, format!("Unknown formula: {}", name))
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown quantity category: {}", name))
    }

    pub fn unknown_unit(symbol: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", symbol))
    }

    pub fn arg_count(formula: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} inputs, got {}", formula, expected, got))
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure divisor is not zero")
    }

    pub fn latex(details: impl Into<String>) -> Self {
        Self::new(codes::LATEX_ERROR, format!("Cannot render formula: {}", details.into()))
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn io(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn end_of_input() -> Self {
        Self::new(codes::END_OF_INPUT, "Input closed")
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for KinemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for KinemaError {}

impl From<NumberError> for KinemaError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::invalid_number(&s),
            NumberError::DivisionByZero => Self::div_zero(),
            NumberError::Overflow => Self::new(codes::OVERFLOW, "Numeric overflow"),
        }
    }
}

impl From<std::io::Error> for KinemaError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}
