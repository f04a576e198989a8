//! Numeric input handling
//!
//! Magnitudes are plain `f64`. This module owns the parsing rules for text
//! typed at a prompt and the checked operations the formulas rely on.

use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: result is not finite")]
    Overflow,
}

/// Parse a magnitude typed by the user.
///
/// Surrounding whitespace is ignored. Accepts everything `f64::from_str`
/// accepts, including scientific notation (`1.5e3`), `inf` and `nan`.
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(NumberError::ParseError(s.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| NumberError::ParseError(trimmed.to_string()))
}

/// Division that refuses a zero divisor
pub fn checked_div(numerator: f64, denominator: f64) -> Result<f64, NumberError> {
    if denominator == 0.0 {
        return Err(NumberError::DivisionByZero);
    }
    let result = numerator / denominator;
    if result.is_infinite() && numerator.is_finite() {
        return Err(NumberError::Overflow);
    }
    Ok(result)
}
