//! Kinema Core - Fundamental types
//!
//! This crate provides the types shared by every Kinema crate:
//! - `KinemaError`: Structured errors with severity
//! - `NumberError`: Low-level numeric failures
//! - `parse_number`: The prompt-input parsing rule for magnitudes

mod number;
mod error;

pub use number::{NumberError, parse_number, checked_div};
pub use error::{KinemaError, Severity, codes};
