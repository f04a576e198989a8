//! Catalog units and lookup errors

use kinema_core::KinemaError;
use thiserror::Error;
use crate::Dimension;

/// A unit the browser can list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub symbol: &'static str,
    pub dimension: Dimension,
}

impl Unit {
    pub const fn new(symbol: &'static str, dimension: Dimension) -> Self {
        Unit { symbol, dimension }
    }

    /// Units are interchangeable when they measure the same dimension
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

impl From<CatalogError> for KinemaError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownUnit(symbol) => KinemaError::unknown_unit(&symbol),
        }
    }
}
