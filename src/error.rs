//! Error types
//!
//! The scoring and prediction functions are total over finite input and never
//! return these. They surface only at the edges: loading a catalog, and
//! validating readings before they reach the engine.

use thiserror::Error;

/// Problems found while building or loading a crop catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("crop '{name}' has an inverted pH band ({ph_min} > {ph_max})")]
    InvertedPhBand { name: String, ph_min: f64, ph_max: f64 },

    #[error("crop '{name}' has a non-finite value in field '{field}'")]
    NonFinite { name: String, field: &'static str },

    #[error("crop '{name}' has a negative base yield ({base_yield})")]
    NegativeBaseYield { name: String, base_yield: f64 },

    #[error("crop '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A reading rejected at the embedding boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} is outside the physical range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = InvalidInputError::OutOfRange {
            field: "ph",
            value: 15.0,
            min: 0.0,
            max: 14.0,
        };
        assert_eq!(err.to_string(), "ph = 15 is outside the physical range 0-14");
    }
}
