//! Field Conditions
//!
//! Soil and weather readings handed to the engine. The engine accepts any
//! finite value; `validate` is for embedding callers that want to reject
//! physically impossible readings before scoring.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Soil pH of a typical healthy field
pub const DEFAULT_PH: f64 = 6.5;

/// Soil moisture (%) of a typical healthy field
pub const DEFAULT_MOISTURE: f64 = 65.0;

/// Air temperature (°C) of a typical healthy field
pub const DEFAULT_TEMPERATURE: f64 = 30.0;

pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
pub const MOISTURE_RANGE: (f64, f64) = (0.0, 100.0);

/// Soil pH + moisture, the inputs to suitability ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilConditions {
    pub ph: f64,
    pub moisture: f64,
}

impl Default for SoilConditions {
    fn default() -> Self {
        Self {
            ph: DEFAULT_PH,
            moisture: DEFAULT_MOISTURE,
        }
    }
}

/// Full set of readings used by yield prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConditions {
    pub moisture: f64,
    pub ph: f64,
    pub temperature: f64,
}

impl Default for FieldConditions {
    fn default() -> Self {
        Self {
            moisture: DEFAULT_MOISTURE,
            ph: DEFAULT_PH,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl FieldConditions {
    pub fn new(moisture: f64, ph: f64, temperature: f64) -> Self {
        Self { moisture, ph, temperature }
    }

    pub fn soil(&self) -> SoilConditions {
        SoilConditions {
            ph: self.ph,
            moisture: self.moisture,
        }
    }

    /// Reject non-finite readings, and with `strict` also readings outside
    /// pH 0-14 or moisture 0-100%.
    ///
    /// Temperature has no physical bound checked here.
    pub fn validate(&self, strict: bool) -> Result<(), InvalidInputError> {
        check_finite("moisture", self.moisture)?;
        check_finite("ph", self.ph)?;
        check_finite("temperature", self.temperature)?;

        if strict {
            check_range("ph", self.ph, PH_RANGE)?;
            check_range("moisture", self.moisture, MOISTURE_RANGE)?;
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite { field })
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), InvalidInputError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvalidInputError::OutOfRange { field, value, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_healthy_field() {
        let c = FieldConditions::default();
        assert_eq!(c.ph, 6.5);
        assert_eq!(c.moisture, 65.0);
        assert_eq!(c.temperature, 30.0);
        assert_eq!(c.soil(), SoilConditions::default());
    }

    #[test]
    fn test_lenient_accepts_out_of_range() {
        let c = FieldConditions::new(-10.0, 15.0, 30.0);
        assert!(c.validate(false).is_ok());
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let c = FieldConditions::new(65.0, 14.5, 30.0);
        assert_eq!(
            c.validate(true),
            Err(InvalidInputError::OutOfRange { field: "ph", value: 14.5, min: 0.0, max: 14.0 })
        );

        let c = FieldConditions::new(-1.0, 6.5, 30.0);
        assert!(matches!(
            c.validate(true),
            Err(InvalidInputError::OutOfRange { field: "moisture", .. })
        ));
    }

    #[test]
    fn test_non_finite_always_rejected() {
        let c = FieldConditions::new(f64::NAN, 6.5, 30.0);
        assert_eq!(c.validate(false), Err(InvalidInputError::NonFinite { field: "moisture" }));

        let c = FieldConditions::new(65.0, 6.5, f64::INFINITY);
        assert_eq!(c.validate(true), Err(InvalidInputError::NonFinite { field: "temperature" }));
    }
}
