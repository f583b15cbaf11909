//! Condition Factors
//!
//! Each reading maps to 1.0 inside its favourable window and to a fixed
//! penalty multiplier outside it. Windows are inclusive at both ends.

use crate::conditions::FieldConditions;

pub const MOISTURE_WINDOW: (f64, f64) = (60.0, 75.0);
pub const MOISTURE_PENALTY: f64 = 0.85;

pub const PH_WINDOW: (f64, f64) = (6.0, 7.0);
pub const PH_PENALTY: f64 = 0.9;

pub const TEMPERATURE_WINDOW: (f64, f64) = (25.0, 32.0);
pub const TEMPERATURE_PENALTY: f64 = 0.88;

/// The three multipliers applied to a crop's base yield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldFactors {
    pub moisture: f64,
    pub ph: f64,
    pub temperature: f64,
}

impl YieldFactors {
    pub fn from_conditions(conditions: &FieldConditions) -> Self {
        Self {
            moisture: factor(conditions.moisture, MOISTURE_WINDOW, MOISTURE_PENALTY),
            ph: factor(conditions.ph, PH_WINDOW, PH_PENALTY),
            temperature: factor(conditions.temperature, TEMPERATURE_WINDOW, TEMPERATURE_PENALTY),
        }
    }

    /// Multiplied in the order moisture, pH, temperature
    pub fn apply(&self, base_yield: f64) -> f64 {
        base_yield * self.moisture * self.ph * self.temperature
    }

    pub fn all_favourable(&self) -> bool {
        self.moisture == 1.0 && self.ph == 1.0 && self.temperature == 1.0
    }
}

fn factor(value: f64, (low, high): (f64, f64), penalty: f64) -> f64 {
    if low <= value && value <= high {
        1.0
    } else {
        penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_inclusive() {
        let edges = FieldConditions::new(60.0, 7.0, 25.0);
        assert!(YieldFactors::from_conditions(&edges).all_favourable());

        let edges = FieldConditions::new(75.0, 6.0, 32.0);
        assert!(YieldFactors::from_conditions(&edges).all_favourable());
    }

    #[test]
    fn test_penalties() {
        let harsh = FieldConditions::new(80.0, 5.0, 40.0);
        let f = YieldFactors::from_conditions(&harsh);
        assert_eq!(f.moisture, 0.85);
        assert_eq!(f.ph, 0.9);
        assert_eq!(f.temperature, 0.88);
        assert!(!f.all_favourable());
    }

    #[test]
    fn test_factors_independent() {
        let f = YieldFactors::from_conditions(&FieldConditions::new(65.0, 7.3, 30.0));
        assert_eq!((f.moisture, f.ph, f.temperature), (1.0, 0.9, 1.0));
    }
}
