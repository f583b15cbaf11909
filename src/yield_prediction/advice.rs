//! Field Advice
//!
//! Threshold checks that turn readings into actions. The evaluation order is
//! fixed and callers render the list in the order returned.

use serde::{Serialize, Serializer};

use crate::conditions::FieldConditions;

pub const LOW_MOISTURE_THRESHOLD: f64 = 60.0;
pub const ACIDIC_PH_THRESHOLD: f64 = 6.0;
pub const ALKALINE_PH_THRESHOLD: f64 = 7.5;
pub const HEAT_THRESHOLD: f64 = 32.0;

/// One actionable recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    IncreaseIrrigation,
    AddLime,
    AddOrganicMatter,
    ShadeOrMulch,
    MaintainPractices,
}

impl Recommendation {
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::IncreaseIrrigation => "Increase irrigation frequency",
            Recommendation::AddLime => "Add lime to increase pH",
            Recommendation::AddOrganicMatter => "Add organic matter to reduce pH",
            Recommendation::ShadeOrMulch => "Consider shade netting or mulching",
            Recommendation::MaintainPractices => "Conditions are optimal, maintain current practices",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// Build the ordered advice list for a set of readings.
///
/// Acidic and alkaline advice are mutually exclusive (acidic wins). If no
/// check fires the list is exactly `[MaintainPractices]`.
pub fn generate_recommendations(conditions: &FieldConditions) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if conditions.moisture < LOW_MOISTURE_THRESHOLD {
        recommendations.push(Recommendation::IncreaseIrrigation);
    }

    if conditions.ph < ACIDIC_PH_THRESHOLD {
        recommendations.push(Recommendation::AddLime);
    } else if conditions.ph > ALKALINE_PH_THRESHOLD {
        recommendations.push(Recommendation::AddOrganicMatter);
    }

    if conditions.temperature > HEAT_THRESHOLD {
        recommendations.push(Recommendation::ShadeOrMulch);
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::MaintainPractices);
    }

    recommendations
}
