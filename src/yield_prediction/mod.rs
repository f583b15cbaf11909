//! Yield Prediction
//!
//! Scales a crop's base yield by three condition factors and attaches a
//! simulated confidence figure plus field advice.
//!
//! - `factors.rs` - moisture / pH / temperature multipliers
//! - `advice.rs` - ordered threshold-based recommendations

pub mod factors;
pub mod advice;

pub use factors::YieldFactors;
pub use advice::{generate_recommendations, Recommendation};

use crate::catalog::CropCatalog;
use crate::conditions::FieldConditions;
use crate::confidence::ConfidenceSource;
use crate::suitability::scoring::round_one_decimal;

/// Base yield (tons/acre) for crops missing from the catalog
pub const DEFAULT_BASE_YIELD: f64 = 2.0;

pub const CONFIDENCE_RANGE: (f64, f64) = (75.0, 92.0);

pub const YIELD_UNIT: &str = "tons/acre";

#[derive(Debug, Clone)]
pub struct YieldPrediction {
    /// Crop name as requested
    pub crop: String,

    pub conditions: FieldConditions,

    /// False when the crop was not in the catalog and the default base was used
    pub known_crop: bool,

    pub base_yield: f64,

    pub factors: YieldFactors,

    /// Unrounded prediction in tons/acre
    pub predicted_yield_tons: f64,

    /// Simulated, 75-92, one decimal
    pub confidence: f64,

    pub recommendations: Vec<Recommendation>,
}

impl YieldPrediction {
    /// E.g. "3.00 tons/acre"
    pub fn predicted_yield_text(&self) -> String {
        format!("{:.2} {}", self.predicted_yield_tons, YIELD_UNIT)
    }

    pub fn recommendation_texts(&self) -> Vec<&'static str> {
        self.recommendations.iter().map(|r| r.text()).collect()
    }
}

/// Predict the yield of `crop` under `conditions`.
///
/// Unknown crops fall back to `DEFAULT_BASE_YIELD` rather than failing.
pub fn predict_yield(
    catalog: &CropCatalog,
    crop: &str,
    conditions: &FieldConditions,
    confidence: &dyn ConfidenceSource,
) -> YieldPrediction {
    let (base_yield, known_crop) = match catalog.get(crop) {
        Some(profile) => (profile.base_yield, true),
        None => {
            tracing::debug!("Unknown crop '{}', using default base yield {}", crop, DEFAULT_BASE_YIELD);
            (DEFAULT_BASE_YIELD, false)
        }
    };

    let factors = YieldFactors::from_conditions(conditions);
    let predicted_yield_tons = factors.apply(base_yield);

    let (low, high) = CONFIDENCE_RANGE;
    let confidence = round_one_decimal(confidence.sample_uniform(low, high).clamp(low, high));

    YieldPrediction {
        crop: crop.to_string(),
        conditions: *conditions,
        known_crop,
        base_yield,
        factors,
        predicted_yield_tons,
        confidence,
        recommendations: generate_recommendations(conditions),
    }
}
