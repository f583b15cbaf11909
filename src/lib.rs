//! Krishi Advisor
//!
//! Rule-based crop advisory engine: ranks crops by how well they suit the
//! field's current soil pH and moisture, and predicts yield with field advice.
//!
//! - `catalog`: Static crop reference data (localized names, pH band, moisture tier)
//! - `suitability/`: Per-crop suitability scores and stable ranking
//! - `yield_prediction/`: Base yield × condition factors, confidence, advice
//! - `engine`: `AdvisoryEngine`, the entry point for embedding callers
//! - `api_server`: Axum REST layer (feature `api`)

pub mod catalog;
pub mod conditions;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod locale;
pub mod suitability;
pub mod yield_prediction;

// REST API (requires `api` feature)
pub mod api_server;

// Re-export commonly used types
pub use catalog::{CropCatalog, CropProfile, MoistureTier};
pub use conditions::{FieldConditions, SoilConditions};
pub use confidence::{ConfidenceSource, FixedSequence, SeededSource, ThreadRngSource};
pub use config::ServerConfig;
pub use engine::AdvisoryEngine;
pub use error::{CatalogError, InvalidInputError};
pub use locale::{Language, LocalizedNames};
pub use suitability::{score_crops, RankedList, SuitabilityResult};
pub use yield_prediction::{predict_yield, Recommendation, YieldFactors, YieldPrediction};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
