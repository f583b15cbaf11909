//! Crop Suitability Engine
//!
//! Scores every crop in the catalog against the field's current soil pH and
//! moisture, then ranks them.
//!
//! ## Scoring model
//! - pH: binary. 100 inside the crop's band, 50 anywhere outside it.
//! - Moisture: linear penalty of 2 points per percentage point away from the
//!   crop's tier ideal, floored at 0.
//! - Suitability: mean of the two, rounded to one decimal.
//!
//! ## Architecture
//! - `scoring.rs` - Per-crop component scores
//! - `ranking.rs` - Stable descending ranking + top-N output

pub mod scoring;
pub mod ranking;

pub use scoring::{ph_score, moisture_score, suitability_score, CropScore};
pub use ranking::{score_crops, RankedList, SuitabilityResult, TOP_N};
