//! Advisory Engine
//!
//! Entry point for embedding callers. Holds the shared read-only catalog and
//! the confidence source; every call is synchronous, allocation-light and
//! safe to make from any thread.

use std::sync::Arc;

use crate::catalog::CropCatalog;
use crate::conditions::FieldConditions;
use crate::confidence::{ConfidenceSource, ThreadRngSource};
use crate::suitability::{score_crops, RankedList};
use crate::yield_prediction::{predict_yield, YieldPrediction};

#[derive(Clone)]
pub struct AdvisoryEngine {
    catalog: Arc<CropCatalog>,
    confidence: Arc<dyn ConfidenceSource>,
}

impl AdvisoryEngine {
    pub fn new(catalog: Arc<CropCatalog>, confidence: Arc<dyn ConfidenceSource>) -> Self {
        Self { catalog, confidence }
    }

    /// Reference catalog with an unseeded confidence source
    pub fn with_reference_catalog() -> Self {
        Self::new(Arc::new(CropCatalog::reference()), Arc::new(ThreadRngSource))
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Rank every catalog crop for the given soil readings
    pub fn list_recommendations(&self, ph: f64, moisture: f64) -> RankedList<'_> {
        score_crops(&self.catalog, ph, moisture)
    }

    /// Predict yield for `crop`; unknown crops use the default base yield
    pub fn predict(&self, crop: &str, moisture: f64, ph: f64, temperature: f64) -> YieldPrediction {
        let conditions = FieldConditions::new(moisture, ph, temperature);
        predict_yield(&self.catalog, crop, &conditions, self.confidence.as_ref())
    }
}

impl std::fmt::Debug for AdvisoryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryEngine")
            .field("crops", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
