//! Ranking
//!
//! Scores the whole catalog and orders it best-first. `sort_by` is stable, so
//! crops with equal scores stay in catalog definition order on every call.

use crate::catalog::{CropCatalog, CropProfile};
use crate::conditions::SoilConditions;
use super::scoring::{suitability_score, CropScore};

/// Number of crops surfaced as headline recommendations
pub const TOP_N: usize = 3;

/// One crop with its score for the current conditions
#[derive(Debug, Clone)]
pub struct SuitabilityResult<'a> {
    pub crop: &'a CropProfile,
    pub score: CropScore,
}

impl SuitabilityResult<'_> {
    pub fn crop_name(&self) -> &str {
        &self.crop.name
    }

    pub fn suitability_score(&self) -> f64 {
        self.score.suitability_score
    }
}

/// Full ranking for one set of soil conditions
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    pub current_conditions: SoilConditions,
    pub top_3: Vec<SuitabilityResult<'a>>,
    pub all: Vec<SuitabilityResult<'a>>,
}

impl<'a> RankedList<'a> {
    /// First `n` entries of the ranking (fewer if the catalog is smaller)
    pub fn top(&self, n: usize) -> &[SuitabilityResult<'a>] {
        &self.all[..n.min(self.all.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Score and rank every crop in `catalog`
pub fn score_crops(catalog: &CropCatalog, ph: f64, moisture: f64) -> RankedList<'_> {
    let mut all: Vec<SuitabilityResult> = catalog
        .crops()
        .iter()
        .map(|crop| SuitabilityResult {
            crop,
            score: suitability_score(crop, ph, moisture),
        })
        .collect();

    all.sort_by(|a, b| b.suitability_score().total_cmp(&a.suitability_score()));

    let top_3 = all.iter().take(TOP_N).cloned().collect();

    tracing::debug!(
        "Ranked {} crops for pH {} / moisture {}",
        all.len(),
        ph,
        moisture
    );

    RankedList {
        current_conditions: SoilConditions { ph, moisture },
        top_3,
        all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(results: &'a [SuitabilityResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.crop_name()).collect()
    }

    #[test]
    fn test_healthy_field_ranking() {
        let catalog = CropCatalog::reference();
        let ranked = score_crops(&catalog, 6.5, 65.0);

        // Rice, Cotton, Chili, Turmeric all score 95.0; Groundnut 85.0
        let scores: Vec<f64> = ranked.all.iter().map(|r| r.suitability_score()).collect();
        assert_eq!(scores, [95.0, 95.0, 95.0, 95.0, 85.0]);
        assert_eq!(names(&ranked.all), ["Rice", "Cotton", "Chili", "Turmeric", "Groundnut"]);
        assert_eq!(names(&ranked.top_3), ["Rice", "Cotton", "Chili"]);
    }

    #[test]
    fn test_dry_field_ranking() {
        let catalog = CropCatalog::reference();
        let ranked = score_crops(&catalog, 6.5, 50.0);

        // Groundnut hits its ideal, Medium crops lose 20, High crops lose 40
        assert_eq!(names(&ranked.top_3), ["Groundnut", "Cotton", "Chili"]);
        assert_eq!(ranked.top_3[0].suitability_score(), 100.0);
        assert_eq!(ranked.top_3[1].suitability_score(), 90.0);
        assert_eq!(ranked.all[4].crop_name(), "Turmeric");
        assert_eq!(ranked.all[4].suitability_score(), 80.0);
    }

    #[test]
    fn test_acidic_field_ranking() {
        let catalog = CropCatalog::reference();
        let ranked = score_crops(&catalog, 5.7, 70.0);

        // Only Rice and Turmeric tolerate pH 5.7
        assert_eq!(names(ranked.top(2)), ["Rice", "Turmeric"]);
        assert_eq!(ranked.all[2].score.ph_score, 50.0);
    }

    #[test]
    fn test_conditions_echoed() {
        let catalog = CropCatalog::reference();
        let ranked = score_crops(&catalog, 7.2, 58.5);
        assert_eq!(ranked.current_conditions, SoilConditions { ph: 7.2, moisture: 58.5 });
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CropCatalog::new(Vec::new()).unwrap();
        let ranked = score_crops(&catalog, 6.5, 65.0);
        assert!(ranked.is_empty());
        assert!(ranked.top_3.is_empty());
        assert!(ranked.top(3).is_empty());
    }

    #[test]
    fn test_small_catalog_top_3() {
        let crops = CropCatalog::reference().crops()[..2].to_vec();
        let catalog = CropCatalog::new(crops).unwrap();
        let ranked = score_crops(&catalog, 6.5, 65.0);
        assert_eq!(ranked.top_3.len(), 2);
    }
}
