//! Per-crop component scores

use crate::catalog::CropProfile;

pub const PH_IN_BAND_SCORE: f64 = 100.0;
pub const PH_OUT_OF_BAND_SCORE: f64 = 50.0;

/// Points lost per percentage point of moisture away from the ideal
pub const MOISTURE_PENALTY_PER_POINT: f64 = 2.0;

/// Component breakdown for one crop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropScore {
    pub ph_score: f64,
    pub moisture_score: f64,
    pub suitability_score: f64,
}

/// 100 if `ph` lies in the crop's inclusive band, otherwise 50.
///
/// Distance outside the band does not matter.
pub fn ph_score(crop: &CropProfile, ph: f64) -> f64 {
    if crop.ph_in_band(ph) {
        PH_IN_BAND_SCORE
    } else {
        PH_OUT_OF_BAND_SCORE
    }
}

/// `max(0, 100 - 2 * |moisture - ideal|)`
pub fn moisture_score(crop: &CropProfile, moisture: f64) -> f64 {
    let ideal = crop.moisture_tier.ideal_moisture();
    (100.0 - MOISTURE_PENALTY_PER_POINT * (moisture - ideal).abs()).max(0.0)
}

/// Mean of the pH and moisture scores, rounded to one decimal
pub fn suitability_score(crop: &CropProfile, ph: f64, moisture: f64) -> CropScore {
    let ph_score = ph_score(crop, ph);
    let moisture_score = moisture_score(crop, moisture);
    CropScore {
        ph_score,
        moisture_score,
        suitability_score: round_one_decimal((ph_score + moisture_score) / 2.0),
    }
}

/// Rounds the exact binary value, so only true ties go to even
/// (97.25 -> 97.2, but 70.45 -> 70.5 since 70.45 is stored slightly above).
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropCatalog;
    use approx::assert_relative_eq;

    fn crop(name: &str) -> CropProfile {
        CropCatalog::reference().get(name).unwrap().clone()
    }

    #[test]
    fn test_ph_band_is_inclusive() {
        let cotton = crop("Cotton");
        assert_eq!(ph_score(&cotton, 6.0), 100.0);
        assert_eq!(ph_score(&cotton, 7.5), 100.0);
        assert_eq!(ph_score(&cotton, 5.99), 50.0);
    }

    #[test]
    fn test_ph_score_is_binary() {
        let chili = crop("Chili");
        assert_eq!(ph_score(&chili, 7.1), ph_score(&chili, 13.0));
        assert_eq!(ph_score(&chili, 5.9), ph_score(&chili, 0.0));
    }

    #[test]
    fn test_moisture_linear_penalty() {
        let rice = crop("Rice"); // ideal 70
        assert_eq!(moisture_score(&rice, 70.0), 100.0);
        assert_eq!(moisture_score(&rice, 65.0), 90.0);
        assert_eq!(moisture_score(&rice, 80.0), 80.0);
    }

    #[test]
    fn test_moisture_floor() {
        let rice = crop("Rice");
        assert_eq!(moisture_score(&rice, 20.0), 0.0);
        assert_eq!(moisture_score(&rice, 10.0), 0.0);
        assert_eq!(moisture_score(&rice, -500.0), 0.0);
        assert_eq!(moisture_score(&rice, f64::MAX), 0.0);
    }

    #[test]
    fn test_suitability_mean() {
        let groundnut = crop("Groundnut"); // ideal 50, band 6.0-7.0
        let score = suitability_score(&groundnut, 6.5, 65.0);
        assert_eq!(score.ph_score, 100.0);
        assert_eq!(score.moisture_score, 70.0);
        assert_eq!(score.suitability_score, 85.0);

        let score = suitability_score(&groundnut, 8.0, 52.3);
        assert_relative_eq!(score.moisture_score, 95.4, epsilon = 1e-9);
        assert_relative_eq!(score.suitability_score, 72.7, epsilon = 1e-9);
    }

    #[test]
    fn test_round_ties_even() {
        assert_eq!(round_one_decimal(97.25), 97.2);
        assert_eq!(round_one_decimal(97.75), 97.8);
        assert_eq!(round_one_decimal(95.0), 95.0);
    }

    #[test]
    fn test_round_inexact_near_ties() {
        // Stored values sit just above / below the apparent tie
        assert_eq!(round_one_decimal(70.45), 70.5);
        assert_eq!(round_one_decimal(70.35), 70.3);
    }

    #[test]
    fn test_suitability_rounds_stored_value() {
        // Rice at moisture 40.45: (100 + 40.9) / 2 = 70.45
        let score = suitability_score(&crop("Rice"), 6.5, 40.45);
        assert_eq!(score.suitability_score, 70.5);
    }
}
