//! Crop Catalog
//!
//! Static reference data for the crops the advisor can recommend. A catalog is
//! built once at startup, validated, and then shared read-only (usually behind
//! an `Arc`) by every request.
//!
//! Definition order matters: ranking iterates the catalog in this order and
//! uses a stable sort, so crops with equal scores keep it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::locale::{Language, LocalizedNames};

/// Qualitative moisture requirement of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoistureTier {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    High,
}

impl MoistureTier {
    /// Reference moisture point (%) used by the suitability formula.
    ///
    /// Low-Medium shares the Low point.
    pub fn ideal_moisture(&self) -> f64 {
        match self {
            MoistureTier::Low | MoistureTier::LowMedium => 50.0,
            MoistureTier::Medium => 60.0,
            MoistureTier::High => 70.0,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            MoistureTier::Low => "Low",
            MoistureTier::LowMedium => "Low-Medium",
            MoistureTier::Medium => "Medium",
            MoistureTier::High => "High",
        }
    }
}

/// One crop's reference profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Default-language identifier, also the lookup key
    pub name: String,

    pub names: LocalizedNames,

    /// Inclusive pH band
    pub ph_min: f64,
    pub ph_max: f64,

    pub moisture_tier: MoistureTier,

    /// Observed moisture window, display only (e.g. "70-80%")
    pub moisture_range_text: String,

    pub season: String,
    pub expected_yield_text: String,
    pub market_price_text: String,

    /// Yield under ideal conditions (tons/acre)
    pub base_yield: f64,
}

impl CropProfile {
    pub fn display_name(&self, language: Language) -> &str {
        self.names.get(language)
    }

    /// E.g. "High (70-80%)"
    pub fn moisture_requirement(&self) -> String {
        if self.moisture_range_text.is_empty() {
            self.moisture_tier.display_text().to_string()
        } else {
            format!("{} ({})", self.moisture_tier.display_text(), self.moisture_range_text)
        }
    }

    pub fn ph_in_band(&self, ph: f64) -> bool {
        self.ph_min <= ph && ph <= self.ph_max
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (field, value) in [
            ("ph_min", self.ph_min),
            ("ph_max", self.ph_max),
            ("base_yield", self.base_yield),
        ] {
            if !value.is_finite() {
                return Err(CatalogError::NonFinite { name: self.name.clone(), field });
            }
        }
        if self.ph_min > self.ph_max {
            return Err(CatalogError::InvertedPhBand {
                name: self.name.clone(),
                ph_min: self.ph_min,
                ph_max: self.ph_max,
            });
        }
        if self.base_yield < 0.0 {
            return Err(CatalogError::NegativeBaseYield {
                name: self.name.clone(),
                base_yield: self.base_yield,
            });
        }
        Ok(())
    }
}

/// Validated, ordered, immutable set of crop profiles
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
    index: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// Build a catalog, checking every profile's invariants
    pub fn new(crops: Vec<CropProfile>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (idx, crop) in crops.iter().enumerate() {
            crop.validate()?;
            if index.insert(crop.name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateName(crop.name.clone()));
            }
        }
        Ok(Self { crops, index })
    }

    /// Load a JSON array of profiles
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let crops: Vec<CropProfile> = serde_json::from_str(&contents)?;
        let catalog = Self::new(crops)?;
        tracing::info!("Loaded {} crop profiles from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The five Andhra Pradesh field crops of the reference deployment
    pub fn reference() -> Self {
        let crops = vec![
            profile(
                ("Rice", "వరి", "चावल"),
                (5.5, 7.0),
                (MoistureTier::High, "70-80%"),
                "Kharif (June-Oct)",
                "2.5-3.5 tons/acre",
                "₹2,000-2,500/quintal",
                3.0,
            ),
            profile(
                ("Cotton", "పత్తి", "कपास"),
                (6.0, 7.5),
                (MoistureTier::Medium, "50-65%"),
                "Kharif (May-Sep)",
                "1.5-2.5 tons/acre",
                "₹5,500-6,500/quintal",
                2.0,
            ),
            profile(
                ("Chili", "మిరపకాయ", "मिर्च"),
                (6.0, 7.0),
                (MoistureTier::Medium, "55-70%"),
                "Rabi (Oct-Mar)",
                "1-1.5 tons/acre",
                "₹8,000-12,000/quintal",
                1.25,
            ),
            profile(
                ("Turmeric", "పసుపు", "हल्दी"),
                (5.5, 7.5),
                (MoistureTier::High, "65-75%"),
                "Kharif (Jun-Sep)",
                "2-3 tons/acre",
                "₹7,000-9,000/quintal",
                2.5,
            ),
            profile(
                ("Groundnut", "వేరుశెనగ", "मूंगफली"),
                (6.0, 7.0),
                (MoistureTier::LowMedium, "45-60%"),
                "Kharif/Rabi",
                "1-1.5 tons/acre",
                "₹5,000-6,000/quintal",
                1.25,
            ),
        ];

        let index = crops
            .iter()
            .enumerate()
            .map(|(idx, crop)| (crop.name.clone(), idx))
            .collect();
        Self { crops, index }
    }

    /// All profiles in definition order
    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.index.get(name).map(|&idx| &self.crops[idx])
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

fn profile(
    (en, te, hi): (&str, &str, &str),
    (ph_min, ph_max): (f64, f64),
    (moisture_tier, moisture_range): (MoistureTier, &str),
    season: &str,
    expected_yield: &str,
    market_price: &str,
    base_yield: f64,
) -> CropProfile {
    CropProfile {
        name: en.to_string(),
        names: LocalizedNames::new(en, te, hi),
        ph_min,
        ph_max,
        moisture_tier,
        moisture_range_text: moisture_range.to_string(),
        season: season.to_string(),
        expected_yield_text: expected_yield.to_string(),
        market_price_text: market_price.to_string(),
        base_yield,
    }
}
