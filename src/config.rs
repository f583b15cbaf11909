//! Server configuration from environment variables
//!
//! - `PORT` - listen port (default 8001)
//! - `CATALOG_PATH` - JSON crop catalog; the built-in reference catalog if unset
//! - `STRICT_VALIDATION` - reject pH outside 0-14 and moisture outside 0-100%
//! - `CONFIDENCE_SEED` - seed the simulated confidence for reproducible output

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CropCatalog;
use crate::confidence::{ConfidenceSource, SeededSource, ThreadRngSource};
use crate::engine::AdvisoryEngine;

pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub strict_validation: bool,
    pub confidence_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: None,
            strict_validation: false,
            confidence_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?;
        }

        config.catalog_path = get("CATALOG_PATH").map(PathBuf::from);

        if let Some(strict) = get("STRICT_VALIDATION") {
            config.strict_validation = parse_flag(&strict)
                .with_context(|| format!("Invalid STRICT_VALIDATION: {}", strict))?;
        }

        if let Some(seed) = get("CONFIDENCE_SEED") {
            config.confidence_seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("Invalid CONFIDENCE_SEED: {}", seed))?,
            );
        }

        Ok(config)
    }

    pub fn load_catalog(&self) -> Result<CropCatalog> {
        match &self.catalog_path {
            Some(path) => CropCatalog::from_json_path(path)
                .with_context(|| format!("Failed to load crop catalog from {:?}", path)),
            None => Ok(CropCatalog::reference()),
        }
    }

    pub fn build_engine(&self) -> Result<AdvisoryEngine> {
        let catalog = Arc::new(self.load_catalog()?);
        let confidence: Arc<dyn ConfidenceSource> = match self.confidence_seed {
            Some(seed) => Arc::new(SeededSource::new(seed)),
            None => Arc::new(ThreadRngSource),
        };
        Ok(AdvisoryEngine::new(catalog, confidence))
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}
