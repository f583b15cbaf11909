//! Confidence Sources
//!
//! There is no trained yield model behind the advisor, so the confidence
//! attached to a prediction is simulated. The randomness is injected through
//! `ConfidenceSource` so a deployment can seed it and tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Draws a value uniformly from `[low, high]`
pub trait ConfidenceSource: Send + Sync {
    fn sample_uniform(&self, low: f64, high: f64) -> f64;
}

/// Per-thread OS-seeded generator; outputs are not reproducible
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ConfidenceSource for ThreadRngSource {
    fn sample_uniform(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Seeded generator: the same seed yields the same sequence of draws
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ConfidenceSource for SeededSource {
    fn sample_uniform(&self, low: f64, high: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(low..=high)
    }
}

/// Cycles through a fixed list of values, ignoring the requested range.
/// An empty list always yields `low`.
#[derive(Debug)]
pub struct FixedSequence {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl ConfidenceSource for FixedSequence {
    fn sample_uniform(&self, low: f64, _high: f64) -> f64 {
        if self.values.is_empty() {
            return low;
        }
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[idx]
    }
}
