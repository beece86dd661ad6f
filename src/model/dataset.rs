//! Seeded synthetic training sample.
//!
//! Each record is four integer ratings drawn uniformly from `0..=10`. The
//! label is 1 when `ratings · GENERATING_WEIGHTS + BIAS + N(0, NOISE_STD_DEV)`
//! exceeds `HIRE_THRESHOLD`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::FEATURE_COUNT;
use crate::error::{ErrorCode, FitError, Result};

/// Importance of SQL, Python, Strategy and Vibe in the generating rule.
pub const GENERATING_WEIGHTS: [f64; FEATURE_COUNT] = [0.8, 1.2, 1.0, 0.5];
/// Baseline added to every score so low needs still stay in the running.
pub const BIAS: f64 = 8.0;
pub const NOISE_STD_DEV: f64 = 2.0;
pub const HIRE_THRESHOLD: f64 = 15.0;

/// Features and labels, row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDataset {
    pub records: Vec<[f64; FEATURE_COUNT]>,
    pub labels: Vec<bool>,
}

impl SyntheticDataset {
    /// Generate `samples` records from `seed`. Same seed, same dataset.
    pub fn generate(seed: u64, samples: usize) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, NOISE_STD_DEV)
            .map_err(|e| FitError::model(ErrorCode::MODEL_SOLVER, e.to_string()))?;

        let records: Vec<[f64; FEATURE_COUNT]> = (0..samples)
            .map(|_| [(); FEATURE_COUNT].map(|_| rng.gen_range(0..=10u8) as f64))
            .collect();

        let labels = records
            .iter()
            .map(|record| {
                let score = dot(record, &GENERATING_WEIGHTS) + BIAS + noise.sample(&mut rng);
                score > HIRE_THRESHOLD
            })
            .collect();

        Ok(Self { records, labels })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn positive_count(&self) -> usize {
        self.labels.iter().filter(|&&label| label).count()
    }
}

pub(crate) fn dot(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_dataset() {
        let a = SyntheticDataset::generate(42, 200).unwrap();
        let b = SyntheticDataset::generate(42, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn records_are_integers_in_range() {
        let dataset = SyntheticDataset::generate(7, 200).unwrap();
        assert_eq!(dataset.len(), 200);
        for record in &dataset.records {
            for &value in record {
                assert!((0.0..=10.0).contains(&value));
                assert_eq!(value.fract(), 0.0);
            }
        }
    }

    #[test]
    fn labels_are_mostly_positive() {
        // Mean score is 25.5 against a threshold of 15, so hires dominate.
        let dataset = SyntheticDataset::generate(42, 200).unwrap();
        assert!(dataset.positive_count() > 150);
        assert!(dataset.positive_count() < 200);
    }
}
