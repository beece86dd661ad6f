//! Scoring model: synthetic data, logistic fit, and predictions.
//!
//! The model is trained once per process and shared read-only:
//!
//! ```rust
//! use candidate_fit::config::ModelConfig;
//! use candidate_fit::model::shared_model;
//! use candidate_fit::wizard::Ratings;
//!
//! let model = shared_model(&ModelConfig::default())?;
//! let prediction = model.predict(&Ratings::new(10, 10, 10, 10));
//! assert!(prediction.probability > 0.0 && prediction.probability < 1.0);
//! # Ok::<(), candidate_fit::error::FitError>(())
//! ```

pub mod dataset;
pub mod logistic;
pub mod verdict;

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::ModelConfig;
use crate::error::Result;
use crate::wizard::{Ratings, Topic};

pub use dataset::SyntheticDataset;
pub use logistic::{sigmoid, FitOutcome, SolverSettings};
pub use verdict::{format_percent, Verdict, MATCH_THRESHOLD};

/// SQL, Python, Strategy, Vibe.
pub const FEATURE_COUNT: usize = 4;

static SHARED_MODEL: OnceCell<ScoringModel> = OnceCell::new();

/// Train on first use, then hand out the same model for the rest of the
/// process. Later calls ignore `config`.
pub fn shared_model(config: &ModelConfig) -> Result<&'static ScoringModel> {
    SHARED_MODEL.get_or_try_init(|| {
        let (model, summary) = ScoringModel::train_with_summary(config)?;
        tracing::info!(
            seed = summary.seed,
            samples = summary.samples,
            accuracy = summary.accuracy,
            "trained scoring model"
        );
        Ok(model)
    })
}

/// Linear weights learned from the synthetic sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

/// Facts about a training run, for the `model` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub seed: u64,
    pub samples: usize,
    pub positive_labels: usize,
    pub accuracy: f64,
    pub learning_rate: f64,
    pub max_iterations: usize,
}

impl ScoringModel {
    /// Build a model from known weights.
    pub fn from_parts(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn train(config: &ModelConfig) -> Result<Self> {
        Self::train_with_summary(config).map(|(model, _)| model)
    }

    pub fn train_with_summary(config: &ModelConfig) -> Result<(Self, TrainingSummary)> {
        config.validate()?;
        let _span = tracing::debug_span!("train", seed = config.seed).entered();

        let dataset = SyntheticDataset::generate(config.seed, config.samples)?;
        let settings = config.solver_settings();
        let fit = logistic::fit(&dataset.records, &dataset.labels, &settings)?;
        let model = Self::from_parts(fit.coefficients, fit.intercept);

        let summary = TrainingSummary {
            seed: config.seed,
            samples: dataset.len(),
            positive_labels: dataset.positive_count(),
            accuracy: fit.accuracy,
            learning_rate: settings.learning_rate,
            max_iterations: settings.max_iterations,
        };
        Ok((model, summary))
    }

    pub fn coefficients(&self) -> [f64; FEATURE_COUNT] {
        self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn probability_of(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        sigmoid(self.intercept + dataset::dot(&self.coefficients, features))
    }

    /// Probability that these ratings describe a hire.
    pub fn probability(&self, ratings: &Ratings) -> f64 {
        self.probability_of(&ratings.features())
    }

    pub fn predict(&self, ratings: &Ratings) -> Prediction {
        let impacts = Topic::ALL.map(|topic| {
            let rating = ratings.get(topic).value();
            let coefficient = self.coefficients[topic.index()];
            FeatureImpact {
                topic,
                label: topic.feature_label(),
                rating,
                coefficient,
                impact: rating as f64 * coefficient,
            }
        });

        Prediction {
            probability: self.probability(ratings),
            impacts,
        }
    }
}

/// Contribution of one rating to the linear score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImpact {
    pub topic: Topic,
    pub label: &'static str,
    pub rating: u8,
    pub coefficient: f64,
    pub impact: f64,
}

/// Derived result for the final screen; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub probability: f64,
    pub impacts: [FeatureImpact; FEATURE_COUNT],
}

impl Prediction {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_probability(self.probability)
    }

    /// Largest absolute impact, used to scale the driver chart.
    pub fn max_abs_impact(&self) -> f64 {
        self.impacts
            .iter()
            .fold(0.0_f64, |acc, i| acc.max(i.impact.abs()))
    }
}
