//! Logistic fit backed by `aprender`.
//!
//! Ratings are standardized before gradient descent so one learning rate
//! suits every feature. The fitted weights are then mapped back to rating
//! units, which is what the driver chart multiplies against.

use aprender::prelude::{LogisticRegression, Matrix};

use super::FEATURE_COUNT;
use crate::error::{ErrorCode, FitError, Result};

/// Gradient descent settings handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 2000,
            tolerance: 1e-6,
        }
    }
}

/// Fitted parameters in rating units plus training accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
    pub accuracy: f64,
}

/// Per-feature mean and spread of the training records.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Standardizer {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl Standardizer {
    fn from_records(records: &[[f64; FEATURE_COUNT]]) -> Self {
        let n = records.len().max(1) as f64;
        let mut mean = [0.0; FEATURE_COUNT];
        for record in records {
            for (m, x) in mean.iter_mut().zip(record) {
                *m += x / n;
            }
        }

        let mut scale = [0.0; FEATURE_COUNT];
        for record in records {
            for i in 0..FEATURE_COUNT {
                scale[i] += (record[i] - mean[i]).powi(2) / n;
            }
        }
        // Constant columns keep unit scale
        let scale = scale.map(|var| if var > 0.0 { var.sqrt() } else { 1.0 });

        Self { mean, scale }
    }

    fn apply(&self, record: &[f64; FEATURE_COUNT]) -> [f32; FEATURE_COUNT] {
        let mut row = [0.0_f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            row[i] = ((record[i] - self.mean[i]) / self.scale[i]) as f32;
        }
        row
    }

    /// Map weights learned on standardized features back to raw ratings.
    fn unscale(
        &self,
        weights: [f64; FEATURE_COUNT],
        bias: f64,
    ) -> ([f64; FEATURE_COUNT], f64) {
        let mut coefficients = [0.0; FEATURE_COUNT];
        let mut intercept = bias;
        for i in 0..FEATURE_COUNT {
            coefficients[i] = weights[i] / self.scale[i];
            intercept -= coefficients[i] * self.mean[i];
        }
        (coefficients, intercept)
    }
}

/// Fit a logistic model to `records`, labelled hire / no hire.
pub fn fit(
    records: &[[f64; FEATURE_COUNT]],
    labels: &[bool],
    settings: &SolverSettings,
) -> Result<FitOutcome> {
    if records.len() != labels.len() {
        return Err(FitError::model(
            ErrorCode::MODEL_SOLVER,
            format!("{} records but {} labels", records.len(), labels.len()),
        ));
    }
    let positives = labels.iter().filter(|&&l| l).count();
    if positives == 0 || positives == labels.len() {
        return Err(FitError::model(
            ErrorCode::MODEL_SINGLE_CLASS,
            "training labels contain a single class; need both hires and non-hires",
        ));
    }

    let standardizer = Standardizer::from_records(records);
    let flat: Vec<f32> = records
        .iter()
        .flat_map(|record| standardizer.apply(record))
        .collect();
    let x = matrix(records.len(), flat)?;
    let y: Vec<usize> = labels.iter().map(|&label| usize::from(label)).collect();

    let mut model = LogisticRegression::new()
        .with_learning_rate(settings.learning_rate as f32)
        .with_max_iter(settings.max_iterations)
        .with_tolerance(settings.tolerance as f32);
    model.fit(&x, &y).map_err(|e| {
        FitError::model(ErrorCode::MODEL_SOLVER, format!("logistic fit failed: {e}"))
    })?;
    let accuracy = f64::from(model.score(&x, &y));

    let (weights, bias) = linear_parameters(&model)?;
    let (coefficients, intercept) = standardizer.unscale(weights, bias);
    tracing::debug!(?coefficients, intercept, accuracy, "logistic fit complete");

    Ok(FitOutcome {
        coefficients,
        intercept,
        accuracy,
    })
}

/// Read the bias and weights back out of the fitted classifier by scoring
/// the origin and each unit vector.
fn linear_parameters(model: &LogisticRegression) -> Result<([f64; FEATURE_COUNT], f64)> {
    let rows = FEATURE_COUNT + 1;
    let mut flat = vec![0.0_f32; rows * FEATURE_COUNT];
    for i in 0..FEATURE_COUNT {
        flat[(i + 1) * FEATURE_COUNT + i] = 1.0;
    }
    let basis = matrix(rows, flat)?;
    let probabilities = model.predict_proba(&basis);

    let bias = logit(f64::from(probabilities[0]))?;
    let mut weights = [0.0; FEATURE_COUNT];
    for (i, weight) in weights.iter_mut().enumerate() {
        *weight = logit(f64::from(probabilities[i + 1]))? - bias;
    }
    Ok((weights, bias))
}

fn matrix(rows: usize, flat: Vec<f32>) -> Result<Matrix<f32>> {
    Matrix::from_vec(rows, FEATURE_COUNT, flat).map_err(|e| {
        FitError::model(
            ErrorCode::MODEL_SOLVER,
            format!("cannot build {rows}x{FEATURE_COUNT} feature matrix: {e}"),
        )
    })
}

fn logit(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(FitError::model(
            ErrorCode::MODEL_SOLVER,
            format!("fitted probability {p} is saturated"),
        ));
    }
    Ok((p / (1.0 - p)).ln())
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
