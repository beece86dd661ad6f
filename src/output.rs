//! Non-interactive output for the `predict` and `model` commands.
//!
//! Terminal output is a colored table; JSON output is a stable report shape
//! for scripting.

use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::model::{format_percent, FeatureImpact, Prediction, ScoringModel, TrainingSummary, Verdict};
use crate::wizard::{Ratings, Topic};

/// JSON shape of a one-shot prediction.
#[derive(Debug, Serialize)]
pub struct PredictionReport<'a> {
    pub ratings: Ratings,
    pub probability: f64,
    pub percent: String,
    pub verdict: Verdict,
    pub headline: &'static str,
    pub impacts: &'a [FeatureImpact],
}

impl<'a> PredictionReport<'a> {
    pub fn new(ratings: Ratings, prediction: &'a Prediction) -> Self {
        let verdict = prediction.verdict();
        Self {
            ratings,
            probability: prediction.probability,
            percent: format_percent(prediction.probability),
            verdict,
            headline: verdict.headline(),
            impacts: &prediction.impacts,
        }
    }
}

/// JSON shape of the trained model.
#[derive(Debug, Serialize)]
pub struct ModelReport {
    pub features: Vec<&'static str>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub training: TrainingSummary,
}

impl ModelReport {
    pub fn new(model: &ScoringModel, training: TrainingSummary) -> Self {
        Self {
            features: Topic::ALL.iter().map(|t| t.feature_label()).collect(),
            coefficients: model.coefficients().to_vec(),
            intercept: model.intercept(),
            training,
        }
    }
}

pub fn format_prediction(
    ratings: Ratings,
    prediction: &Prediction,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PredictionReport::new(
            ratings, prediction,
        ))?),
        OutputFormat::Terminal => Ok(format_prediction_terminal(prediction)),
    }
}

pub fn format_model(
    model: &ScoringModel,
    training: TrainingSummary,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ModelReport::new(
            model, training,
        ))?),
        OutputFormat::Terminal => Ok(format_model_terminal(model, &training)),
    }
}

fn format_prediction_terminal(prediction: &Prediction) -> String {
    let verdict = prediction.verdict();
    let headline = match verdict {
        Verdict::Match => verdict.headline().green().bold(),
        Verdict::Outlier => verdict.headline().yellow().bold(),
    };

    let mut table = base_table();
    table.set_header(vec!["Feature", "Rating", "Coefficient", "Impact"]);
    for impact in &prediction.impacts {
        table.add_row(vec![
            impact.label.to_string(),
            impact.rating.to_string(),
            format!("{:.4}", impact.coefficient),
            format!("{:.2}", impact.impact),
        ]);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "Match Probability:".bold(),
        format_percent(prediction.probability).cyan().bold()
    ));
    out.push_str(&format!("{}\n\n", headline));
    out.push_str(&format!("{}\n", "Driver Analysis".bold()));
    out.push_str(&table.to_string());
    out.push('\n');
    out
}

fn format_model_terminal(model: &ScoringModel, training: &TrainingSummary) -> String {
    let mut table = base_table();
    table.set_header(vec!["Feature", "Coefficient"]);
    for topic in Topic::ALL {
        table.add_row(vec![
            topic.feature_label().to_string(),
            format!("{:.6}", model.coefficients()[topic.index()]),
        ]);
    }
    table.add_row(vec!["(intercept)".to_string(), format!("{:.6}", model.intercept())]);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Scoring Model".bold()));
    out.push_str(&table.to_string());
    out.push('\n');
    out.push_str(&format!(
        "seed {}  samples {}  hired {}  training accuracy {}  learning rate {}  max iterations {}\n",
        training.seed,
        training.samples,
        training.positive_labels,
        format_percent(training.accuracy),
        training.learning_rate,
        training.max_iterations,
    ));
    out
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> (Ratings, Prediction) {
        let model = ScoringModel::from_parts([0.5, 1.0, 0.25, 0.1], -6.0);
        let ratings = Ratings::new(8, 9, 4, 10);
        (ratings, model.predict(&ratings))
    }

    #[test]
    fn json_prediction_has_probability_and_impacts() {
        let (ratings, prediction) = prediction();
        let json = format_prediction(ratings, &prediction, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let p = value["probability"].as_f64().unwrap();
        assert!(p > 0.0 && p < 1.0);
        assert_eq!(value["impacts"].as_array().unwrap().len(), 4);
        assert_eq!(value["impacts"][0]["label"], "SQL");
        assert_eq!(value["ratings"]["python_need"], 9);
        assert_eq!(value["verdict"], "match");
    }

    #[test]
    fn terminal_prediction_lists_every_feature() {
        colored::control::set_override(false);
        let (ratings, prediction) = prediction();
        let text = format_prediction(ratings, &prediction, OutputFormat::Terminal).unwrap();
        for label in ["SQL", "Python", "Strategy", "Team Vibe"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Match Probability:"));
    }

    #[test]
    fn model_report_includes_intercept() {
        let model = ScoringModel::from_parts([0.1, 0.2, 0.3, 0.4], -1.5);
        let training = TrainingSummary {
            seed: 7,
            samples: 10,
            positive_labels: 4,
            accuracy: 0.9,
            learning_rate: 0.1,
            max_iterations: 2000,
        };
        let json = format_model(&model, training, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["intercept"], -1.5);
        assert_eq!(value["features"][3], "Team Vibe");
        assert_eq!(value["training"]["seed"], 7);
    }
}
