//! Integration tests for the trained scoring model.

use candidate_fit::config::ModelConfig;
use candidate_fit::model::{ScoringModel, SyntheticDataset, Verdict};
use candidate_fit::wizard::{Ratings, Topic};
use once_cell::sync::OnceCell;

fn default_model() -> &'static ScoringModel {
    static MODEL: OnceCell<ScoringModel> = OnceCell::new();
    MODEL.get_or_init(|| ScoringModel::train(&ModelConfig::default()).unwrap())
}

#[test]
fn probability_is_strictly_inside_unit_interval() {
    let model = default_model();
    for sql in 0..=10 {
        for python in 0..=10 {
            for strategy in 0..=10 {
                for vibe in 0..=10 {
                    let p = model.probability(&Ratings::new(sql, python, strategy, vibe));
                    assert!(p > 0.0 && p < 1.0, "p = {p} for {sql},{python},{strategy},{vibe}");
                }
            }
        }
    }
}

#[test]
fn training_is_bit_identical_for_a_seed() {
    let config = ModelConfig::default();
    let first = ScoringModel::train(&config).unwrap();
    let second = ScoringModel::train(&config).unwrap();

    let bits = |m: &ScoringModel| {
        let mut v: Vec<u64> = m.coefficients().iter().map(|c| c.to_bits()).collect();
        v.push(m.intercept().to_bits());
        v
    };
    assert_eq!(bits(&first), bits(&second));

    let a = SyntheticDataset::generate(config.seed, config.samples).unwrap();
    let b = SyntheticDataset::generate(config.seed, config.samples).unwrap();
    assert_eq!(a.labels, b.labels);
}

#[test]
fn every_learned_coefficient_is_positive() {
    let model = default_model();
    for (topic, coefficient) in Topic::ALL.iter().zip(model.coefficients()) {
        assert!(coefficient > 0.0, "{:?} has coefficient {}", topic, coefficient);
    }
}

#[test]
fn raising_any_rating_never_lowers_probability() {
    let model = default_model();
    let base = Ratings::new(3, 4, 5, 6);
    let p = model.probability(&base);

    for topic in Topic::ALL {
        let raised = base.with(topic, base.get(topic).shifted(1));
        assert!(model.probability(&raised) >= p, "{:?}", topic);
    }
}

#[test]
fn all_tens_beat_all_zeros() {
    let model = default_model();
    let high = model.predict(&Ratings::new(10, 10, 10, 10));
    let low = model.predict(&Ratings::new(0, 0, 0, 0));

    assert!(high.probability > low.probability);
    assert_eq!(high.verdict(), Verdict::Match);
}

#[test]
fn impacts_are_rating_times_coefficient() {
    let model = default_model();
    let ratings = Ratings::new(2, 7, 0, 10);
    let prediction = model.predict(&ratings);

    for impact in prediction.impacts {
        let expected = ratings.get(impact.topic).value() as f64 * impact.coefficient;
        assert_eq!(impact.impact, expected);
    }
    assert_eq!(prediction.impacts[2].impact, 0.0);
}

#[test]
fn different_seeds_give_different_samples() {
    let a = SyntheticDataset::generate(1, 200).unwrap();
    let b = SyntheticDataset::generate(2, 200).unwrap();
    assert_ne!(a.records, b.records);
}
