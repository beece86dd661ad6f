//! Topic ratings collected by the questionnaire sliders.

use serde::{Deserialize, Serialize};

/// A 0–10 rating. Construction clamps, arithmetic saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Rating = Rating(5);

    /// Create a rating, clamping into `0..=10`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift by `delta`, saturating at the slider bounds.
    #[must_use]
    pub fn shifted(self, delta: i8) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// Slider position in `[0.0, 1.0]`.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / Self::MAX as f64
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four questionnaire topics, in model feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// SQL and data wrangling need.
    DataWrangling,
    /// Python and predictive modeling need.
    Modeling,
    /// Business strategy need.
    Strategy,
    /// Tolerance for bad stats jokes.
    CultureFit,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::DataWrangling,
        Topic::Modeling,
        Topic::Strategy,
        Topic::CultureFit,
    ];

    /// Feature index in the model's coefficient vector.
    pub fn index(self) -> usize {
        match self {
            Topic::DataWrangling => 0,
            Topic::Modeling => 1,
            Topic::Strategy => 2,
            Topic::CultureFit => 3,
        }
    }

    /// Short label used by the driver analysis chart.
    pub fn feature_label(self) -> &'static str {
        match self {
            Topic::DataWrangling => "SQL",
            Topic::Modeling => "Python",
            Topic::Strategy => "Strategy",
            Topic::CultureFit => "Team Vibe",
        }
    }

    /// Label shown above the slider.
    pub fn slider_label(self) -> &'static str {
        match self {
            Topic::DataWrangling => "Rate the need for SQL / Data Wrangling",
            Topic::Modeling => "Rate the need for Python / Modeling",
            Topic::Strategy => "Rate the need for Business Strategy",
            Topic::CultureFit => "Rate tolerance for Bad Stats Jokes",
        }
    }
}

/// Ratings for all four topics. Every topic starts at 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ratings {
    pub sql_need: Rating,
    pub python_need: Rating,
    pub strategy_need: Rating,
    pub vibe_check: Rating,
}

impl Ratings {
    pub fn new(sql: i64, python: i64, strategy: i64, vibe: i64) -> Self {
        Self {
            sql_need: Rating::new(sql),
            python_need: Rating::new(python),
            strategy_need: Rating::new(strategy),
            vibe_check: Rating::new(vibe),
        }
    }

    pub fn get(&self, topic: Topic) -> Rating {
        match topic {
            Topic::DataWrangling => self.sql_need,
            Topic::Modeling => self.python_need,
            Topic::Strategy => self.strategy_need,
            Topic::CultureFit => self.vibe_check,
        }
    }

    #[must_use]
    pub fn with(mut self, topic: Topic, rating: Rating) -> Self {
        match topic {
            Topic::DataWrangling => self.sql_need = rating,
            Topic::Modeling => self.python_need = rating,
            Topic::Strategy => self.strategy_need = rating,
            Topic::CultureFit => self.vibe_check = rating,
        }
        self
    }

    /// Feature vector in model order.
    pub fn features(&self) -> [f64; 4] {
        Topic::ALL.map(|topic| self.get(topic).value() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_five() {
        let ratings = Ratings::default();
        for topic in Topic::ALL {
            assert_eq!(ratings.get(topic).value(), 5);
        }
    }

    #[test]
    fn with_replaces_only_one_topic() {
        let ratings = Ratings::default().with(Topic::Strategy, Rating::new(9));
        assert_eq!(ratings.features(), [5.0, 5.0, 9.0, 5.0]);
    }

    #[test]
    fn deserializing_out_of_range_clamps() {
        let rating: Rating = serde_json::from_str("42").unwrap();
        assert_eq!(rating.value(), 10);
        let rating: Rating = serde_json::from_str("-3").unwrap();
        assert_eq!(rating.value(), 0);
    }

    proptest! {
        #[test]
        fn construction_always_in_bounds(value in any::<i64>()) {
            let rating = Rating::new(value);
            prop_assert!(rating.value() <= Rating::MAX);
        }

        #[test]
        fn shifting_saturates(start in 0i64..=10, delta in any::<i8>()) {
            let shifted = Rating::new(start).shifted(delta);
            let expected = (start + delta as i64).clamp(0, 10);
            prop_assert_eq!(shifted.value() as i64, expected);
        }
    }
}
