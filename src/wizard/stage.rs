//! The six wizard stages and their fixed ordering.

use super::ratings::Topic;
use serde::{Deserialize, Serialize};

/// A wizard screen. Navigation is linear in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Introduction,
    Sql,
    Python,
    Strategy,
    Vibe,
    Results,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Introduction,
        Stage::Sql,
        Stage::Python,
        Stage::Strategy,
        Stage::Vibe,
        Stage::Results,
    ];

    pub fn index(self) -> usize {
        match self {
            Stage::Introduction => 0,
            Stage::Sql => 1,
            Stage::Python => 2,
            Stage::Strategy => 3,
            Stage::Vibe => 4,
            Stage::Results => 5,
        }
    }

    /// Stage at `index`, or `Introduction` for anything out of range.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Stage by sidebar name (case-insensitive), or `Introduction` if unknown.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|stage| stage.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Sidebar name.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Introduction => "Introduction",
            Stage::Sql => "SQL",
            Stage::Python => "Python",
            Stage::Strategy => "Strategy",
            Stage::Vibe => "Vibe",
            Stage::Results => "Results",
        }
    }

    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Stage> {
        self.index().checked_sub(1).map(Self::from_index)
    }

    /// Topic whose slider lives on this stage.
    pub fn topic(self) -> Option<Topic> {
        match self {
            Stage::Sql => Some(Topic::DataWrangling),
            Stage::Python => Some(Topic::Modeling),
            Stage::Strategy => Some(Topic::Strategy),
            Stage::Vibe => Some(Topic::CultureFit),
            Stage::Introduction | Stage::Results => None,
        }
    }

    /// Fraction of the questionnaire completed when this stage is shown.
    pub fn progress(self) -> f64 {
        self.index() as f64 / (Self::ALL.len() - 1) as f64
    }

    /// Label on the forward button, if the stage has one.
    pub fn next_label(self) -> Option<&'static str> {
        match self {
            Stage::Introduction => Some("Next: Data Needs"),
            Stage::Sql => Some("Next: Python Needs"),
            Stage::Python => Some("Next: Strategy"),
            Stage::Strategy => Some("Next: Culture Fit"),
            Stage::Vibe => Some("Calculate Results 🚀"),
            Stage::Results => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_stages_in_order() {
        let mut visited = vec![Stage::Introduction];
        let mut current = Stage::Introduction;
        while let Some(next) = current.next() {
            visited.push(next);
            current = next;
        }
        assert_eq!(visited, Stage::ALL.to_vec());
    }

    #[test]
    fn previous_of_each_topic_is_its_predecessor() {
        assert_eq!(Stage::Sql.previous(), Some(Stage::Introduction));
        assert_eq!(Stage::Python.previous(), Some(Stage::Sql));
        assert_eq!(Stage::Strategy.previous(), Some(Stage::Python));
        assert_eq!(Stage::Vibe.previous(), Some(Stage::Strategy));
        assert_eq!(Stage::Introduction.previous(), None);
    }

    #[test]
    fn unknown_values_fall_back_to_introduction() {
        assert_eq!(Stage::from_name("Payroll"), Stage::Introduction);
        assert_eq!(Stage::from_index(17), Stage::Introduction);
        assert_eq!(Stage::from_name(" vibe "), Stage::Vibe);
        assert_eq!(Stage::from_name("sql"), Stage::Sql);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        assert_eq!(Stage::Introduction.progress(), 0.0);
        assert_eq!(Stage::Results.progress(), 1.0);
        assert!((Stage::Python.progress() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn only_topic_stages_have_topics() {
        let with_topics: Vec<_> = Stage::ALL.iter().filter(|s| s.topic().is_some()).collect();
        assert_eq!(with_topics.len(), 4);
        assert!(Stage::Results.topic().is_none());
    }
}
