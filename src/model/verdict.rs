//! Presentation branch driven by the match probability.

use serde::Serialize;

/// Probabilities strictly above this count as a match.
pub const MATCH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    Outlier,
}

impl Verdict {
    pub fn from_probability(probability: f64) -> Self {
        if probability > MATCH_THRESHOLD {
            Verdict::Match
        } else {
            Verdict::Outlier
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Match => "Result: It's a Match! 🚀",
            Verdict::Outlier => "Result: ...Outlier? 🤔",
        }
    }

    pub fn conclusion_title(self) -> &'static str {
        match self {
            Verdict::Match => "Conclusion",
            Verdict::Outlier => "Conclusion: The Model is Clearly Missing Something...",
        }
    }

    /// Body paragraphs of the conclusion. The outlier text quotes the
    /// probability back at the reader.
    pub fn conclusion_lines(self, probability: f64) -> Vec<String> {
        match self {
            Verdict::Match => vec![
                "The model indicates a high probability of fit!".to_string(),
                String::new(),
                "Hypothesis: I can help your team reach its goals.".to_string(),
                "Next Step: Validate this hypothesis with a 15-minute intro.".to_string(),
            ],
            Verdict::Outlier => {
                let mut lines = vec![
                    format!("Wait, only {}? 🤨", format_percent(probability)),
                    String::new(),
                    "This simple algorithm fails to account for Soft Skills, Drive, and \
                     Adaptability."
                        .to_string(),
                    "If there's a skill gap, I'll close it in 2 weeks. Here are the latent \
                     variables the model missed:"
                        .to_string(),
                    String::new(),
                ];
                lines.extend(LATENT_VARIABLES.iter().map(|(name, detail)| {
                    format!("✅ {}: {}", name, detail)
                }));
                lines.push(String::new());
                lines.push(
                    "Let's chat anyway. I bet I'm a better fit than this LogisticRegression \
                     thinks."
                        .to_string(),
                );
                lines
            }
        }
    }
}

const LATENT_VARIABLES: [(&str, &str); 4] = [
    (
        "Fast Learner",
        "I picked up a whole new UI stack just to build this app.",
    ),
    (
        "Communication",
        "I can explain complex data to non-technical stakeholders.",
    ),
    (
        "Grit",
        "I don't give up when the model predicts a 0 (or when code breaks).",
    ),
    ("Juggling", "Literal juggling. It helps with multitasking."),
];

/// `0.734` → `"73.4%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(Verdict::from_probability(0.6), Verdict::Outlier);
        assert_eq!(Verdict::from_probability(0.6000001), Verdict::Match);
        assert_eq!(Verdict::from_probability(0.05), Verdict::Outlier);
    }

    #[test]
    fn outlier_conclusion_quotes_probability() {
        let lines = Verdict::Outlier.conclusion_lines(0.4213);
        assert!(lines[0].contains("42.1%"));
        assert!(lines.iter().any(|l| l.contains("Juggling")));
    }

    #[test]
    fn match_conclusion_has_next_step() {
        let lines = Verdict::Match.conclusion_lines(0.93);
        assert!(lines.iter().any(|l| l.starts_with("Next Step")));
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.734), "73.4%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
