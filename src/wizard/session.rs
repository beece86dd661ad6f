//! Session state and its pure transition function.
//!
//! The buttons and the sidebar selector both produce a [`WizardAction`], and
//! both write the single `stage` field, so they cannot disagree about which
//! screen is current.

use super::ratings::{Rating, Ratings, Topic};
use super::stage::Stage;
use serde::{Deserialize, Serialize};

/// A user intent on the wizard, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Forward button.
    Next,
    /// Back button.
    Back,
    /// Sidebar selection.
    JumpTo(Stage),
    /// "Start Over" on the results screen.
    Restart,
    /// Nudge a slider.
    Adjust { topic: Topic, delta: i8 },
    /// Drop a slider at an exact value.
    SetRating { topic: Topic, value: i64 },
}

/// Per-visitor questionnaire state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub stage: Stage,
    pub ratings: Ratings,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on a given stage with default ratings.
    pub fn starting_at(stage: Stage) -> Self {
        Self {
            stage,
            ..Self::default()
        }
    }

    /// Apply an action and return the next state.
    ///
    /// `Next` on Results and `Back` on Introduction are no-ops. `Restart`
    /// returns to Introduction and keeps the ratings.
    #[must_use]
    pub fn apply(self, action: WizardAction) -> Session {
        match action {
            WizardAction::Next => Session {
                stage: self.stage.next().unwrap_or(self.stage),
                ..self
            },
            WizardAction::Back => Session {
                stage: self.stage.previous().unwrap_or(self.stage),
                ..self
            },
            WizardAction::JumpTo(stage) => Session { stage, ..self },
            WizardAction::Restart => Session {
                stage: Stage::Introduction,
                ..self
            },
            WizardAction::Adjust { topic, delta } => {
                let rating = self.ratings.get(topic).shifted(delta);
                Session {
                    ratings: self.ratings.with(topic, rating),
                    ..self
                }
            }
            WizardAction::SetRating { topic, value } => Session {
                ratings: self.ratings.with(topic, Rating::new(value)),
                ..self
            },
        }
    }

    /// Apply a sequence of actions in order.
    #[must_use]
    pub fn apply_all(self, actions: impl IntoIterator<Item = WizardAction>) -> Session {
        actions.into_iter().fold(self, Session::apply)
    }

    /// Topic of the slider on the current stage, if any.
    pub fn active_topic(&self) -> Option<Topic> {
        self.stage.topic()
    }
}
