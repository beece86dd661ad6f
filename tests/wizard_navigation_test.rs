//! Integration tests for wizard stage transitions.

use candidate_fit::wizard::{Rating, Ratings, Session, Stage, Topic, WizardAction};
use pretty_assertions::assert_eq;

#[test]
fn next_visits_every_stage_in_order() {
    let mut session = Session::new();
    let mut visited = vec![session.stage];
    for _ in 0..5 {
        session = session.apply(WizardAction::Next);
        visited.push(session.stage);
    }

    assert_eq!(
        visited,
        vec![
            Stage::Introduction,
            Stage::Sql,
            Stage::Python,
            Stage::Strategy,
            Stage::Vibe,
            Stage::Results,
        ]
    );
}

#[test]
fn back_returns_to_immediate_predecessor() {
    for stage in [Stage::Sql, Stage::Python, Stage::Strategy, Stage::Vibe] {
        let session = Session::starting_at(stage).apply(WizardAction::Back);
        assert_eq!(Some(session.stage), stage.previous());
    }
    assert_eq!(
        Session::starting_at(Stage::Python)
            .apply(WizardAction::Back)
            .stage,
        Stage::Sql
    );
}

#[test]
fn sidebar_jump_and_buttons_share_one_stage() {
    let session = Session::new()
        .apply(WizardAction::JumpTo(Stage::Strategy))
        .apply(WizardAction::Next);
    assert_eq!(session.stage, Stage::Vibe);

    let session = session
        .apply(WizardAction::Back)
        .apply(WizardAction::JumpTo(Stage::Sql))
        .apply(WizardAction::Back);
    assert_eq!(session.stage, Stage::Introduction);
}

#[test]
fn ratings_start_at_five() {
    let session = Session::new();
    for topic in Topic::ALL {
        assert_eq!(session.ratings.get(topic), Rating::new(5));
    }
}

#[test]
fn restart_returns_to_introduction_and_keeps_ratings() {
    let session = Session::new().apply_all([
        WizardAction::Next,
        WizardAction::SetRating {
            topic: Topic::DataWrangling,
            value: 9,
        },
        WizardAction::Next,
        WizardAction::Adjust {
            topic: Topic::Modeling,
            delta: -3,
        },
        WizardAction::JumpTo(Stage::Results),
        WizardAction::Restart,
    ]);

    assert_eq!(session.stage, Stage::Introduction);
    assert_eq!(session.ratings, Ratings::new(9, 2, 5, 5));
}

#[test]
fn unknown_stage_names_fall_back_to_introduction() {
    assert_eq!(Stage::from_name("results"), Stage::Results);
    assert_eq!(Stage::from_name("  sql "), Stage::Sql);
    assert_eq!(Stage::from_name("Checkout"), Stage::Introduction);
    assert_eq!(Stage::from_index(99), Stage::Introduction);
}
