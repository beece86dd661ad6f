//! Pure action determination for wizard keyboard handling.
//!
//! `determine_action` maps key + context to an intent; `navigation` executes
//! it. Keeping the mapping pure lets the key bindings be tested without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent};

use crate::wizard::{Stage, WizardAction};

/// Slider step for one key press.
const SLIDER_STEP: i8 = 1;

/// Everything a key press can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Leave the application.
    Quit,
    /// Change the session (buttons, sliders, sidebar jumps).
    Wizard(WizardAction),
    /// Move keyboard focus between the screen and the sidebar.
    ToggleSidebarFocus,
    SidebarUp,
    SidebarDown,
    /// Jump to the stage under the sidebar cursor.
    SidebarSelect,
    /// "Email Me" on the results screen.
    CopyEmail,
    /// Resume download, or the profile link when there is no resume.
    Resume,
}

/// State needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub stage: Stage,
    pub sidebar_focused: bool,
}

impl ActionContext {
    pub fn new(stage: Stage, sidebar_focused: bool) -> Self {
        Self {
            stage,
            sidebar_focused,
        }
    }
}

/// Map a key to an action, or `None` when the key does nothing here.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<UiAction> {
    // Always available
    match key.code {
        KeyCode::Char('q') => return Some(UiAction::Quit),
        KeyCode::Tab => return Some(UiAction::ToggleSidebarFocus),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            return Some(UiAction::Wizard(WizardAction::JumpTo(Stage::from_index(
                index,
            ))));
        }
        _ => {}
    }

    if ctx.sidebar_focused {
        return determine_sidebar_action(key);
    }

    match ctx.stage {
        Stage::Results => determine_results_action(key),
        stage => determine_question_action(key, stage),
    }
}

fn determine_sidebar_action(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiAction::SidebarUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiAction::SidebarDown),
        KeyCode::Enter => Some(UiAction::SidebarSelect),
        KeyCode::Esc => Some(UiAction::ToggleSidebarFocus),
        _ => None,
    }
}

fn determine_results_action(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Char('e') => Some(UiAction::CopyEmail),
        KeyCode::Char('r') => Some(UiAction::Resume),
        KeyCode::Char('s') | KeyCode::Enter => Some(UiAction::Wizard(WizardAction::Restart)),
        _ => None,
    }
}

fn determine_question_action(key: KeyEvent, stage: Stage) -> Option<UiAction> {
    let wizard = |action| Some(UiAction::Wizard(action));

    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => wizard(WizardAction::Next),

        // Introduction has no Back button
        KeyCode::Backspace | KeyCode::Char('b') if stage.previous().is_some() => {
            wizard(WizardAction::Back)
        }

        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
            stage.topic().and_then(|topic| {
                wizard(WizardAction::Adjust {
                    topic,
                    delta: -SLIDER_STEP,
                })
            })
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            stage.topic().and_then(|topic| {
                wizard(WizardAction::Adjust {
                    topic,
                    delta: SLIDER_STEP,
                })
            })
        }
        KeyCode::Home => stage
            .topic()
            .and_then(|topic| wizard(WizardAction::SetRating { topic, value: 0 })),
        KeyCode::End => stage
            .topic()
            .and_then(|topic| wizard(WizardAction::SetRating { topic, value: 10 })),

        _ => None,
    }
}
