//! Keyboard handling for the wizard.
//!
//! `actions::determine_action` decides what a key means; this module is the
//! imperative shell that carries it out against [`WizardApp`].

use crossterm::event::KeyEvent;

use super::actions::{determine_action, ActionContext, UiAction};
use super::app::WizardApp;
use super::clipboard::copy_to_clipboard;
use crate::resume::{ResumeAsset, EMAIL_LINK};
use crate::wizard::{Stage, WizardAction};

/// Handle keyboard input and return true if the app should quit.
pub fn handle_key(app: &mut WizardApp, key: KeyEvent) -> bool {
    app.clear_status_message();

    let ctx = ActionContext::new(app.stage(), app.sidebar_focused());
    let Some(action) = determine_action(key, ctx) else {
        return false;
    };

    execute_action(app, action)
}

/// Execute an action. Returns true on quit.
pub fn execute_action(app: &mut WizardApp, action: UiAction) -> bool {
    match action {
        UiAction::Quit => return true,

        UiAction::Wizard(wizard_action) => app.apply(wizard_action),

        UiAction::ToggleSidebarFocus => app.toggle_focus(),
        UiAction::SidebarUp => app.move_sidebar_cursor(-1),
        UiAction::SidebarDown => app.move_sidebar_cursor(1),
        UiAction::SidebarSelect => {
            let stage = Stage::from_index(app.sidebar_cursor());
            app.apply(WizardAction::JumpTo(stage));
            app.toggle_focus();
        }

        UiAction::CopyEmail => {
            let message = copy_to_clipboard(EMAIL_LINK, "email link");
            app.set_status_message(message);
        }

        UiAction::Resume => {
            app.refresh_resume();
            let message = resume_action(app.resume(), app.download_dir());
            app.set_status_message(message);
        }
    }

    false
}

/// Save the resume when it exists, otherwise hand out the profile link.
fn resume_action(resume: &ResumeAsset, download_dir: &std::path::Path) -> String {
    match resume {
        ResumeAsset::Available { .. } => match resume.save_to(download_dir) {
            Ok(Some(path)) => format!("Saved resume to {}", path.display()),
            Ok(None) => "Resume is no longer available".to_string(),
            Err(e) => {
                tracing::warn!("{}", e);
                format!("Could not save resume: {}", e)
            }
        },
        ResumeAsset::Unavailable { fallback_url } => {
            copy_to_clipboard(fallback_url, "profile link")
        }
    }
}
