//! Application state for the interactive wizard.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::animation::Celebration;
use super::layout::render_adaptive;
use super::navigation;
use crate::config::AppConfig;
use crate::model::{Prediction, ScoringModel, Verdict};
use crate::observability::set_stage;
use crate::resume::ResumeAsset;
use crate::wizard::{Session, Stage, WizardAction};

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Screen,
    Sidebar,
}

/// Wizard state shared by the key handler and the renderer.
pub struct WizardApp<'m> {
    session: Session,
    model: &'m ScoringModel,
    resume_dir: PathBuf,
    download_dir: PathBuf,
    resume: ResumeAsset,
    focus: Focus,
    sidebar_cursor: usize,
    status_message: Option<String>,
    celebration: Celebration,
    animations_enabled: bool,
    dirty: bool,
}

impl<'m> WizardApp<'m> {
    pub fn new(model: &'m ScoringModel, session: Session, config: &AppConfig) -> Self {
        let resume_dir = config.resume.directory.clone();
        let resume = ResumeAsset::probe(&resume_dir);
        set_stage(session.stage);

        Self {
            session,
            model,
            download_dir: config.resume.resolved_download_dir(),
            resume_dir,
            resume,
            focus: Focus::Screen,
            sidebar_cursor: session.stage.index(),
            status_message: None,
            celebration: Celebration::default(),
            animations_enabled: config.ui.animations,
            dirty: true,
        }
    }

    /// Handle a key and return true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.dirty = true;
        navigation::handle_key(self, key)
    }

    /// Apply a wizard action and run the effects of entering a stage.
    pub fn apply(&mut self, action: WizardAction) {
        let previous = self.session.stage;
        self.session = self.session.apply(action);
        self.sidebar_cursor = self.session.stage.index();
        set_stage(self.session.stage);

        if self.session.stage != previous {
            tracing::debug!(from = %previous, to = %self.session.stage, "stage changed");
            self.on_enter_stage();
        }
    }

    fn on_enter_stage(&mut self) {
        if self.session.stage != Stage::Results {
            self.celebration.stop();
            return;
        }

        self.refresh_resume();
        let prediction = self.prediction();
        tracing::info!(
            probability = prediction.probability,
            verdict = ?prediction.verdict(),
            "scored questionnaire"
        );
        if prediction.verdict() == Verdict::Match && self.animations_enabled {
            self.celebration.start();
        }
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        if self.celebration.is_active() {
            self.celebration.tick();
            self.dirty = true;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        if self.session.stage == Stage::Results {
            self.refresh_resume();
        }
        render_adaptive(frame, self);
    }

    /// Re-check the resume file on disk.
    pub fn refresh_resume(&mut self) {
        self.resume = ResumeAsset::probe(&self.resume_dir);
    }

    /// Whether anything changed since the last draw.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn model(&self) -> &ScoringModel {
        self.model
    }

    /// Score the current ratings.
    pub fn prediction(&self) -> Prediction {
        self.model.predict(&self.session.ratings)
    }

    pub fn resume(&self) -> &ResumeAsset {
        &self.resume
    }

    pub fn download_dir(&self) -> &std::path::Path {
        &self.download_dir
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Screen => Focus::Sidebar,
            Focus::Sidebar => Focus::Screen,
        };
        self.sidebar_cursor = self.session.stage.index();
    }

    pub fn sidebar_focused(&self) -> bool {
        self.focus == Focus::Sidebar
    }

    pub fn sidebar_cursor(&self) -> usize {
        self.sidebar_cursor
    }

    /// Move the sidebar cursor, clamped to the stage list.
    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        let last = Stage::ALL.len() - 1;
        self.sidebar_cursor = self.sidebar_cursor.saturating_add_signed(delta).min(last);
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Topic;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.resume.directory = dir.path().to_path_buf();
        config.resume.download_dir = Some(dir.path().join("downloads"));
        config
    }

    #[test]
    fn apply_keeps_sidebar_in_sync() {
        let dir = TempDir::new().unwrap();
        let model = ScoringModel::from_parts([1.0; 4], -10.0);
        let mut app = WizardApp::new(&model, Session::new(), &config_in(&dir));

        app.apply(WizardAction::Next);
        app.apply(WizardAction::Next);
        assert_eq!(app.stage(), Stage::Python);
        assert_eq!(app.sidebar_cursor(), Stage::Python.index());

        app.apply(WizardAction::JumpTo(Stage::Vibe));
        assert_eq!(app.sidebar_cursor(), Stage::Vibe.index());
    }

    #[test]
    fn match_starts_celebration() {
        let dir = TempDir::new().unwrap();
        let model = ScoringModel::from_parts([1.0; 4], -10.0);
        let mut app = WizardApp::new(&model, Session::new(), &config_in(&dir));

        app.apply(WizardAction::SetRating {
            topic: Topic::DataWrangling,
            value: 10,
        });
        app.apply(WizardAction::JumpTo(Stage::Results));
        assert!(app.celebration().is_active());

        app.apply(WizardAction::Restart);
        assert!(!app.celebration().is_active());
    }

    #[test]
    fn outlier_has_no_celebration() {
        let dir = TempDir::new().unwrap();
        let model = ScoringModel::from_parts([0.0; 4], -10.0);
        let mut app = WizardApp::new(&model, Session::new(), &config_in(&dir));

        app.apply(WizardAction::JumpTo(Stage::Results));
        assert!(!app.celebration().is_active());
    }

    #[test]
    fn sidebar_cursor_is_clamped() {
        let dir = TempDir::new().unwrap();
        let model = ScoringModel::from_parts([0.0; 4], 0.0);
        let mut app = WizardApp::new(&model, Session::new(), &config_in(&dir));

        app.move_sidebar_cursor(-3);
        assert_eq!(app.sidebar_cursor(), 0);
        app.move_sidebar_cursor(42);
        assert_eq!(app.sidebar_cursor(), Stage::ALL.len() - 1);
    }

    #[test]
    fn dirty_flag_is_consumed() {
        let dir = TempDir::new().unwrap();
        let model = ScoringModel::from_parts([0.0; 4], 0.0);
        let mut app = WizardApp::new(&model, Session::new(), &config_in(&dir));

        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        app.mark_dirty();
        assert!(app.take_dirty());
    }
}
