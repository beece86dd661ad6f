//! Terminal user interface for the questionnaire.
//!
//! One screen per [`Stage`](crate::wizard::Stage), a "Navigation" sidebar
//! that jumps between them, and a progress footer.
//!
//! # Usage
//!
//! ```rust,no_run
//! use candidate_fit::config::AppConfig;
//! use candidate_fit::model::ScoringModel;
//! use candidate_fit::tui::WizardExplorer;
//! use candidate_fit::wizard::Session;
//!
//! let config = AppConfig::default();
//! let model = ScoringModel::train(&config.model)?;
//! let mut explorer = WizardExplorer::new(&model, Session::new(), &config)?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod animation;
pub mod app;
pub mod clipboard;
pub mod layout;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::AppConfig;
use crate::error::FitError;
use crate::model::ScoringModel;
use crate::observability::set_tui_active;
use crate::wizard::Session;
use app::WizardApp;

/// Owns the terminal for the lifetime of the wizard.
pub struct WizardExplorer<'m> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: WizardApp<'m>,
    tick: Duration,
}

impl<'m> WizardExplorer<'m> {
    /// Enter raw mode and the alternate screen. If either step after raw
    /// mode fails, the terminal is restored before the error is returned.
    pub fn new(model: &'m ScoringModel, session: Session, config: &AppConfig) -> Result<Self> {
        enable_raw_mode().map_err(|e| FitError::terminal("failed to enable raw mode", e))?;
        set_tui_active(true);

        let terminal = setup_or_restore(enter_terminal, restore_terminal)?;

        Ok(Self {
            terminal,
            app: WizardApp::new(model, session, config),
            tick: Duration::from_millis(config.ui.tick_ms),
        })
    }

    /// Run the event loop until the visitor quits.
    pub fn run(&mut self) -> Result<Session> {
        loop {
            if self.app.take_dirty() {
                self.terminal.draw(|f| self.app.render(f))?;
            }

            if !event::poll(self.tick)? {
                self.app.tick();
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(_, _) => self.app.mark_dirty(),
                _ => {}
            }
        }

        self.cleanup()?;
        Ok(self.app.session())
    }

    /// Restore the terminal.
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for WizardExplorer<'_> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn enter_terminal() -> std::result::Result<Terminal<CrosstermBackend<io::Stdout>>, FitError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FitError::terminal("failed to enter alternate screen", e))?;
    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| FitError::terminal("failed to create terminal", e))
}

/// Best-effort undo of a half-finished setup.
fn restore_terminal() {
    set_tui_active(false);
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `setup`, calling `restore` before handing back its error.
fn setup_or_restore<T, E>(
    setup: impl FnOnce() -> std::result::Result<T, E>,
    restore: impl FnOnce(),
) -> std::result::Result<T, E> {
    setup().inspect_err(|_| restore())
}
