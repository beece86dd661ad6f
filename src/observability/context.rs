//! Thread-local wizard context for crash reports.
//!
//! The TUI records the stage it is showing so a panic report can say where
//! the visitor was.

use std::cell::RefCell;

use crate::wizard::Stage;

thread_local! {
    static CURRENT_CONTEXT: RefCell<WizardContext> = const { RefCell::new(WizardContext::new()) };
}

/// Snapshot of what the app was doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardContext {
    pub stage: Option<Stage>,
    pub phase: Option<AppPhase>,
}

impl WizardContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: None,
            phase: None,
        }
    }
}

/// Coarse phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    LoadingConfig,
    TrainingModel,
    Interactive,
    Scoring,
}

impl std::fmt::Display for AppPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingConfig => write!(f, "loading_config"),
            Self::TrainingModel => write!(f, "training_model"),
            Self::Interactive => write!(f, "interactive"),
            Self::Scoring => write!(f, "scoring"),
        }
    }
}

/// Restores the previous phase when dropped.
#[must_use = "the phase is cleared when the guard is dropped"]
pub struct PhaseGuard {
    previous: Option<AppPhase>,
}

impl Drop for PhaseGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().phase = previous);
    }
}

pub fn set_phase(phase: AppPhase) -> PhaseGuard {
    let previous = CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().phase.replace(phase));
    PhaseGuard { previous }
}

pub fn set_stage(stage: Stage) {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().stage = Some(stage));
}

pub fn get_current_context() -> WizardContext {
    CURRENT_CONTEXT.with(|ctx| *ctx.borrow())
}
