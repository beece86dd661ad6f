//! Observability: logging setup, crash context and the panic hook.
//!
//! ```ignore
//! use candidate_fit::observability::{install_panic_hook, set_phase, AppPhase};
//!
//! fn main() {
//!     install_panic_hook();
//!     let _phase = set_phase(AppPhase::TrainingModel);
//!     // a panic here reports the training phase
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{get_current_context, set_phase, set_stage, AppPhase, PhaseGuard, WizardContext};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{bootstrap_subscriber, init_tracing, is_tui_active, set_tui_active, LOG_ENV_VAR};
