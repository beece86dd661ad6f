//! Questionnaire state machine.
//!
//! ```text
//!   Introduction ─► SQL ─► Python ─► Strategy ─► Vibe ─► Results
//!        ▲           │                                     │
//!        └── Back ───┘                                     │
//!        └──────────────────── Start Over ─────────────────┘
//!
//!   Sidebar: any stage ─► any stage
//! ```

pub mod ratings;
pub mod session;
pub mod stage;

pub use ratings::{Rating, Ratings, Topic};
pub use session::{Session, WizardAction};
pub use stage::Stage;
