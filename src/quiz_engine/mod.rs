//! Core quiz engine: catalog, question generation and the session controller.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: countries, questions, players, modes, config |
//! | `error`     | Setup, catalog and session error enums |
//! | `catalog`   | Validated country list, built-in data, JSON loading |
//! | `deck`      | Fisher-Yates shuffled country deck, dealt without replacement |
//! | `generator` | `generate_questions()`: four-option questions from the catalog |
//! | `setup`     | Party roster editing and `PartyConfig` validation |
//! | `session`   | The five-state session controller |
//! | `summary`   | Results screen: verdict tiers, party standings |
//! | `snapshot`  | Read-only session view for the presentation layer |
//! | `ticker`    | One-second tokio countdown task |
//! | `driver`    | Shared session + ticker behind a single async API |

pub mod catalog;
pub mod deck;
pub mod driver;
pub mod error;
pub mod generator;
pub mod models;
pub mod session;
pub mod setup;
pub mod snapshot;
pub mod summary;
pub mod ticker;

// Re-export the public API surface so callers can use
// `quiz_engine::Session` without reaching into sub-modules.
pub use catalog::Catalog;
pub use driver::{SessionDriver, SharedSession};
pub use error::{CatalogError, SessionError, SetupError};
pub use generator::generate_questions;
pub use models::{
    AnswerRecord, Country, GameMode, GameState, Player, Question, SessionConfig,
    TimerDuration, CLASSIC_QUESTION_COUNT, DURATION_OPTIONS,
};
pub use session::{Session, SessionEvent, TickOutcome, TimerCommand};
pub use setup::{PartyConfig, PartySetup};
pub use snapshot::{AnswerFeedback, QuestionView, SessionSnapshot};
pub use summary::{Outcome, PartyOutcome, SoloOutcome, Verdict};
pub use ticker::Ticker;
