//! # flag_quiz
//!
//! The game engine behind a "guess the flag" trivia quiz.
//!
//! Players identify countries from their flags in one of three modes:
//!
//! - **Classic**: ten questions, one answer each, with the correct country and
//!   a fun fact revealed before moving on.
//! - **Timed**: answer as many flags as possible before the countdown runs out.
//! - **Party**: 2-4 players on one device take turns against the clock; each
//!   correct answer is a point.
//!
//! ## How it works
//!
//! 1. Build a [`Session`] (or a [`SessionDriver`] when you want the countdown
//!    run for you) from a [`Catalog`] and a [`SessionConfig`].
//! 2. Forward user intents as [`SessionEvent`]s. Each event either moves the
//!    state machine or is rejected with a [`SessionError`], leaving the
//!    session untouched.
//! 3. Render the [`SessionSnapshot`] you get back. Once the state is
//!    `Results`, `snapshot.outcome` carries the score or the party standings.
//!
//! ## Key features
//!
//! - **Deterministic**: `SessionConfig::seeded(u64)` reproduces the exact same
//!   question sets, which is what the tests rely on.
//! - **No double ticks**: every countdown arming gets a fresh epoch and the
//!   ticker only ever drives the epoch it was armed for.
//!
//! ## Quick start
//!
//! ```rust
//! use flag_quiz::{Catalog, GameState, Session, SessionConfig, SessionEvent, TimerDuration};
//!
//! let mut session = Session::new(Catalog::builtin(), SessionConfig::seeded(42));
//! session.handle(SessionEvent::StartClassic(TimerDuration::DEFAULT)).unwrap();
//!
//! let answer = session.current_question().unwrap().options[0].clone();
//! session.handle(SessionEvent::SubmitAnswer(answer)).unwrap();
//! session.handle(SessionEvent::Advance).unwrap();
//!
//! assert_eq!(session.state(), GameState::Playing);
//! assert_eq!(session.answers().len(), 1);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `flag_quiz::Session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_questions, AnswerFeedback, AnswerRecord, Catalog, CatalogError, Country,
    GameMode, GameState, Outcome, PartyConfig, PartyOutcome, PartySetup, Player, Question,
    QuestionView, Session, SessionConfig, SessionDriver, SessionError, SessionEvent,
    SessionSnapshot, SetupError, SharedSession, SoloOutcome, TickOutcome, Ticker,
    TimerCommand, TimerDuration, Verdict, CLASSIC_QUESTION_COUNT, DURATION_OPTIONS,
};
