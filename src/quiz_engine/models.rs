use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::SetupError;

/// Questions in a classic game, independent of how many were generated.
pub const CLASSIC_QUESTION_COUNT: usize = 10;

/// Countdown lengths offered by the mode pickers, in seconds.
pub const DURATION_OPTIONS: [u32; 3] = [30, 60, 90];

/// Flag images are served at a fixed width of 320px.
pub const FLAG_URL_BASE: &str = "https://flagcdn.com/w320";

// ---------------------------------------------------------------------------
// Catalog primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2, lower case.
    pub iso_code: String,
    pub fact: String,
}

impl Country {
    pub fn new(name: &str, iso_code: &str, fact: &str) -> Self {
        Country {
            name: name.to_string(),
            iso_code: iso_code.to_string(),
            fact: fact.to_string(),
        }
    }

    pub fn flag_url(&self) -> String {
        format!("{}/{}.png", FLAG_URL_BASE, self.iso_code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.iso_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub correct_answer: Country,
    /// Three distractors and the correct name, in random order.
    pub options: [String; 4],
    pub flag_url: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer.name
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Slot of the correct name within `options`.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.correct_answer.name)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: Question,
    /// `None` means the question was left unanswered.
    pub user_answer: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub score: u32,
}

// ---------------------------------------------------------------------------
// Session metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Classic,
    Timed,
    Party,
}

impl GameMode {
    /// Modes whose `Playing` state runs the countdown.
    pub fn is_timed(self) -> bool {
        matches!(self, GameMode::Timed | GameMode::Party)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Classic => write!(f, "Classic"),
            GameMode::Timed   => write!(f, "Timed"),
            GameMode::Party   => write!(f, "Party"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Welcome,
    PartySetup,
    TurnStart,
    Playing,
    Results,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::Welcome    => "welcome",
            GameState::PartySetup => "party-setup",
            GameState::TurnStart  => "turn-start",
            GameState::Playing    => "playing",
            GameState::Results    => "results",
        };
        write!(f, "{}", s)
    }
}

/// A countdown length in whole seconds; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimerDuration(u32);

impl TimerDuration {
    pub const DEFAULT: TimerDuration = TimerDuration(60);

    pub fn new(secs: u32) -> Result<Self, SetupError> {
        if secs == 0 {
            return Err(SetupError::InvalidDuration(secs));
        }
        Ok(TimerDuration(secs))
    }

    /// The durations the mode pickers offer.
    pub fn options() -> [TimerDuration; 3] {
        DURATION_OPTIONS.map(TimerDuration)
    }

    pub fn secs(self) -> u32 {
        self.0
    }
}

impl Default for TimerDuration {
    fn default() -> Self {
        TimerDuration::DEFAULT
    }
}

impl TryFrom<u32> for TimerDuration {
    type Error = SetupError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        TimerDuration::new(secs)
    }
}

impl From<TimerDuration> for u32 {
    fn from(d: TimerDuration) -> u32 {
        d.0
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Session tunables. Everything defaults to the values the game ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub classic_question_count: usize,
    /// Fixed seed for reproducible question sets; entropy when `None`.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            classic_question_count: CLASSIC_QUESTION_COUNT,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn seeded(seed: u64) -> Self {
        SessionConfig { rng_seed: Some(seed), ..Default::default() }
    }
}
