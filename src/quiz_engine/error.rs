use thiserror::Error;

use crate::quiz_engine::models::GameState;

/// Rejections raised while configuring a game, before anything reaches the
/// session controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("party mode needs at least {min} players, got {count}")]
    TooFewPlayers { count: usize, min: usize },
    #[error("party mode allows at most {max} players, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("player name {0:?} is already taken")]
    DuplicateName(String),
    #[error("no player named {0:?} on the roster")]
    UnknownPlayer(String),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("timer duration must be positive, got {0}")]
    InvalidDuration(u32),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog needs at least {min} countries, got {count}")]
    TooSmall { count: usize, min: usize },
    #[error("duplicate country code {0:?}")]
    DuplicateCode(String),
    #[error("duplicate country name {0:?}")]
    DuplicateName(String),
    #[error("country at position {0} has an empty name or code")]
    EmptyField(usize),
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Integration errors: an event that the current state cannot accept.
/// The session is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("event {event} is not valid in state {state}")]
    InvalidTransition { state: GameState, event: &'static str },
    #[error("no question is active")]
    NoActiveQuestion,
    #[error("the current question has not been answered yet")]
    QuestionUnanswered,
    #[error("{0:?} is not one of the offered options")]
    UnknownOption(String),
}
