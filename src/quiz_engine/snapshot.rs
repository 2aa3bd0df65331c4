//! Read-only view of a session handed to the presentation layer after every
//! transition.

use serde::Serialize;

use crate::quiz_engine::{
    models::{AnswerRecord, GameMode, GameState, Player},
    session::Session,
    summary::Outcome,
};

/// The question as the player sees it: no correct answer attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub flag_url: String,
    pub options: [String; 4],
    /// 1-based.
    pub number: usize,
    /// Classic: the game length, capped by the questions generated. Timed: answers so far plus this one.
    /// Party: not shown.
    pub total: Option<usize>,
}

/// Classic-mode reveal shown after the one allowed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub selected: Option<String>,
    pub is_correct: bool,
    pub correct_answer: String,
    pub fact: String,
    /// The next advance ends the game.
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub mode: GameMode,
    pub question: Option<QuestionView>,
    pub feedback: Option<AnswerFeedback>,
    pub current_player: Option<Player>,
    pub time_left: u32,
    pub timer_duration: u32,
    pub timer_active: bool,
    pub score: usize,
    pub answers: Vec<AnswerRecord>,
    pub players: Vec<Player>,
    pub outcome: Option<Outcome>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        let mode = session.mode();
        let index = session.current_question_index();
        let classic_total = session
            .config()
            .classic_question_count
            .min(session.questions().len());

        let question = session.current_question().map(|q| QuestionView {
            flag_url: q.flag_url.clone(),
            options: q.options.clone(),
            number: index + 1,
            total: match mode {
                GameMode::Classic => Some(classic_total),
                GameMode::Timed   => Some(session.answers().len() + 1),
                GameMode::Party   => None,
            },
        });

        let feedback = match (mode, session.current_question()) {
            (GameMode::Classic, Some(q)) if session.is_answered() => {
                session.answers().last().map(|r| AnswerFeedback {
                    selected: r.user_answer.clone(),
                    is_correct: r.is_correct,
                    correct_answer: q.correct_answer.name.clone(),
                    fact: q.correct_answer.fact.clone(),
                    is_last: index + 1 >= classic_total,
                })
            }
            _ => None,
        };

        SessionSnapshot {
            state: session.state(),
            mode,
            question,
            feedback,
            current_player: session.current_player().cloned(),
            time_left: session.time_left(),
            timer_duration: session.duration().secs(),
            timer_active: session.timer_active(),
            score: session.score(),
            answers: session.answers().to_vec(),
            players: session.players().to_vec(),
            outcome: session.outcome(),
        }
    }

    /// JSON for a web or desktop front end.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
