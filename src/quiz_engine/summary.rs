//! End-of-game summaries shown on the results screen.

use std::fmt;
use serde::Serialize;

use crate::quiz_engine::models::{AnswerRecord, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Perfect,
    Excellent,
    Good,
    KeepTrying,
}

impl Verdict {
    pub fn from_percentage(pct: u32) -> Self {
        match pct {
            100..=u32::MAX => Verdict::Perfect,
            70..=99        => Verdict::Excellent,
            40..=69        => Verdict::Good,
            _              => Verdict::KeepTrying,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Perfect    => "Perfect Score! You're a true vexillologist!",
            Verdict::Excellent  => "Excellent! You really know your flags.",
            Verdict::Good       => "Good effort! A little more practice and you'll be an expert.",
            Verdict::KeepTrying => "Keep trying! Every quiz is a learning opportunity.",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoloOutcome {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyOutcome {
    /// Highest score first; ties keep roster order.
    pub standings: Vec<Player>,
    pub is_tie: bool,
}

impl PartyOutcome {
    pub fn winner(&self) -> Option<&Player> {
        self.standings.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Solo(SoloOutcome),
    Party(PartyOutcome),
}

/// Correct answers in the log.
pub fn score(records: &[AnswerRecord]) -> usize {
    records.iter().filter(|r| r.is_correct).count()
}

pub fn solo_outcome(records: &[AnswerRecord]) -> SoloOutcome {
    let score = score(records);
    let total = records.len();
    let percentage = if total == 0 {
        0
    } else {
        ((score as f64 / total as f64) * 100.0).round() as u32
    };
    SoloOutcome { score, total, percentage, verdict: Verdict::from_percentage(percentage) }
}

pub fn party_outcome(players: &[Player]) -> PartyOutcome {
    let mut standings = players.to_vec();
    // sort_by is stable
    standings.sort_by(|a, b| b.score.cmp(&a.score));
    let is_tie = matches!(standings.as_slice(), [a, b, ..] if a.score == b.score);
    PartyOutcome { standings, is_tie }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{Country, Question};

    fn record(is_correct: bool) -> AnswerRecord {
        let c = Country::new("Japan", "jp", "");
        AnswerRecord {
            question: Question {
                correct_answer: c.clone(),
                options: ["Japan".into(), "Chile".into(), "Kenya".into(), "Spain".into()],
                flag_url: c.flag_url(),
            },
            user_answer: Some(if is_correct { "Japan" } else { "Chile" }.to_string()),
            is_correct,
        }
    }

    fn player(id: usize, name: &str, score: u32) -> Player {
        Player { id, name: name.to_string(), score }
    }

    #[test]
    fn verdict_tiers() {
        assert_eq!(Verdict::from_percentage(100), Verdict::Perfect);
        assert_eq!(Verdict::from_percentage(70), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(69), Verdict::Good);
        assert_eq!(Verdict::from_percentage(40), Verdict::Good);
        assert_eq!(Verdict::from_percentage(39), Verdict::KeepTrying);
    }

    #[test]
    fn solo_outcome_rounds_percentage() {
        let records = [record(true), record(true), record(false)];
        let out = solo_outcome(&records);
        assert_eq!((out.score, out.total, out.percentage), (2, 3, 67));
        assert_eq!(out.verdict, Verdict::Good);
    }

    #[test]
    fn empty_log_scores_zero() {
        let out = solo_outcome(&[]);
        assert_eq!((out.score, out.total, out.percentage), (0, 0, 0));
        assert_eq!(out.verdict, Verdict::KeepTrying);
    }

    #[test]
    fn party_standings_are_stable_on_ties() {
        let out = party_outcome(&[player(0, "Ann", 3), player(1, "Bob", 5), player(2, "Cleo", 5)]);
        let names: Vec<_> = out.standings.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Cleo", "Ann"]);
        assert!(out.is_tie);
        assert_eq!(out.winner().map(|p| p.id), Some(1));

        let out = party_outcome(&[player(0, "Ann", 4), player(1, "Bob", 1)]);
        assert!(!out.is_tie);
        assert_eq!(out.winner().map(|p| p.name.as_str()), Some("Ann"));
    }
}
