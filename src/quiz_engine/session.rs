//! The quiz session state machine.
//!
//! ## States
//!
//! | State        | Leaves on                                   |
//! |--------------|---------------------------------------------|
//! | `Welcome`    | `StartClassic`, `StartTimed`, `ChooseParty` |
//! | `PartySetup` | `StartParty`, `Back`                        |
//! | `TurnStart`  | `ContinueTurn`                              |
//! | `Playing`    | answers, `Advance`, countdown expiry        |
//! | `Results`    | `PlayAgain`                                 |
//!
//! `PlayAgain` is accepted from every state and always lands on `Welcome`.
//!
//! The session never runs a clock itself. Transitions that start or stop the
//! countdown say so through the returned [`TimerCommand`], and the clock owner
//! (see [`crate::quiz_engine::ticker`]) feeds ticks back through
//! [`Session::tick_epoch`].

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::quiz_engine::{
    catalog::Catalog,
    error::SessionError,
    generator::{generate_questions, make_rng},
    models::{
        AnswerRecord, GameMode, GameState, Player, Question, SessionConfig, TimerDuration,
    },
    setup::PartyConfig,
    summary::{self, Outcome},
};

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    StartClassic(TimerDuration),
    StartTimed(TimerDuration),
    ChooseParty,
    StartParty(PartyConfig),
    Back,
    ContinueTurn,
    SubmitAnswer(String),
    Advance,
    PlayAgain,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::StartClassic(_) => "start-classic",
            SessionEvent::StartTimed(_)   => "start-timed",
            SessionEvent::ChooseParty     => "choose-party",
            SessionEvent::StartParty(_)   => "start-party",
            SessionEvent::Back            => "back",
            SessionEvent::ContinueTurn    => "continue-turn",
            SessionEvent::SubmitAnswer(_) => "submit-answer",
            SessionEvent::Advance         => "advance",
            SessionEvent::PlayAgain       => "play-again",
        }
    }
}

/// What the clock owner must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel any running countdown, then start one tagged with `epoch`.
    Arm { epoch: u64 },
    Cancel,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    /// The countdown hit zero and the turn/session ended on this tick.
    Expired,
    /// The tick belongs to a countdown that is no longer armed.
    Stale,
}

#[derive(Debug, Clone)]
struct Countdown {
    duration: TimerDuration,
    remaining: u32,
    epoch: u64,
}

#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    config: SessionConfig,
    rng: StdRng,
    state: GameState,
    mode: GameMode,
    questions: Vec<Question>,
    current_question: usize,
    /// Classic only: the current question already has its one answer.
    answered_current: bool,
    answers: Vec<AnswerRecord>,
    players: Vec<Player>,
    current_player: usize,
    countdown: Countdown,
}

impl Session {
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        let rng = make_rng(config.rng_seed);
        Session {
            catalog,
            config,
            rng,
            state: GameState::Welcome,
            mode: GameMode::Classic,
            questions: Vec::new(),
            current_question: 0,
            answered_current: false,
            answers: Vec::new(),
            players: Vec::new(),
            current_player: 0,
            countdown: Countdown {
                duration: TimerDuration::DEFAULT,
                remaining: TimerDuration::DEFAULT.secs(),
                epoch: 0,
            },
        }
    }

    /// Apply one event. On error the session is left exactly as it was.
    pub fn handle(&mut self, event: SessionEvent) -> Result<TimerCommand, SessionError> {
        use SessionEvent as E;

        match (self.state, event) {
            (_, E::PlayAgain) => Ok(self.reset()),
            (GameState::Welcome, E::StartClassic(d)) => Ok(self.start_solo(GameMode::Classic, d)),
            (GameState::Welcome, E::StartTimed(d)) => Ok(self.start_solo(GameMode::Timed, d)),
            (GameState::Welcome, E::ChooseParty) => {
                self.state = GameState::PartySetup;
                Ok(TimerCommand::Keep)
            }
            (GameState::PartySetup, E::StartParty(cfg)) => Ok(self.start_party(cfg)),
            (GameState::PartySetup, E::Back) => {
                self.state = GameState::Welcome;
                Ok(TimerCommand::Keep)
            }
            (GameState::TurnStart, E::ContinueTurn) => Ok(self.begin_turn()),
            (GameState::Playing, E::SubmitAnswer(option)) => self.submit(option),
            (GameState::Playing, E::Advance) if self.mode == GameMode::Classic => self.advance(),
            (state, event) => Err(SessionError::InvalidTransition { state, event: event.name() }),
        }
    }

    /// Tick the live countdown, whatever epoch it is on.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_epoch(self.countdown.epoch)
    }

    /// Tick on behalf of the countdown armed as `epoch`.
    pub fn tick_epoch(&mut self, epoch: u64) -> TickOutcome {
        if !self.timer_active() || epoch != self.countdown.epoch {
            return TickOutcome::Stale;
        }

        self.countdown.remaining = self.countdown.remaining.saturating_sub(1);
        if self.countdown.remaining > 0 {
            return TickOutcome::Running { remaining: self.countdown.remaining };
        }

        info!(mode = %self.mode, player = self.current_player, "countdown expired");
        self.end_turn();
        TickOutcome::Expired
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    fn start_solo(&mut self, mode: GameMode, duration: TimerDuration) -> TimerCommand {
        let count = match mode {
            GameMode::Classic => self.config.classic_question_count,
            GameMode::Timed | GameMode::Party => self.catalog.len(),
        };
        self.questions = generate_questions(&self.catalog, count, &mut self.rng);
        self.mode = mode;
        self.countdown.duration = duration;
        self.countdown.remaining = duration.secs();
        self.current_question = 0;
        self.answered_current = false;
        self.answers.clear();
        self.players.clear();
        self.current_player = 0;
        info!(%mode, %duration, questions = self.questions.len(), "game started");

        if self.questions.is_empty() {
            self.state = GameState::Results;
            return TimerCommand::Cancel;
        }
        self.state = GameState::Playing;

        match mode {
            GameMode::Timed => self.arm(),
            GameMode::Classic | GameMode::Party => TimerCommand::Cancel,
        }
    }

    fn start_party(&mut self, cfg: PartyConfig) -> TimerCommand {
        self.questions = generate_questions(&self.catalog, self.catalog.len(), &mut self.rng);
        self.mode = GameMode::Party;
        self.countdown.duration = cfg.duration();
        self.countdown.remaining = cfg.duration().secs();
        self.players = cfg
            .names()
            .iter()
            .enumerate()
            .map(|(id, name)| Player { id, name: name.clone(), score: 0 })
            .collect();
        self.current_player = 0;
        self.current_question = 0;
        self.answered_current = false;
        self.answers.clear();
        self.state = GameState::TurnStart;
        info!(players = self.players.len(), duration = %cfg.duration(), "party started");
        TimerCommand::Keep
    }

    fn begin_turn(&mut self) -> TimerCommand {
        if self.current_question >= self.questions.len() {
            debug!("question set exhausted, dealing a fresh one");
            self.questions = generate_questions(&self.catalog, self.catalog.len(), &mut self.rng);
            self.current_question = 0;
        }
        self.state = GameState::Playing;
        debug!(player = self.current_player, "turn started");
        self.arm()
    }

    fn submit(&mut self, option: String) -> Result<TimerCommand, SessionError> {
        if self.mode == GameMode::Classic && self.answered_current {
            debug!(%option, "question already answered, ignoring");
            return Ok(TimerCommand::Keep);
        }

        let question = self
            .questions
            .get(self.current_question)
            .ok_or(SessionError::NoActiveQuestion)?;
        if !question.has_option(&option) {
            return Err(SessionError::UnknownOption(option));
        }
        let is_correct = question.is_correct(&option);
        debug!(%option, is_correct, index = self.current_question, "answer submitted");

        match self.mode {
            GameMode::Classic => {
                let question = question.clone();
                self.answers.push(AnswerRecord { question, user_answer: Some(option), is_correct });
                self.answered_current = true;
                Ok(TimerCommand::Keep)
            }
            GameMode::Timed => {
                let question = question.clone();
                self.answers.push(AnswerRecord { question, user_answer: Some(option), is_correct });
                Ok(self.next_question())
            }
            GameMode::Party => {
                if is_correct {
                    if let Some(player) = self.players.get_mut(self.current_player) {
                        player.score += 1;
                    }
                }
                Ok(self.next_question())
            }
        }
    }

    fn advance(&mut self) -> Result<TimerCommand, SessionError> {
        if self.questions.get(self.current_question).is_none() {
            return Err(SessionError::NoActiveQuestion);
        }
        if !self.answered_current {
            return Err(SessionError::QuestionUnanswered);
        }
        Ok(self.next_question())
    }

    fn next_question(&mut self) -> TimerCommand {
        let next = self.current_question + 1;

        if next >= self.questions.len() {
            debug!(mode = %self.mode, "questions exhausted");
            return self.end_turn();
        }
        if self.mode == GameMode::Classic && next >= self.config.classic_question_count {
            self.state = GameState::Results;
            return TimerCommand::Cancel;
        }

        self.current_question = next;
        self.answered_current = false;
        TimerCommand::Keep
    }

    /// Close the running turn: party rotates to the next player, solo modes
    /// finish.
    fn end_turn(&mut self) -> TimerCommand {
        self.countdown.epoch += 1;

        match self.mode {
            GameMode::Party => {
                // Skip the flag left on screen so the next player starts fresh.
                self.current_question += 1;
                let next_player = self.current_player + 1;
                if next_player < self.players.len() {
                    self.current_player = next_player;
                    self.state = GameState::TurnStart;
                } else {
                    self.state = GameState::Results;
                }
            }
            GameMode::Classic | GameMode::Timed => self.state = GameState::Results,
        }
        info!(state = %self.state, "turn ended");
        TimerCommand::Cancel
    }

    fn reset(&mut self) -> TimerCommand {
        self.countdown.epoch += 1;
        self.countdown.remaining = self.countdown.duration.secs();
        self.state = GameState::Welcome;
        self.mode = GameMode::Classic;
        self.questions.clear();
        self.current_question = 0;
        self.answered_current = false;
        self.answers.clear();
        self.players.clear();
        self.current_player = 0;
        info!("session reset");
        TimerCommand::Cancel
    }

    fn arm(&mut self) -> TimerCommand {
        self.countdown.epoch += 1;
        self.countdown.remaining = self.countdown.duration.secs();
        TimerCommand::Arm { epoch: self.countdown.epoch }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question on screen; only while playing.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            GameState::Playing => self.questions.get(self.current_question),
            _ => None,
        }
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Classic only: whether the question on screen has been answered.
    pub fn is_answered(&self) -> bool {
        self.answered_current
    }

    /// The player whose turn it is; party mode only.
    pub fn current_player(&self) -> Option<&Player> {
        match (self.mode, self.state) {
            (GameMode::Party, GameState::TurnStart | GameState::Playing) => {
                self.players.get(self.current_player)
            }
            _ => None,
        }
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining
    }

    pub fn duration(&self) -> TimerDuration {
        self.countdown.duration
    }

    pub fn countdown_epoch(&self) -> u64 {
        self.countdown.epoch
    }

    /// True iff the countdown should be ticking right now.
    pub fn timer_active(&self) -> bool {
        self.state == GameState::Playing && self.mode.is_timed()
    }

    /// Correct answers in the log; classic and timed only.
    pub fn score(&self) -> usize {
        summary::score(&self.answers)
    }

    /// Final summary, available once the session reaches `Results`.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.state != GameState::Results {
            return None;
        }
        Some(match self.mode {
            GameMode::Classic | GameMode::Timed => Outcome::Solo(summary::solo_outcome(&self.answers)),
            GameMode::Party => Outcome::Party(summary::party_outcome(&self.players)),
        })
    }
}
