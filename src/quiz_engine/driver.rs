//! Glue between the presentation layer, the session and the countdown.
//!
//! The session lives behind one async mutex shared with the ticker task, so
//! user events and ticks are applied one at a time. Every transition, whether
//! it came from an event or a tick, publishes a fresh [`SessionSnapshot`] on a
//! watch channel.

use std::sync::Arc;

use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::warn;

use crate::quiz_engine::{
    catalog::Catalog,
    error::SessionError,
    models::SessionConfig,
    session::{Session, SessionEvent, TimerCommand},
    snapshot::SessionSnapshot,
    ticker::Ticker,
};

#[derive(Debug)]
pub struct SharedSession {
    session: Mutex<Session>,
    updates: watch::Sender<SessionSnapshot>,
}

impl SharedSession {
    pub fn new(session: Session) -> Arc<Self> {
        let (updates, _) = watch::channel(session.snapshot());
        Arc::new(SharedSession { session: Mutex::new(session), updates })
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    pub(crate) fn publish(&self, session: &Session) {
        self.updates.send_replace(session.snapshot());
    }
}

/// Owns the live session and its countdown. Needs a tokio runtime.
pub struct SessionDriver {
    shared: Arc<SharedSession>,
    ticker: Ticker,
}

impl SessionDriver {
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        SessionDriver {
            shared: SharedSession::new(Session::new(catalog, config)),
            ticker: Ticker::new(),
        }
    }

    /// Apply one user event and return the snapshot to render.
    pub async fn dispatch(&mut self, event: SessionEvent) -> Result<SessionSnapshot, SessionError> {
        let mut session = self.shared.lock().await;
        let command = session.handle(event).inspect_err(|e| warn!(error = %e, "event rejected"))?;

        match command {
            TimerCommand::Arm { epoch } => self.ticker.arm(self.shared.clone(), epoch),
            TimerCommand::Cancel => self.ticker.cancel(),
            TimerCommand::Keep => {}
        }

        let snapshot = session.snapshot();
        self.shared.updates.send_replace(snapshot.clone());
        Ok(snapshot)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().await.snapshot()
    }

    /// Receives a snapshot after every transition, ticks included.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.subscribe()
    }

    pub fn shared(&self) -> Arc<SharedSession> {
        self.shared.clone()
    }

    pub fn timer_running(&self) -> bool {
        self.ticker.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::quiz_engine::models::{GameState, TimerDuration};
    use crate::quiz_engine::setup::PartyConfig;

    fn driver() -> SessionDriver {
        SessionDriver::new(Catalog::builtin(), SessionConfig::seeded(99))
    }

    #[tokio::test(start_paused = true)]
    async fn timed_game_ends_on_expiry() {
        let mut d = driver();
        let snap = d.dispatch(SessionEvent::StartTimed(TimerDuration::new(30).unwrap())).await.unwrap();
        assert_eq!(snap.state, GameState::Playing);
        assert!(d.timer_running());

        tokio::time::sleep(Duration::from_millis(30_500)).await;
        let snap = d.snapshot().await;
        assert_eq!(snap.state, GameState::Results);
        assert!(snap.answers.is_empty());
        assert!(!d.timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_are_published() {
        let mut d = driver();
        let mut rx = d.subscribe();
        d.dispatch(SessionEvent::StartTimed(TimerDuration::new(60).unwrap())).await.unwrap();
        let _ = rx.borrow_and_update();

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().time_left, 59);
    }

    #[tokio::test(start_paused = true)]
    async fn play_again_cancels_running_countdown() {
        let mut d = driver();
        d.dispatch(SessionEvent::StartTimed(TimerDuration::new(30).unwrap())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2_500)).await;

        let snap = d.dispatch(SessionEvent::PlayAgain).await.unwrap();
        assert_eq!(snap.state, GameState::Welcome);
        assert!(!d.timer_running());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(d.snapshot().await.state, GameState::Welcome);
    }

    #[tokio::test(start_paused = true)]
    async fn party_turns_rotate_on_expiry() {
        let mut d = driver();
        let cfg = PartyConfig::new(&["Ann", "Bob"], TimerDuration::new(30).unwrap()).unwrap();
        d.dispatch(SessionEvent::ChooseParty).await.unwrap();
        let snap = d.dispatch(SessionEvent::StartParty(cfg)).await.unwrap();
        assert_eq!(snap.state, GameState::TurnStart);
        assert!(!d.timer_running());

        d.dispatch(SessionEvent::ContinueTurn).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30_500)).await;
        let snap = d.snapshot().await;
        assert_eq!(snap.state, GameState::TurnStart);
        assert_eq!(snap.current_player.map(|p| p.name), Some("Bob".to_string()));

        let snap = d.dispatch(SessionEvent::ContinueTurn).await.unwrap();
        assert_eq!(snap.time_left, 30);
        tokio::time::sleep(Duration::from_millis(30_500)).await;
        assert_eq!(d.snapshot().await.state, GameState::Results);
    }

    #[tokio::test(start_paused = true)]
    async fn answering_every_timed_question_stops_the_countdown() {
        let catalog = Catalog::new(Catalog::builtin().countries()[..4].to_vec()).unwrap();
        let mut d = SessionDriver::new(catalog, SessionConfig::seeded(5));
        d.dispatch(SessionEvent::StartTimed(TimerDuration::new(30).unwrap())).await.unwrap();
        assert!(d.timer_running());

        let mut snap = d.snapshot().await;
        while snap.state == GameState::Playing {
            let pick = snap.question.as_ref().unwrap().options[0].clone();
            snap = d.dispatch(SessionEvent::SubmitAnswer(pick)).await.unwrap();
        }
        assert_eq!(snap.state, GameState::Results);
        assert_eq!(snap.answers.len(), 4);
        assert!(!d.timer_running());
        assert!(!snap.timer_active);
    }

    #[tokio::test]
    async fn rejected_event_surfaces_error() {
        let mut d = driver();
        let err = d.dispatch(SessionEvent::Advance).await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { state: GameState::Welcome, .. }));
    }
}
