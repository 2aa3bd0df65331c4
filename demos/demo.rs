//! Scripted walk through all three game modes.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Classic**: ten questions on a bare [`Session`], answering every other
//!    one correctly and printing the feedback and fun fact.
//! 2. **Timed**: a 30s [`SessionDriver`] game. The runtime starts with a
//!    paused clock, so the countdown finishes instantly instead of in real
//!    time.
//! 3. **Party**: three players set up through [`PartySetup`], each taking a
//!    turn against the same driver.
//!
//! Set `RUST_LOG=flag_quiz=debug` to watch the state machine transitions.

use std::time::Duration;

use flag_quiz::{
    Catalog, GameState, Outcome, PartySetup, Session, SessionConfig, SessionDriver,
    SessionEvent, SessionSnapshot, TimerDuration,
};
use tracing_subscriber::EnvFilter;

fn print_outcome(snapshot: &SessionSnapshot) {
    match &snapshot.outcome {
        Some(Outcome::Solo(out)) => {
            println!("  Score: {}/{} ({}%)", out.score, out.total, out.percentage);
            println!("  {}", out.verdict);
        }
        Some(Outcome::Party(out)) => {
            if let Some(winner) = out.winner() {
                let suffix = if out.is_tie { " (tie)" } else { "" };
                println!("  {} Wins!{suffix}", winner.name);
            }
            for (rank, p) in out.standings.iter().enumerate() {
                println!("  {}. {:<10} {}", rank + 1, p.name, p.score);
            }
        }
        None => println!("  (no outcome yet)"),
    }
}

fn classic_demo() {
    println!("━━ Classic ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut session = Session::new(Catalog::builtin(), SessionConfig::seeded(42));
    session
        .handle(SessionEvent::StartClassic(TimerDuration::DEFAULT))
        .expect("welcome accepts a classic start");

    let mut n = 0;
    while session.state() == GameState::Playing {
        let Some(question) = session.current_question() else { break };
        let pick = if n % 2 == 0 {
            question.correct_answer.name.clone()
        } else {
            question.options[(question.correct_index() + 1) % 4].clone()
        };
        println!("  Q{}: {}  [{}]", n + 1, question.flag_url, question.options.join(" | "));

        session.handle(SessionEvent::SubmitAnswer(pick)).expect("option is offered");
        if let Some(fb) = session.snapshot().feedback {
            let mark = if fb.is_correct { "✓" } else { "✗" };
            println!("       {mark} {}: {}", fb.correct_answer, fb.fact);
        }
        session.handle(SessionEvent::Advance).expect("question was answered");
        n += 1;
    }
    print_outcome(&session.snapshot());
    println!();
}

async fn timed_demo(driver: &mut SessionDriver) {
    println!("━━ Timed (30s) ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let duration = TimerDuration::new(30).expect("positive duration");
    driver.dispatch(SessionEvent::StartTimed(duration)).await.expect("welcome accepts a timed start");

    let shared = driver.shared();
    for _ in 0..4 {
        let pick = {
            let session = shared.lock().await;
            match session.current_question() {
                Some(q) => q.correct_answer.name.clone(),
                None => break,
            }
        };
        let snap = driver.dispatch(SessionEvent::SubmitAnswer(pick)).await.expect("option is offered");
        println!("  answered, score {} with {}s left", snap.score, snap.time_left);
        tokio::time::sleep(Duration::from_secs(3)).await;
    }

    tokio::time::sleep(Duration::from_secs(30)).await;
    let snap = driver.snapshot().await;
    println!("  time's up: {}", snap.state);
    print_outcome(&snap);
    driver.dispatch(SessionEvent::PlayAgain).await.expect("reset is always accepted");
    println!();
}

async fn party_demo(driver: &mut SessionDriver) {
    println!("━━ Party ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut setup = PartySetup::new();
    setup.add_player("Cleo").expect("room for a third player");
    setup.set_duration(TimerDuration::new(30).expect("positive duration"));
    let config = setup.finish().expect("valid roster");

    driver.dispatch(SessionEvent::ChooseParty).await.expect("welcome accepts party");
    let mut snap = driver.dispatch(SessionEvent::StartParty(config)).await.expect("setup accepts start");

    let shared = driver.shared();
    let mut turn = 0;
    while snap.state == GameState::TurnStart {
        let name = snap.current_player.as_ref().map(|p| p.name.clone()).unwrap_or_default();
        println!("  {name}'s turn");
        driver.dispatch(SessionEvent::ContinueTurn).await.expect("turn start accepts continue");

        for k in 0..=turn + 1 {
            let pick = {
                let session = shared.lock().await;
                let Some(q) = session.current_question() else { break };
                if k % 2 == 0 { q.correct_answer.name.clone() } else { q.options[(q.correct_index() + 1) % 4].clone() }
            };
            driver.dispatch(SessionEvent::SubmitAnswer(pick)).await.expect("option is offered");
        }

        tokio::time::sleep(Duration::from_secs(31)).await;
        snap = driver.snapshot().await;
        turn += 1;
    }
    print_outcome(&snap);
}

#[tokio::main(flavor = "current_thread", start_paused = true)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!();
    classic_demo();

    let mut driver = SessionDriver::new(Catalog::builtin(), SessionConfig::seeded(7));
    timed_demo(&mut driver).await;
    party_demo(&mut driver).await;
    println!();
}
