//! Party-mode roster editing and validation.
//!
//! Everything here runs before the session controller sees a party game: the
//! controller only ever receives a [`PartyConfig`], and the only way to build
//! one is through [`PartyConfig::new`] or [`PartySetup::finish`].

use serde::Serialize;

use crate::quiz_engine::{error::SetupError, models::TimerDuration};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// A validated party: 2-4 unique, non-empty names and a positive duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyConfig {
    names: Vec<String>,
    duration: TimerDuration,
}

impl PartyConfig {
    pub fn new<S: AsRef<str>>(names: &[S], duration: TimerDuration) -> Result<Self, SetupError> {
        let mut clean: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SetupError::EmptyName);
            }
            if clean.iter().any(|n| n == name) {
                return Err(SetupError::DuplicateName(name.to_string()));
            }
            clean.push(name.to_string());
        }

        if clean.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers { count: clean.len(), min: MIN_PLAYERS });
        }
        if clean.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers { count: clean.len(), max: MAX_PLAYERS });
        }

        Ok(PartyConfig { names: clean, duration })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn duration(&self) -> TimerDuration {
        self.duration
    }
}

/// Editable roster shown on the party setup screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartySetup {
    players: Vec<String>,
    duration: TimerDuration,
}

impl Default for PartySetup {
    fn default() -> Self {
        PartySetup {
            players: vec!["Player 1".to_string(), "Player 2".to_string()],
            duration: TimerDuration::DEFAULT,
        }
    }
}

impl PartySetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn duration(&self) -> TimerDuration {
        self.duration
    }

    pub fn can_add(&self) -> bool {
        self.players.len() < MAX_PLAYERS
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), SetupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if !self.can_add() {
            return Err(SetupError::TooManyPlayers { count: self.players.len() + 1, max: MAX_PLAYERS });
        }
        if self.players.iter().any(|p| p == name) {
            return Err(SetupError::DuplicateName(name.to_string()));
        }
        self.players.push(name.to_string());
        Ok(())
    }

    /// Removing is refused once the roster is down to the minimum.
    pub fn remove_player(&mut self, name: &str) -> Result<(), SetupError> {
        let name = name.trim();
        let Some(pos) = self.players.iter().position(|p| p == name) else {
            return Err(SetupError::UnknownPlayer(name.to_string()));
        };
        if self.players.len() <= MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers { count: self.players.len() - 1, min: MIN_PLAYERS });
        }
        self.players.remove(pos);
        Ok(())
    }

    pub fn set_duration(&mut self, duration: TimerDuration) {
        self.duration = duration;
    }

    pub fn finish(&self) -> Result<PartyConfig, SetupError> {
        PartyConfig::new(&self.players, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u32) -> TimerDuration {
        TimerDuration::new(s).unwrap()
    }

    #[test]
    fn config_rejects_bad_rosters() {
        let d = secs(60);
        assert_eq!(
            PartyConfig::new(&["Ann"], d),
            Err(SetupError::TooFewPlayers { count: 1, min: 2 })
        );
        assert_eq!(
            PartyConfig::new(&["A", "B", "C", "D", "E"], d),
            Err(SetupError::TooManyPlayers { count: 5, max: 4 })
        );
        assert_eq!(
            PartyConfig::new(&["Ann", " Ann "], d),
            Err(SetupError::DuplicateName("Ann".to_string()))
        );
        assert_eq!(PartyConfig::new(&["Ann", "  "], d), Err(SetupError::EmptyName));
    }

    #[test]
    fn config_trims_names() {
        let cfg = PartyConfig::new(&[" Ann", "Bob "], secs(30)).unwrap();
        assert_eq!(cfg.names(), ["Ann", "Bob"]);
        assert_eq!(cfg.duration().secs(), 30);
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(TimerDuration::new(0), Err(SetupError::InvalidDuration(0)));
        assert!(serde_json::from_str::<TimerDuration>("0").is_err());
        assert_eq!(serde_json::from_str::<TimerDuration>("90").unwrap().secs(), 90);
    }

    #[test]
    fn setup_starts_with_two_default_players() {
        let setup = PartySetup::new();
        assert_eq!(setup.players(), ["Player 1", "Player 2"]);
        assert_eq!(setup.duration(), TimerDuration::DEFAULT);
        assert!(setup.finish().is_ok());
    }

    #[test]
    fn setup_caps_roster_at_four() {
        let mut setup = PartySetup::new();
        setup.add_player("Cleo").unwrap();
        setup.add_player("  Dev  ").unwrap();
        assert!(!setup.can_add());
        assert!(matches!(setup.add_player("Eve"), Err(SetupError::TooManyPlayers { .. })));
        assert_eq!(setup.players()[3], "Dev");
    }

    #[test]
    fn setup_rejects_duplicates_and_keeps_two_players() {
        let mut setup = PartySetup::new();
        assert_eq!(
            setup.add_player("Player 1"),
            Err(SetupError::DuplicateName("Player 1".to_string()))
        );
        assert!(setup.remove_player("Player 1").is_err());

        setup.add_player("Cleo").unwrap();
        setup.remove_player("Player 1").unwrap();
        setup.set_duration(secs(90));
        let cfg = setup.finish().unwrap();
        assert_eq!(cfg.names(), ["Player 2", "Cleo"]);
        assert_eq!(cfg.duration().secs(), 90);
    }

    #[test]
    fn removing_unknown_player_is_an_error() {
        let mut setup = PartySetup::new();
        setup.add_player("Cleo").unwrap();
        assert_eq!(
            setup.remove_player("Nobody"),
            Err(SetupError::UnknownPlayer("Nobody".to_string()))
        );
        assert_eq!(setup.players(), ["Player 1", "Player 2", "Cleo"]);

        setup.remove_player(" Cleo ").unwrap();
        assert_eq!(setup.players(), ["Player 1", "Player 2"]);
    }
}
