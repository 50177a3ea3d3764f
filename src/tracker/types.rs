use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::window::RecentWindow;

pub type PlayerName = String;

/// Result of a single recorded match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[serde(rename = "team1")]
    TeamAWin,
    #[serde(rename = "team2")]
    TeamBWin,
    Draw,
}

impl Outcome {
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::Draw)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::TeamAWin => "Team 1",
            Outcome::TeamBWin => "Team 2",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "team1" | "1" | "a" => Ok(Outcome::TeamAWin),
            "team2" | "2" | "b" => Ok(Outcome::TeamBWin),
            "draw" | "tie" => Ok(Outcome::Draw),
            _ => bail!("Unknown match result '{}', expected team1, team2 or draw", s.trim()),
        }
    }
}

/// Per-player participation state
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub consecutive_games: u32,
    pub recent_results: RecentWindow,
}

impl PlayerRecord {
    pub fn new(window_size: usize) -> Self {
        Self {
            consecutive_games: 0,
            recent_results: RecentWindow::new(window_size),
        }
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            consecutive_games: self.consecutive_games,
            wins: self.recent_results.wins(),
            losses: self.recent_results.losses(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub consecutive_games: u32,
    pub wins: usize,
    pub losses: usize,
}

impl PlayerStats {
    pub fn new(consecutive_games: u32, wins: usize, losses: usize) -> Self {
        Self {
            consecutive_games,
            wins,
            losses,
        }
    }

    /// Number of decisive games currently held in the recent window
    pub fn window_games(&self) -> usize {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_parsing_accepts_ui_labels() {
        assert_eq!("Team 1".parse::<Outcome>().unwrap(), Outcome::TeamAWin);
        assert_eq!("team2".parse::<Outcome>().unwrap(), Outcome::TeamBWin);
        assert_eq!(" DRAW ".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert!("team3".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_outcome_serde_names() {
        let json = serde_json::to_string(&Outcome::TeamBWin).unwrap();
        assert_eq!(json, "\"team2\"");

        let parsed: Outcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(parsed, Outcome::Draw);
    }
}
