use std::fmt;

use crate::config::WarningSettings;
use crate::roster::pool::sort_case_insensitive;
use crate::tracker::{PlayerStats, RotationTracker};

/// Fairness signal derived from a player's current stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Overplay { player: String, games: u32 },
    LosingStreak { player: String, losses: usize, window_games: usize },
}

impl Warning {
    pub fn player(&self) -> &str {
        match self {
            Warning::Overplay { player, .. } | Warning::LosingStreak { player, .. } => player,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Overplay { player, games } => {
                write!(f, "{} has played {} games in a row.", player, games)
            }
            Warning::LosingStreak {
                player,
                losses,
                window_games,
            } => write!(
                f,
                "{} has lost {} games out of their last {} games.",
                player, losses, window_games
            ),
        }
    }
}

/// Warnings for one player's stats, overplay first
pub fn player_warnings(player: &str, stats: &PlayerStats, settings: &WarningSettings) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if stats.consecutive_games >= settings.overplay_games {
        warnings.push(Warning::Overplay {
            player: player.to_string(),
            games: stats.consecutive_games,
        });
    }
    if stats.losses >= settings.losing_streak_losses {
        warnings.push(Warning::LosingStreak {
            player: player.to_string(),
            losses: stats.losses,
            window_games: stats.window_games(),
        });
    }

    warnings
}

/// Recompute every warning from the tracker's current state
pub fn derive_warnings(tracker: &RotationTracker, settings: &WarningSettings) -> Vec<Warning> {
    let mut players = tracker.list_known_players();
    sort_case_insensitive(&mut players);

    players
        .into_iter()
        .flat_map(|player| player_warnings(player, &tracker.get_stats(player), settings))
        .collect()
}
