pub mod view;

use anyhow::{bail, Result};
use log::info;

use crate::config::AppConfig;
use crate::roster::{normalize_name, validate_match, AddOutcome, PlayerPool, TeamSheet};
use crate::tracker::{Outcome, PlayerStats, RotationTracker};
use crate::warnings::{derive_warnings, Warning};

pub use view::{render, SessionView};

/// One pick-up-game session: the player pool, the current team size and the
/// rotation tracker, owned explicitly by whoever drives the session.
pub struct Session {
    config: AppConfig,
    tracker: RotationTracker,
    pool: PlayerPool,
    team_size: usize,
    matches_recorded: usize,
}

impl Session {
    pub fn new(config: AppConfig) -> Result<Self> {
        let team_size = config.teams.default_team_size;
        check_team_size(&config, team_size)?;

        Ok(Self {
            tracker: RotationTracker::new(config.tracker.window_size),
            pool: PlayerPool::new()?,
            team_size,
            matches_recorded: 0,
            config,
        })
    }

    pub fn add_players(&mut self, text: &str) -> AddOutcome {
        self.pool.add_from_text(text)
    }

    pub fn set_team_size(&mut self, team_size: usize) -> Result<()> {
        check_team_size(&self.config, team_size)?;
        self.team_size = team_size;
        Ok(())
    }

    /// Validate both rosters and hand the match to the tracker.
    ///
    /// Names are given in slot order and normalized the same way as pool names.
    pub fn record_match(
        &mut self,
        team1: Vec<String>,
        team2: Vec<String>,
        outcome: Outcome,
    ) -> Result<()> {
        let team1 = TeamSheet::from_names(1, self.team_size, normalize_all(team1))?;
        let team2 = TeamSheet::from_names(2, self.team_size, normalize_all(team2))?;
        validate_match(&team1, &team2, &self.pool)?;

        self.tracker
            .submit_match(&team1.roster(), &team2.roster(), outcome);
        self.matches_recorded += 1;

        info!(
            "Recorded match #{} ({}) for {} tracked players",
            self.matches_recorded,
            outcome,
            self.tracker.len()
        );
        Ok(())
    }

    pub fn stats(&self, player: &str) -> PlayerStats {
        self.tracker.get_stats(player)
    }

    pub fn warnings(&self) -> Vec<Warning> {
        derive_warnings(&self.tracker, &self.config.warnings)
    }

    /// Discard all tracked stats and the player pool, keeping the window size
    pub fn reset(&mut self) {
        self.tracker = RotationTracker::new(self.tracker.window_size());
        self.pool.clear();
        self.matches_recorded = 0;
        info!("Session reset");
    }

    pub fn tracker(&self) -> &RotationTracker {
        &self.tracker
    }

    pub fn pool(&self) -> &PlayerPool {
        &self.pool
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn matches_recorded(&self) -> usize {
        self.matches_recorded
    }
}

fn normalize_all(names: Vec<String>) -> Vec<String> {
    names.iter().map(|name| normalize_name(name)).collect()
}

fn check_team_size(config: &AppConfig, team_size: usize) -> Result<()> {
    let teams = &config.teams;
    if team_size < teams.min_team_size || team_size > teams.max_team_size {
        bail!(
            "Team size must be between {} and {}, got {}",
            teams.min_team_size,
            teams.max_team_size,
            team_size
        );
    }
    Ok(())
}
