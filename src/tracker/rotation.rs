use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::{Outcome, PlayerName, PlayerRecord, PlayerStats};

/// Tracks how often each player has played in a row and how their recent
/// decisive games went.
///
/// Records are created the first time a player appears in a submitted match
/// and live until the tracker is replaced.
#[derive(Debug, Clone)]
pub struct RotationTracker {
    window_size: usize,
    records: HashMap<PlayerName, PlayerRecord>,
}

impl RotationTracker {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            records: HashMap::new(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Record a finished match.
    ///
    /// The rosters must be disjoint; validation of roster contents happens
    /// before this is called. Submitting the same match twice counts twice.
    pub fn submit_match(&mut self, team_a: &[PlayerName], team_b: &[PlayerName], outcome: Outcome) {
        debug!(
            "Submitting match: {} vs {} players, result {}",
            team_a.len(),
            team_b.len(),
            outcome
        );

        let participants: HashSet<&str> = team_a.iter().chain(team_b).map(String::as_str).collect();
        let winners: HashSet<&str> = winning_roster(team_a, team_b, outcome)
            .iter()
            .map(String::as_str)
            .collect();

        self.reset_absent_players(&participants);

        for player in participants {
            let won = outcome.is_decisive().then(|| winners.contains(player));
            self.record_participation(player, won);
        }
    }

    /// Stats for a player; `(0, 0, 0)` when the player has never played.
    /// Never creates a record.
    pub fn get_stats(&self, player: &str) -> PlayerStats {
        self.records
            .get(player)
            .map(PlayerRecord::stats)
            .unwrap_or_default()
    }

    /// Every player that has a record, in no particular order
    pub fn list_known_players(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn record(&self, player: &str) -> Option<&PlayerRecord> {
        self.records.get(player)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn reset_absent_players(&mut self, participants: &HashSet<&str>) {
        for (name, record) in self.records.iter_mut() {
            if !participants.contains(name.as_str()) {
                record.consecutive_games = 0;
            }
        }
    }

    /// `won` is `None` for a draw
    fn record_participation(&mut self, player: &str, won: Option<bool>) {
        let window_size = self.window_size;
        let record = self
            .records
            .entry(player.to_string())
            .or_insert_with(|| PlayerRecord::new(window_size));

        record.consecutive_games += 1;
        if let Some(won) = won {
            record.recent_results.push(won);
        }
    }
}

/// Empty for a draw
fn winning_roster<'a>(
    team_a: &'a [PlayerName],
    team_b: &'a [PlayerName],
    outcome: Outcome,
) -> &'a [PlayerName] {
    match outcome {
        Outcome::TeamAWin => team_a,
        Outcome::TeamBWin => team_b,
        Outcome::Draw => &[],
    }
}
