use anyhow::{bail, Result};
use std::collections::HashSet;

use super::pool::PlayerPool;
use super::roles::{team_layout, Slot};
use crate::tracker::PlayerName;

/// A team's slot assignments in role order; an empty name is an unfilled slot.
#[derive(Debug, Clone)]
pub struct TeamSheet {
    assignments: Vec<(Slot, PlayerName)>,
}

impl TeamSheet {
    pub fn from_names(team_number: u8, team_size: usize, names: Vec<PlayerName>) -> Result<Self> {
        let layout = team_layout(team_number, team_size)?;
        if names.len() != layout.len() {
            bail!(
                "Team {} needs {} player(s), got {}",
                team_number,
                layout.len(),
                names.len()
            );
        }

        let assignments = layout
            .into_iter()
            .zip(names.into_iter().map(|name| name.trim().to_string()))
            .collect();

        Ok(Self { assignments })
    }

    pub fn assignments(&self) -> &[(Slot, PlayerName)] {
        &self.assignments
    }

    pub fn unfilled_slots(&self) -> Vec<Slot> {
        self.assignments
            .iter()
            .filter(|(_, name)| name.is_empty())
            .map(|(slot, _)| *slot)
            .collect()
    }

    pub fn roster(&self) -> Vec<PlayerName> {
        self.assignments.iter().map(|(_, name)| name.clone()).collect()
    }
}

/// Check two sheets before their match is recorded: every slot filled,
/// every player in the pool and nobody selected twice.
pub fn validate_match(team1: &TeamSheet, team2: &TeamSheet, pool: &PlayerPool) -> Result<()> {
    if !team1.unfilled_slots().is_empty() || !team2.unfilled_slots().is_empty() {
        bail!("Please fill in all player slots before recording the match result.");
    }

    let mut seen = HashSet::new();
    for (slot, name) in team1.assignments().iter().chain(team2.assignments()) {
        if !pool.contains(name) {
            bail!("{} is not in the player pool ({})", name, slot);
        }
        if !seen.insert(name.as_str()) {
            bail!("{} is selected more than once ({})", name, slot);
        }
    }

    Ok(())
}
