use colored::Colorize;
use std::fmt;

use super::Session;
use crate::roster::{role_counts, Role};

pub const NO_WARNINGS: &str = "No warnings to display.";

/// Everything shown to the user after a session change, rebuilt from scratch
/// on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub pool: Vec<String>,
    pub team_size: usize,
    pub role_summary: String,
    pub matches_recorded: usize,
    pub warnings: Vec<String>,
}

pub fn render(session: &Session) -> SessionView {
    SessionView {
        pool: session.pool().sorted().into_iter().map(str::to_string).collect(),
        team_size: session.team_size(),
        role_summary: role_summary(session.team_size()),
        matches_recorded: session.matches_recorded(),
        warnings: session.warnings().iter().map(|w| w.to_string()).collect(),
    }
}

fn role_summary(team_size: usize) -> String {
    match role_counts(team_size) {
        Ok(counts) => Role::ALL
            .iter()
            .zip(counts)
            .map(|(role, count)| format!("{} {}", count, role))
            .collect::<Vec<_>>()
            .join(", "),
        Err(_) => String::from("-"),
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Current Player Pool".bold())?;
        writeln!(f, "{}", self.pool.join(", "))?;
        writeln!(f)?;
        writeln!(
            f,
            "{} {} per team ({})",
            "Team Size:".bold(),
            self.team_size,
            self.role_summary
        )?;
        writeln!(f, "{} {}", "Matches Recorded:".bold(), self.matches_recorded)?;
        writeln!(f)?;
        writeln!(f, "{}", "Player Warnings".bold())?;

        if self.warnings.is_empty() {
            writeln!(f, "{}", NO_WARNINGS.cyan())?;
        }
        for warning in &self.warnings {
            writeln!(f, "{}", warning.yellow())?;
        }
        Ok(())
    }
}
