use anyhow::Result;
use log::{info, warn};
use serde::Deserialize;
use std::fs;

use crate::config::AppConfig;
use crate::errors::{with_parse_context, with_script_context};
use crate::roster::AddOutcome;
use crate::session::{render, Session, SessionView};
use crate::tracker::Outcome;

/// A recorded session to play back, as loaded from JSON
#[derive(Debug, Deserialize)]
pub struct Script {
    pub window_size: Option<usize>,
    pub team_size: Option<usize>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        with_parse_context(serde_json::from_str(json), "session script")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AddPlayers(String),
    SetTeamSize(usize),
    RecordMatch(MatchEntry),
    Reset,
}

#[derive(Debug, Deserialize)]
pub struct MatchEntry {
    pub team1: Vec<String>,
    pub team2: Vec<String>,
    pub result: Outcome,
}

/// Final state of a replayed session plus the steps the session refused
#[derive(Debug)]
pub struct ReplayReport {
    pub view: SessionView,
    pub rejected: Vec<String>,
}

pub struct ReplayService {
    window_size: Option<usize>,
    team_size: Option<usize>,
}

impl ReplayService {
    /// Overrides given here win over the values stored in the script
    pub fn new(window_size: Option<usize>, team_size: Option<usize>) -> Self {
        Self {
            window_size,
            team_size,
        }
    }

    pub fn run(&self, path: &str) -> Result<ReplayReport> {
        info!("=== Replaying session script {} ===", path);

        let json = with_script_context(fs::read_to_string(path), path)?;
        let script = Script::from_json(&json)?;
        let report = self.replay(&script)?;

        info!(
            "=== Replay Complete: {} steps, {} rejected ===",
            script.steps.len(),
            report.rejected.len()
        );
        Ok(report)
    }

    pub fn replay(&self, script: &Script) -> Result<ReplayReport> {
        let config = AppConfig::new()
            .with_overrides(script.window_size, script.team_size)
            .with_overrides(self.window_size, self.team_size);
        let mut session = Session::new(config)?;
        let mut rejected = Vec::new();

        for (idx, step) in script.steps.iter().enumerate() {
            if let Err(e) = apply_step(&mut session, step) {
                warn!("Step {} rejected: {}", idx + 1, e);
                rejected.push(format!("step {}: {}", idx + 1, e));
            }
        }

        Ok(ReplayReport {
            view: render(&session),
            rejected,
        })
    }
}

fn apply_step(session: &mut Session, step: &Step) -> Result<()> {
    match step {
        Step::AddPlayers(text) => {
            if session.add_players(text) == AddOutcome::NoValidNames {
                anyhow::bail!("No valid player names entered.");
            }
            Ok(())
        }
        Step::SetTeamSize(size) => session.set_team_size(*size),
        Step::RecordMatch(entry) => {
            session.record_match(entry.team1.clone(), entry.team2.clone(), entry.result)
        }
        Step::Reset => {
            session.reset();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "window_size": 4,
        "team_size": 3,
        "steps": [
            { "add_players": "amy, bo, cy\ndee, ed, fay" },
            { "record_match": { "team1": ["Amy", "Bo", "Cy"], "team2": ["Dee", "Ed", "Fay"], "result": "team1" } },
            { "record_match": { "team1": ["Amy", "Bo", "Cy"], "team2": ["Dee", "Ed", "Fay"], "result": "draw" } },
            { "record_match": { "team1": ["Amy", "", "Cy"], "team2": ["Dee", "Ed", "Fay"], "result": "team2" } }
        ]
    }"#;

    #[test]
    fn test_script_parses_all_step_kinds() {
        let script = Script::from_json(
            r#"{ "steps": [ { "set_team_size": 4 }, "reset", { "add_players": "x" } ] }"#,
        )
        .unwrap();

        assert_eq!(script.window_size, None);
        assert!(matches!(script.steps[0], Step::SetTeamSize(4)));
        assert!(matches!(script.steps[1], Step::Reset));
        assert!(matches!(script.steps[2], Step::AddPlayers(_)));
    }

    #[test]
    fn test_replay_applies_valid_steps_and_reports_rejected() {
        let script = Script::from_json(SCRIPT).unwrap();
        let report = ReplayService::new(None, None).replay(&script).unwrap();

        assert_eq!(report.view.matches_recorded, 2);
        assert_eq!(report.view.team_size, 3);
        assert_eq!(report.rejected.len(), 1);
        assert!(report.rejected[0].starts_with("step 4"));
    }

    #[test]
    fn test_cli_overrides_win_over_script() {
        let script = Script::from_json(SCRIPT).unwrap();
        let report = ReplayService::new(None, Some(5)).replay(&script).unwrap();

        assert_eq!(report.view.team_size, 5);
        assert_eq!(report.view.matches_recorded, 0);
        assert_eq!(report.rejected.len(), 3);
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        let err = Script::from_json(r#"{ "steps": [ { "kick_player": "Amy" } ] }"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse session script"));
    }
}
