use pug_rotation::config::AppConfig;
use pug_rotation::services::{ReplayService, Script};
use pug_rotation::session::{render, Session};
use pug_rotation::tracker::{Outcome, PlayerStats};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

fn session_of_three() -> Session {
    let config = AppConfig::new().with_overrides(Some(4), Some(3));
    let mut session = Session::new(config).unwrap();
    session.add_players("amy, bo, cy, dee, ed, fay, gus");
    session
}

#[test]
fn rotating_a_player_out_clears_their_overplay_warning() {
    let mut session = session_of_three();
    for _ in 0..4 {
        session
            .record_match(
                names(&["Amy", "Bo", "Cy"]),
                names(&["Dee", "Ed", "Fay"]),
                Outcome::TeamBWin,
            )
            .unwrap();
    }

    let warnings = render(&session).warnings;
    assert!(warnings.contains(&"Amy has played 4 games in a row.".to_string()));
    assert!(warnings.contains(&"Amy has lost 4 games out of their last 4 games.".to_string()));

    session
        .record_match(
            names(&["Gus", "Bo", "Cy"]),
            names(&["Dee", "Ed", "Fay"]),
            Outcome::TeamAWin,
        )
        .unwrap();

    assert_eq!(session.stats("Amy"), PlayerStats::new(0, 0, 4));
    assert_eq!(session.stats("Gus"), PlayerStats::new(1, 1, 0));
    assert_eq!(session.stats("Bo"), PlayerStats::new(5, 1, 3));

    let warnings = render(&session).warnings;
    assert!(!warnings.contains(&"Amy has played 4 games in a row.".to_string()));
    assert!(warnings.contains(&"Amy has lost 4 games out of their last 4 games.".to_string()));
    assert!(warnings.contains(&"Bo has lost 3 games out of their last 4 games.".to_string()));
}

#[test]
fn draws_extend_streaks_without_touching_results() {
    let mut session = session_of_three();
    session
        .record_match(
            names(&["Amy", "Bo", "Cy"]),
            names(&["Dee", "Ed", "Fay"]),
            Outcome::TeamAWin,
        )
        .unwrap();
    session
        .record_match(
            names(&["Amy", "Bo", "Cy"]),
            names(&["Dee", "Ed", "Fay"]),
            Outcome::Draw,
        )
        .unwrap();

    assert_eq!(session.stats("Amy"), PlayerStats::new(2, 1, 0));
    assert_eq!(session.stats("Fay"), PlayerStats::new(2, 0, 1));
}

#[test]
fn replayed_script_matches_live_session() {
    let script = Script::from_json(
        r#"{
            "team_size": 3,
            "steps": [
                { "add_players": "amy, bo, cy, dee, ed, fay" },
                { "record_match": { "team1": ["amy", "bo", "cy"], "team2": ["dee", "ed", "fay"], "result": "team1" } },
                { "record_match": { "team1": ["amy", "bo", "cy"], "team2": ["dee", "ed", "fay"], "result": "team1" } },
                { "record_match": { "team1": ["amy", "bo", "cy"], "team2": ["dee", "ed", "fay"], "result": "team1" } },
                { "record_match": { "team1": ["amy", "bo", "cy"], "team2": ["dee", "ed", "fay"], "result": "team1" } }
            ]
        }"#,
    )
    .unwrap();
    let report = ReplayService::new(None, None).replay(&script).unwrap();

    let mut session = session_of_three();
    for _ in 0..4 {
        session
            .record_match(
                names(&["amy", "bo", "cy"]),
                names(&["dee", "ed", "fay"]),
                Outcome::TeamAWin,
            )
            .unwrap();
    }

    assert!(report.rejected.is_empty());
    assert_eq!(report.view.warnings, render(&session).warnings);
}

#[test]
fn reset_starts_a_fresh_session() {
    let mut session = session_of_three();
    session
        .record_match(
            names(&["Amy", "Bo", "Cy"]),
            names(&["Dee", "Ed", "Fay"]),
            Outcome::TeamAWin,
        )
        .unwrap();

    session.reset();

    assert_eq!(session.stats("Amy"), PlayerStats::new(0, 0, 0));
    assert!(session.tracker().list_known_players().is_empty());
    assert!(session
        .record_match(
            names(&["Amy", "Bo", "Cy"]),
            names(&["Dee", "Ed", "Fay"]),
            Outcome::TeamAWin,
        )
        .is_err());
}
