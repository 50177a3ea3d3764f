pub struct TrackerSettings {
    pub window_size: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self { window_size: 4 }
    }
}

/// Fairness thresholds applied to the tracker's stats on every render
pub struct WarningSettings {
    pub overplay_games: u32,
    pub losing_streak_losses: usize,
}

impl Default for WarningSettings {
    fn default() -> Self {
        Self {
            overplay_games: 4,
            losing_streak_losses: 3,
        }
    }
}

pub struct TeamSettings {
    pub min_team_size: usize,
    pub max_team_size: usize,
    pub default_team_size: usize,
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self {
            min_team_size: 3,
            max_team_size: 6,
            default_team_size: 5,
        }
    }
}

pub struct AppConfig {
    pub tracker: TrackerSettings,
    pub warnings: WarningSettings,
    pub teams: TeamSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            tracker: TrackerSettings::default(),
            warnings: WarningSettings::default(),
            teams: TeamSettings::default(),
        }
    }

    /// Apply command-line overrides on top of the defaults
    pub fn with_overrides(mut self, window_size: Option<usize>, team_size: Option<usize>) -> Self {
        if let Some(window_size) = window_size {
            self.tracker.window_size = window_size;
        }
        if let Some(team_size) = team_size {
            self.teams.default_team_size = team_size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_session_policy() {
        let config = AppConfig::new();

        assert_eq!(config.tracker.window_size, 4);
        assert_eq!(config.warnings.overplay_games, 4);
        assert_eq!(config.warnings.losing_streak_losses, 3);
        assert_eq!(config.teams.default_team_size, 5);
    }

    #[test]
    fn test_overrides_only_touch_given_values() {
        let config = AppConfig::new().with_overrides(Some(6), None);

        assert_eq!(config.tracker.window_size, 6);
        assert_eq!(config.teams.default_team_size, 5);
    }
}
