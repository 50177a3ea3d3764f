pub mod settings;

pub use settings::{AppConfig, TeamSettings, TrackerSettings, WarningSettings};
