pub mod rotation;
pub mod types;
pub mod window;

pub use rotation::RotationTracker;
pub use types::{Outcome, PlayerName, PlayerRecord, PlayerStats};
pub use window::RecentWindow;
