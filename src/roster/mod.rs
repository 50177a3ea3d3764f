pub mod pool;
pub mod roles;
pub mod sheet;

pub use pool::{normalize_name, AddOutcome, PlayerPool};
pub use roles::{role_counts, team_layout, Role, Slot};
pub use sheet::{validate_match, TeamSheet};
