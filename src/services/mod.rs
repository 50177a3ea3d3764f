pub mod console;
pub mod replay;

pub use console::{parse_command, ConsoleCommand, ConsoleService};
pub use replay::{ReplayReport, ReplayService, Script, Step};
