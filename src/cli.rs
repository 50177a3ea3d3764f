use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "pick-up game rotation tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start an interactive session on the terminal
    Session {
        /// Players per team (3 to 6, defaults to 5)
        #[arg(short, long)]
        team_size: Option<usize>,
        /// Number of recent decisive games kept per player (defaults to 4)
        #[arg(short, long)]
        window: Option<usize>,
    },
    /// Play back a JSON session script and print the resulting warnings
    Replay {
        /// Path to the script
        file: String,
        /// Players per team, overriding the script
        #[arg(short, long)]
        team_size: Option<usize>,
        /// Recent window size, overriding the script
        #[arg(short, long)]
        window: Option<usize>,
    },
    /// Show the role slots for a team size
    Roles {
        #[arg(short, long, default_value_t = 5)]
        team_size: usize,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_flags() {
        let cli = Cli::parse_from(["pug_rotation", "session", "-t", "4", "--window", "6"]);
        assert_eq!(
            cli.command,
            Command::Session {
                team_size: Some(4),
                window: Some(6)
            }
        );
    }

    #[test]
    fn test_roles_defaults_to_five() {
        let cli = Cli::parse_from(["pug_rotation", "roles"]);
        assert_eq!(cli.command, Command::Roles { team_size: 5 });
    }
}
