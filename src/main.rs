use anyhow::Result;

use pug_rotation::cli::Command;
use pug_rotation::{handle_completions, handle_replay, handle_roles, handle_session, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Session { team_size, window } => handle_session(*team_size, *window),
        Command::Replay {
            file,
            team_size,
            window,
        } => handle_replay(file, *team_size, *window),
        Command::Roles { team_size } => handle_roles(*team_size),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
