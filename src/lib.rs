pub mod cli;
pub mod config;
pub mod errors;
pub mod roster;
pub mod services;
pub mod session;
pub mod tracker;
pub mod warnings;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;
use std::io;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::roster::team_layout;
use crate::services::{ConsoleService, ReplayService};
use crate::session::Session;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_session(team_size: Option<usize>, window: Option<usize>) -> Result<()> {
    let config = AppConfig::new().with_overrides(window, team_size);
    let session = Session::new(config)?;
    let stdin = io::stdin();
    let mut service = ConsoleService::new(session, stdin.lock(), io::stdout());
    service.run()
}

pub fn handle_replay(file: &str, team_size: Option<usize>, window: Option<usize>) -> Result<()> {
    let service = ReplayService::new(window, team_size);
    let report = service.run(file)?;

    print!("{}", report.view);
    for rejected in &report.rejected {
        println!("{}", format!("Rejected {}", rejected).red());
    }
    Ok(())
}

pub fn handle_roles(team_size: usize) -> Result<()> {
    for team_number in 1..=2 {
        for slot in team_layout(team_number, team_size)? {
            println!("{}", slot);
        }
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
