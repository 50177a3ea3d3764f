use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

use crate::errors::command_context;
use crate::roster::{normalize_name, team_layout, AddOutcome};
use crate::session::view::NO_WARNINGS;
use crate::session::{render, Session};
use crate::tracker::Outcome;

const HELP: &str = "\
Commands:
  add <names>                        add players, separated by commas
  pool                               show the player pool
  size <3-6>                         set players per team
  roles                              show the role slots for the current team size
  record <team 1> | <team 2> | <result>
                                     record a match; names in slot order, result is team1, team2 or draw
  stats <player>                     show a player's streak and recent results
  warnings                           show player warnings
  view                               show the whole session
  reset                              clear all tracked stats and players
  help                               show this help
  quit                               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Add(String),
    Pool,
    Size(usize),
    Roles,
    Record {
        team1: Vec<String>,
        team2: Vec<String>,
        outcome: Outcome,
    },
    Stats(String),
    Warnings,
    View,
    Reset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "add" => ConsoleCommand::Add(rest.to_string()),
        "pool" => ConsoleCommand::Pool,
        "size" => ConsoleCommand::Size(
            rest.parse()
                .with_context(|| format!("Invalid team size '{}'", rest))?,
        ),
        "roles" => ConsoleCommand::Roles,
        "record" => parse_record(rest)?,
        "stats" if !rest.is_empty() => ConsoleCommand::Stats(rest.to_string()),
        "stats" => bail!("Usage: stats <player>"),
        "warnings" => ConsoleCommand::Warnings,
        "view" => ConsoleCommand::View,
        "reset" => ConsoleCommand::Reset,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => bail!("Unknown command '{}', type 'help' for a list", other),
    };
    Ok(command)
}

fn parse_record(rest: &str) -> Result<ConsoleCommand> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [team1, team2, outcome] = parts.as_slice() else {
        bail!("Usage: record <team 1> | <team 2> | <team1|team2|draw>");
    };

    Ok(ConsoleCommand::Record {
        team1: split_roster(team1),
        team2: split_roster(team2),
        outcome: outcome.parse()?,
    })
}

/// Comma-separated slots; blanks are kept so unfilled slots can be reported
fn split_roster(text: &str) -> Vec<String> {
    text.split(',').map(|name| name.trim().to_string()).collect()
}

/// Interactive line-based front end for a single session
pub struct ConsoleService<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleService<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Team Creation and Player Tracking".bold())?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            debug!("Console input: {}", line.trim());
            match parse_command(&line).and_then(|command| self.execute(command)) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => {
                    let message = format!("{}: {:#}", command_context(line.trim()), e);
                    writeln!(self.output, "{}", message.red())?;
                }
            }
        }

        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Returns `false` once the session should end
    fn execute(&mut self, command: ConsoleCommand) -> Result<bool> {
        match command {
            ConsoleCommand::Add(text) => self.add_players(&text)?,
            ConsoleCommand::Pool => {
                writeln!(self.output, "{}", self.session.pool().sorted().join(", "))?;
            }
            ConsoleCommand::Size(size) => {
                self.session.set_team_size(size)?;
                writeln!(self.output, "{}", format!("Team size set to {}.", size).green())?;
            }
            ConsoleCommand::Roles => self.print_roles()?,
            ConsoleCommand::Record {
                team1,
                team2,
                outcome,
            } => {
                self.session.record_match(team1, team2, outcome)?;
                writeln!(self.output, "{}", "Match result recorded successfully!".green())?;
                self.print_warnings()?;
            }
            ConsoleCommand::Stats(player) => self.print_stats(&player)?,
            ConsoleCommand::Warnings => self.print_warnings()?,
            ConsoleCommand::View => write!(self.output, "{}", render(&self.session))?,
            ConsoleCommand::Reset => {
                self.session.reset();
                writeln!(self.output, "{}", "Session reset successfully!".green())?;
            }
            ConsoleCommand::Help => writeln!(self.output, "{}", HELP)?,
            ConsoleCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn add_players(&mut self, text: &str) -> Result<()> {
        let message = match self.session.add_players(text) {
            AddOutcome::Added(count) => {
                format!("Added {} new player(s) to the pool.", count).green()
            }
            AddOutcome::AlreadyPresent => "All entered players were already in the pool.".cyan(),
            AddOutcome::NoValidNames => "No valid player names entered.".yellow(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn print_roles(&mut self) -> Result<()> {
        for team_number in 1..=2 {
            let labels: Vec<String> = team_layout(team_number, self.session.team_size())?
                .iter()
                .map(|slot| slot.to_string())
                .collect();
            writeln!(self.output, "{}", labels.join(", "))?;
        }
        Ok(())
    }

    fn print_stats(&mut self, player: &str) -> Result<()> {
        let name = normalize_name(player);
        let stats = self.session.stats(&name);
        writeln!(
            self.output,
            "{}: {} game(s) in a row, {} win(s) and {} loss(es) in the last {} decisive game(s)",
            name,
            stats.consecutive_games,
            stats.wins,
            stats.losses,
            stats.window_games()
        )?;
        Ok(())
    }

    fn print_warnings(&mut self) -> Result<()> {
        let warnings = self.session.warnings();
        if warnings.is_empty() {
            writeln!(self.output, "{}", NO_WARNINGS.cyan())?;
        }
        for warning in warnings {
            writeln!(self.output, "{}", warning.to_string().yellow())?;
        }
        Ok(())
    }
}
