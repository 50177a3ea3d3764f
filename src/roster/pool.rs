use anyhow::{Context, Result};
use log::info;
use regex::Regex;
use std::collections::HashSet;

use crate::tracker::PlayerName;

/// Result of adding a batch of names to the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(usize),
    AlreadyPresent,
    NoValidNames,
}

/// Players available for team selection in the current session
pub struct PlayerPool {
    players: HashSet<PlayerName>,
    separator_regex: Regex,
}

impl PlayerPool {
    pub fn new() -> Result<Self> {
        Ok(Self {
            players: HashSet::new(),
            separator_regex: Self::compile_regex()?,
        })
    }

    /// Add every name found in free text separated by commas or newlines
    pub fn add_from_text(&mut self, text: &str) -> AddOutcome {
        let names = self.parse_names(text);
        if names.is_empty() {
            return AddOutcome::NoValidNames;
        }

        let before = self.players.len();
        self.players.extend(names);
        let added = self.players.len() - before;

        if added == 0 {
            AddOutcome::AlreadyPresent
        } else {
            info!("Added {} new player(s) to the pool", added);
            AddOutcome::Added(added)
        }
    }

    pub fn parse_names(&self, text: &str) -> Vec<PlayerName> {
        self.separator_regex
            .split(text)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(normalize_name)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains(name)
    }

    /// Names ordered case-insensitively, for display and selection
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.iter().map(String::as_str).collect();
        sort_case_insensitive(&mut names);
        names
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"[,\r\n]+").context("Failed to compile player separator regex")
    }
}

/// Upper-case the first character and lower-case the rest
pub fn normalize_name(name: &str) -> PlayerName {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn sort_case_insensitive(names: &mut [&str]) {
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_capitalizes() {
        assert_eq!(normalize_name("  aMY "), "Amy");
        assert_eq!(normalize_name("mary jane"), "Mary jane");
        assert_eq!(normalize_name("élodie"), "Élodie");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_add_from_text_splits_on_commas_and_newlines() {
        let mut pool = PlayerPool::new().unwrap();
        let outcome = pool.add_from_text("amy, BO\ncy,,\n  ,dee");

        assert_eq!(outcome, AddOutcome::Added(4));
        assert_eq!(pool.sorted(), vec!["Amy", "Bo", "Cy", "Dee"]);
    }

    #[test]
    fn test_add_from_text_reports_duplicates_and_blanks() {
        let mut pool = PlayerPool::new().unwrap();
        pool.add_from_text("Amy, Bo");

        assert_eq!(pool.add_from_text("amy\nbo"), AddOutcome::AlreadyPresent);
        assert_eq!(pool.add_from_text(" , \n "), AddOutcome::NoValidNames);
        assert_eq!(pool.add_from_text("bo, Cy"), AddOutcome::Added(1));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_sorted_ignores_case() {
        let mut names = vec!["bo", "Amy", "Cy", "al"];
        sort_case_insensitive(&mut names);
        assert_eq!(names, vec!["al", "Amy", "bo", "Cy"]);
    }
}
