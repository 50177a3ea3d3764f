use anyhow::{bail, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tank,
    Dps,
    Support,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Dps, Role::Support];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Tank => "Tank",
            Role::Dps => "DPS",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable position in a team, e.g. "Team 1 DPS 2"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub team_number: u8,
    pub role: Role,
    /// 1-based index within the role
    pub index: usize,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {} {} {}", self.team_number, self.role, self.index)
    }
}

/// Number of tank, DPS and support slots for a team size
pub fn role_counts(team_size: usize) -> Result<[usize; 3]> {
    let counts = match team_size {
        3 => [1, 1, 1],
        4 => [1, 1, 2],
        5 => [1, 2, 2],
        6 => [2, 2, 2],
        _ => bail!("Unsupported team size {}, expected 3 to 6 players", team_size),
    };
    Ok(counts)
}

/// Slots of one team in selection order: tanks, then DPS, then supports
pub fn team_layout(team_number: u8, team_size: usize) -> Result<Vec<Slot>> {
    let counts = role_counts(team_size)?;

    let slots = Role::ALL
        .iter()
        .zip(counts)
        .flat_map(|(&role, count)| {
            (1..=count).map(move |index| Slot {
                team_number,
                role,
                index,
            })
        })
        .collect();

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_counts_per_team_size() {
        assert_eq!(role_counts(3).unwrap(), [1, 1, 1]);
        assert_eq!(role_counts(4).unwrap(), [1, 1, 2]);
        assert_eq!(role_counts(5).unwrap(), [1, 2, 2]);
        assert_eq!(role_counts(6).unwrap(), [2, 2, 2]);
        assert!(role_counts(2).is_err());
        assert!(role_counts(7).is_err());
    }

    #[test]
    fn test_team_layout_labels() {
        let labels: Vec<String> = team_layout(2, 5)
            .unwrap()
            .iter()
            .map(|slot| slot.to_string())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Team 2 Tank 1",
                "Team 2 DPS 1",
                "Team 2 DPS 2",
                "Team 2 Support 1",
                "Team 2 Support 2",
            ]
        );
    }
}
