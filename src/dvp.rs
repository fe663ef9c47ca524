//! Defense-vs-Position rank table.
//!
//! Loaded once at startup from a versioned data asset (`data/dvp_ranks.toml`)
//! and immutable afterwards. Rank 1 = most exploitable by the opposing
//! offense, 32 = strongest.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::market::models::Position;

/// Rank used when a team is missing from the table or a market could not be
/// attributed to a position: dead middle of 1..=32, scores as no lean.
pub const NEUTRAL_RANK: u8 = 16;

/// Per-position ranks for one franchise.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionRanks {
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
}

impl PositionRanks {
    pub fn rank(&self, position: Position) -> u8 {
        match position {
            Position::Qb => self.qb,
            Position::Rb => self.rb,
            Position::Wr => self.wr,
            Position::Te => self.te,
            Position::Unknown => NEUTRAL_RANK,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DvpFile {
    teams: HashMap<String, PositionRanks>,
}

/// Static team → per-position rank table, keyed by full franchise name.
#[derive(Debug, Clone)]
pub struct DvpTable {
    teams: HashMap<String, PositionRanks>,
}

impl DvpTable {
    /// Load the table from a TOML data file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read DvP table: {}", path.display()))?;
        let file: DvpFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse DvP table: {}", path.display()))?;
        Ok(Self { teams: file.teams })
    }

    pub fn from_teams(teams: HashMap<String, PositionRanks>) -> Self {
        Self { teams }
    }

    /// Ranks for a team, `None` if the team is not in the table. Never panics.
    pub fn lookup(&self, team: &str) -> Option<&PositionRanks> {
        self.teams.get(team)
    }

    /// Rank for a team and position, falling back to [`NEUTRAL_RANK`] when
    /// the team is absent or the position is unknown.
    pub fn rank_for(&self, team: &str, position: Position) -> u8 {
        self.lookup(team)
            .map(|ranks| ranks.rank(position))
            .unwrap_or(NEUTRAL_RANK)
    }

    /// Team names in alphabetical order, for selection UIs.
    pub fn team_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.teams.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DvpTable {
        DvpTable::load_from("data/dvp_ranks.toml").expect("data/dvp_ranks.toml should load")
    }

    #[test]
    fn asset_contains_all_32_franchises() {
        assert_eq!(table().len(), 32);
    }

    #[test]
    fn known_team_ranks() {
        let table = table();
        let panthers = table.lookup("Carolina Panthers").expect("Panthers present");
        assert_eq!(panthers.qb, 2);
        assert_eq!(panthers.rb, 1);
        assert_eq!(panthers.wr, 10);
        assert_eq!(panthers.te, 2);

        assert_eq!(table.rank_for("Philadelphia Eagles", Position::Qb), 30);
    }

    #[test]
    fn absent_team_is_neutral_for_every_position() {
        let table = table();
        assert!(table.lookup("London Monarchs").is_none());
        for position in [
            Position::Qb,
            Position::Rb,
            Position::Wr,
            Position::Te,
            Position::Unknown,
        ] {
            assert_eq!(table.rank_for("London Monarchs", position), NEUTRAL_RANK);
        }
    }

    #[test]
    fn unknown_position_is_neutral_even_for_known_team() {
        assert_eq!(
            table().rank_for("Carolina Panthers", Position::Unknown),
            NEUTRAL_RANK
        );
    }

    #[test]
    fn each_position_column_is_a_permutation_of_1_to_32() {
        let table = table();
        for position in [Position::Qb, Position::Rb, Position::Wr, Position::Te] {
            let mut column: Vec<u8> = table
                .teams
                .values()
                .map(|ranks| ranks.rank(position))
                .collect();
            column.sort_unstable();
            let expected: Vec<u8> = (1..=32).collect();
            assert_eq!(column, expected, "duplicate or missing rank for {position}");
        }
    }

    #[test]
    fn team_names_are_sorted() {
        let table = table();
        let names = table.team_names();
        assert_eq!(names.len(), 32);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
