use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::edge::Lean;

/// Offensive position a prop market is attributed to.
///
/// Variant order drives the presentation sort (QB first, unclassified last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    Unknown,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qb => write!(f, "QB"),
            Self::Rb => write!(f, "RB"),
            Self::Wr => write!(f, "WR"),
            Self::Te => write!(f, "TE"),
            Self::Unknown => write!(f, "?"),
        }
    }
}

/// An upcoming game as returned by the events endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
}

impl Event {
    /// The team in this event that is not `team`, or `None` if `team`
    /// is not playing in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home_team == team {
            Some(&self.away_team)
        } else if self.away_team == team {
            Some(&self.home_team)
        } else {
            None
        }
    }
}

/// Player-prop odds for one event: event → bookmakers → markets → outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct EventOdds {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerOdds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerOdds {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<MarketOdds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketOdds {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// A single prop line. The provider omits `point` for some market types and
/// occasionally `price`; absent is meaningfully different from zero, so both
/// stay optional all the way to the rendered row.
#[derive(Debug, Clone, Deserialize)]
pub struct Outcome {
    pub name: String,
    /// Player name for player-prop markets.
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub point: Option<Decimal>,
}

impl Outcome {
    /// Player-prop outcomes carry the player in `description`; fall back to
    /// `name` for anything that doesn't.
    pub fn player(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

/// One fully resolved row of the edge table: (bookmaker, market, outcome)
/// enriched with position, opponent rank, and the scored lean. Built fresh
/// per fetch cycle, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PropRow {
    pub bookmaker: String,
    pub market_key: String,
    pub player: String,
    pub point: Option<Decimal>,
    pub price: Option<Decimal>,
    pub position: Position,
    pub opp_rank: u8,
    pub lean: Lean,
    pub edge_score: Decimal,
}
