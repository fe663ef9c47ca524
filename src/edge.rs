//! Matchup edge scoring.
//!
//! Maps an opponent's Defense-vs-Position rank to a directional lean and a
//! heuristic magnitude. EdgeScore is matchup-only, not a probability or an
//! expected value.

use rust_decimal::Decimal;

/// Directional recommendation derived purely from opponent rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    Over,
    Under,
    Neutral,
}

impl std::fmt::Display for Lean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Over => write!(f, "Over"),
            Self::Under => write!(f, "Under"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Score a defensive rank (1 = most exploitable, 32 = strongest).
///
/// Ranks 1-8 lean Over with magnitude (9 - rank) * 10, ranks 25-32 lean
/// Under with magnitude (rank - 24) * 10, the middle band is neutral.
/// Pure and total: every rank maps to exactly one (lean, score) pair.
pub fn score(rank: u8) -> (Lean, Decimal) {
    if rank <= 8 {
        (Lean::Over, Decimal::from((9 - rank as i32) * 10))
    } else if rank >= 25 {
        (Lean::Under, Decimal::from((rank as i32 - 24) * 10))
    } else {
        (Lean::Neutral, Decimal::ZERO)
    }
}
