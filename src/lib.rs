//! NFL player-prop edge scanner.
//!
//! Cross-references live sportsbook player-prop lines with a static
//! Defense-vs-Position rank table to produce a heuristic edge score per
//! prop. The score is matchup-only; blend in projections before treating
//! it as expected value.

pub mod config;
pub mod dvp;
pub mod edge;
pub mod error;
pub mod logger;
pub mod market;
pub mod odds;
pub mod report;
