//! Keyword-based market-to-position classification.
//!
//! Infers the offensive position a prop market targets from the provider's
//! market key using case-insensitive substring matching, since provider keys
//! are compound (`player_pass_yards_alternate`) and exact equality would miss
//! most of them.

use crate::market::models::Position;

/// Passing signals, checked first so a compound key never falls through
/// to a broader bucket.
const QB_SIGNALS: &[&str] = &[
    "pass_yards",
    "pass_yds",
    "pass_attempts",
    "pass_completions",
    "pass_tds",
    "pass_td",
];

const RB_SIGNALS: &[&str] = &[
    "rush_yards",
    "rush_yds",
    "rush_attempts",
    "rush_longest",
];

/// Receiving signals map to WR. Tight ends are never distinguished from
/// wide receivers here: the provider key carries no player position, so
/// TE receiving props score against the WR rank. Known limitation, kept.
const WR_SIGNALS: &[&str] = &[
    "receiving_yards",
    "reception_yds",
    "rec_yards",
    "receptions",
    "reception_longest",
];

/// Anytime-TD pools mix positions; WR is the approximation used for the
/// whole pool.
const ANYTIME_TD_SIGNALS: &[&str] = &["anytime_td"];

/// Infer the offensive position from a provider market key.
///
/// Unrecognized keys classify as `Unknown` rather than being rejected;
/// the row builder still emits them with a neutral matchup.
pub fn classify(market_key: &str) -> Position {
    let key = market_key.to_lowercase();

    if contains_any(&key, QB_SIGNALS) {
        return Position::Qb;
    }
    if contains_any(&key, RB_SIGNALS) {
        return Position::Rb;
    }
    if contains_any(&key, WR_SIGNALS) {
        return Position::Wr;
    }
    if contains_any(&key, ANYTIME_TD_SIGNALS) {
        return Position::Wr;
    }

    Position::Unknown
}

/// Check if text contains any of the given keywords.
fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_markets_are_qb() {
        assert_eq!(classify("player_pass_yards"), Position::Qb);
        assert_eq!(classify("player_pass_yds"), Position::Qb);
        assert_eq!(classify("player_pass_attempts"), Position::Qb);
        assert_eq!(classify("player_pass_completions"), Position::Qb);
        assert_eq!(classify("player_pass_tds"), Position::Qb);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("PLAYER_PASS_YARDS"), Position::Qb);
        assert_eq!(classify("Player_Rush_Yards"), Position::Rb);
    }

    #[test]
    fn alternate_lines_match_by_substring() {
        assert_eq!(classify("player_pass_yards_alternate"), Position::Qb);
        assert_eq!(classify("player_reception_yds_alternate"), Position::Wr);
    }

    #[test]
    fn rushing_markets_are_rb() {
        assert_eq!(classify("player_rush_yards"), Position::Rb);
        assert_eq!(classify("player_rush_attempts"), Position::Rb);
        assert_eq!(classify("player_rush_longest"), Position::Rb);
    }

    #[test]
    fn receiving_markets_are_wr() {
        assert_eq!(classify("player_receiving_yards"), Position::Wr);
        assert_eq!(classify("player_receptions"), Position::Wr);
        assert_eq!(classify("player_reception_longest"), Position::Wr);
    }

    #[test]
    fn anytime_td_approximates_to_wr() {
        assert_eq!(classify("player_anytime_td"), Position::Wr);
    }

    #[test]
    fn unrecognized_key_is_unknown() {
        assert_eq!(classify("totally_unknown_market"), Position::Unknown);
        assert_eq!(classify("h2h"), Position::Unknown);
        assert_eq!(classify(""), Position::Unknown);
    }
}
