//! Prop table aggregation.
//!
//! Chains the per-interaction pipeline: pick the selected team's upcoming
//! event, fetch props per bookmaker with fallback, classify and score every
//! outcome against the opponent's DvP ranks, and sort for presentation.

use tracing::{info, instrument, warn};

use crate::config::ScanConfig;
use crate::dvp::{DvpTable, PositionRanks};
use crate::edge;
use crate::error::{EdgeError, Result};
use crate::market::classifier;
use crate::market::models::{Event, EventOdds, PropRow};
use crate::odds::client::OddsClient;

/// The first upcoming event the team plays in, if any. Passed explicitly
/// through the pipeline; there is no ambient "current event" state.
pub fn select_event<'a>(events: &'a [Event], team: &str) -> Option<&'a Event> {
    events
        .iter()
        .find(|event| event.home_team == team || event.away_team == team)
}

/// A prop fetch that failed for one bookmaker without failing the report.
#[derive(Debug)]
pub struct BookmakerFailure {
    pub bookmaker: String,
    pub error: EdgeError,
}

/// Everything the presentation shell needs for one interaction. An empty
/// `rows` is a valid informational outcome, not an error.
#[derive(Debug)]
pub struct PropReport {
    pub event: Event,
    pub opponent: String,
    /// `None` when the opponent is missing from the DvP table; every row
    /// then carries the neutral rank.
    pub opponent_ranks: Option<PositionRanks>,
    pub rows: Vec<PropRow>,
    pub bookmaker_errors: Vec<BookmakerFailure>,
}

impl PropReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flatten a provider props response into scored rows for one bookmaker.
///
/// Bookmakers beyond the requested one are skipped, not errored; the
/// provider may return more than was asked for. Unclassified markets are
/// kept with a neutral matchup, and absent point/price stay absent.
pub fn build_rows(
    odds: &EventOdds,
    opponent: &str,
    bookmaker: &str,
    dvp: &DvpTable,
) -> Vec<PropRow> {
    let mut rows = Vec::new();

    for bm in &odds.bookmakers {
        if bm.key != bookmaker {
            continue;
        }
        for market in &bm.markets {
            let position = classifier::classify(&market.key);
            let rank = dvp.rank_for(opponent, position);
            let (lean, edge_score) = edge::score(rank);

            for outcome in &market.outcomes {
                rows.push(PropRow {
                    bookmaker: bm.key.clone(),
                    market_key: market.key.clone(),
                    player: outcome.player().to_string(),
                    point: outcome.point,
                    price: outcome.price,
                    position,
                    opp_rank: rank,
                    lean,
                    edge_score,
                });
            }
        }
    }

    rows
}

/// Default presentation order: bookmaker ascending, edge score descending,
/// position ascending. Stable, so ties keep provider order.
pub fn sort_rows(rows: &mut [PropRow]) {
    rows.sort_by(|a, b| {
        a.bookmaker
            .cmp(&b.bookmaker)
            .then_with(|| b.edge_score.cmp(&a.edge_score))
            .then_with(|| a.position.cmp(&b.position))
    });
}

/// Run the full pipeline for one team.
///
/// The events fetch is fatal on failure (no partial event list is useful).
/// Prop fetches are per-bookmaker: a failing bookmaker is recorded in
/// `bookmaker_errors` while the rest still contribute rows, and fallback
/// bookmakers are only queried while no rows have been collected yet.
#[instrument(skip(client, dvp, scan))]
pub async fn build_report(
    client: &OddsClient,
    dvp: &DvpTable,
    team: &str,
    scan: &ScanConfig,
) -> Result<PropReport> {
    let events = client.list_events().await?;
    info!(count = events.len(), "events fetched");

    let Some(event) = select_event(&events, team).cloned() else {
        return Err(EdgeError::NoMatchingEvent {
            team: team.to_string(),
        });
    };
    let Some(opponent) = event.opponent_of(team).map(str::to_string) else {
        return Err(EdgeError::NoMatchingEvent {
            team: team.to_string(),
        });
    };

    let opponent_ranks = dvp.lookup(&opponent).copied();
    if opponent_ranks.is_none() {
        warn!(%opponent, "opponent not in DvP table, using neutral matchup");
    }

    let mut rows = Vec::new();
    let mut bookmaker_errors = Vec::new();

    for bookmaker in scan.bookmaker_order() {
        if !rows.is_empty() {
            break;
        }
        match client
            .list_event_props(&event.id, bookmaker, &scan.markets)
            .await
        {
            Ok(odds) => {
                let built = build_rows(&odds, &opponent, bookmaker, dvp);
                info!(bookmaker, rows = built.len(), "props fetched");
                rows.extend(built);
            }
            Err(error) => {
                warn!(bookmaker, error = %error, "props fetch failed");
                bookmaker_errors.push(BookmakerFailure {
                    bookmaker: bookmaker.to_string(),
                    error,
                });
            }
        }
    }

    sort_rows(&mut rows);

    Ok(PropReport {
        event,
        opponent,
        opponent_ranks,
        rows,
        bookmaker_errors,
    })
}
