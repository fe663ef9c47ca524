use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use props_edge::config::AppConfig;
use props_edge::dvp::DvpTable;
use props_edge::error::EdgeError;
use props_edge::logger;
use props_edge::odds::client::OddsClient;
use props_edge::report::{self, PropReport};

#[derive(Debug, Parser)]
#[command(
    name = "props-edge",
    about = "NFL player-prop edge scanner using Defense-vs-Position matchup ranks"
)]
struct Cli {
    /// Offensive team to scan, by full franchise name. Omit to list teams.
    #[arg(long)]
    team: Option<String>,

    #[arg(long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Overrides the ODDS_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,

    /// Print full per-bookmaker failure details.
    #[arg(long)]
    diagnostics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, secrets) = AppConfig::load(&cli.config)?;

    logger::init_logging(&config.monitoring)?;

    let dvp = DvpTable::load_from(&config.dvp.path)?;

    let Some(team) = cli.team else {
        println!("Select a team with --team. Known teams:");
        for name in dvp.team_names() {
            println!("  {name}");
        }
        return Ok(());
    };

    let api_key = cli
        .api_key
        .or(secrets.odds_api_key)
        .filter(|key| !key.trim().is_empty())
        .ok_or(EdgeError::MissingCredential)?;

    let client = OddsClient::new(&config.odds_api, &config.rate_limit, api_key)?;

    tracing::info!(%team, "scanning props");
    let report = report::build_report(&client, &dvp, &team, &config.scan).await?;

    render(&report, cli.diagnostics || config.scan.diagnostics);
    Ok(())
}

fn render(report: &PropReport, diagnostics: bool) {
    let event = &report.event;
    println!(
        "Next game: {} at {} ({})",
        event.away_team,
        event.home_team,
        event.commence_time.format("%Y-%m-%d %H:%M UTC")
    );
    println!("Opponent: {}", report.opponent);
    match &report.opponent_ranks {
        Some(ranks) => println!(
            "Opponent DvP ranks: QB {}  RB {}  WR {}  TE {}",
            ranks.qb, ranks.rb, ranks.wr, ranks.te
        ),
        None => println!("Opponent DvP ranks: QB ?  RB ?  WR ?  TE ?  (not in table, neutral matchup)"),
    }
    println!();

    for failure in &report.bookmaker_errors {
        println!(
            "props fetch failed for {}: {}",
            failure.bookmaker, failure.error
        );
        if diagnostics {
            println!("  detail: {:?}", failure.error);
        }
    }

    if report.is_empty() {
        println!("No props returned for the requested markets yet.");
        return;
    }

    println!(
        "{:<12} {:<32} {:<24} {:>8} {:>8}  {:<3} {:>4}  {:<7} {:>5}",
        "Book", "Market", "Player", "Line", "Price", "Pos", "Rank", "Lean", "Edge"
    );
    for row in &report.rows {
        println!(
            "{:<12} {:<32} {:<24} {:>8} {:>8}  {:<3} {:>4}  {:<7} {:>5}",
            row.bookmaker,
            row.market_key,
            row.player,
            fmt_opt(row.point),
            fmt_opt(row.price),
            row.position.to_string(),
            row.opp_rank,
            row.lean.to_string(),
            row.edge_score
        );
    }
}

/// Absent lines and prices render as a dash, never as zero.
fn fmt_opt(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
