use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub odds_api: OddsApiConfig,
    pub scan: ScanConfig,
    pub rate_limit: RateLimitConfig,
    pub monitoring: MonitoringConfig,
    pub dvp: DvpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    pub base_url: String,
    /// Provider sport key, e.g. `americanfootball_nfl`.
    pub sport: String,
    pub regions: Vec<String>,
    pub request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl OddsApiConfig {
    /// Comma-joined regions selector as the provider expects it.
    pub fn regions_param(&self) -> String {
        self.regions.join(",")
    }
}

/// One configurable scan pipeline instead of the parallel per-bookmaker
/// page variants the tool grew out of.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub primary_bookmaker: String,
    /// Queried in order only while no bookmaker has yielded rows.
    #[serde(default)]
    pub fallback_bookmakers: Vec<String>,
    /// Provider market keys requested from the props endpoint.
    pub markets: Vec<String>,
    #[serde(default)]
    pub diagnostics: bool,
}

impl ScanConfig {
    /// Primary bookmaker followed by the fallbacks, in query order.
    pub fn bookmaker_order(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_bookmaker.as_str())
            .chain(self.fallback_bookmakers.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DvpConfig {
    /// Path to the versioned DvP rank asset.
    pub path: String,
}

/// Secrets loaded exclusively from environment variables.
/// Not serializable, not stored in config files.
pub struct Secrets {
    pub odds_api_key: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            odds_api_key: std::env::var("ODDS_API_KEY").ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, overlaying environment variables
    /// for secrets.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, Secrets)> {
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let secrets = Secrets::from_env();

        Ok((config, secrets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_config() {
        let contents = std::fs::read_to_string("config/default.toml")
            .expect("config/default.toml should exist");
        let config: AppConfig = toml::from_str(&contents).expect("should parse");
        assert_eq!(config.odds_api.sport, "americanfootball_nfl");
        assert_eq!(config.odds_api.request_timeout_secs, 20);
        assert_eq!(config.scan.primary_bookmaker, "fanduel");
        assert!(!config.scan.markets.is_empty());
    }

    #[test]
    fn test_regions_param_joins_with_commas() {
        let cfg = OddsApiConfig {
            base_url: "https://api.the-odds-api.com/v4".to_string(),
            sport: "americanfootball_nfl".to_string(),
            regions: vec!["us".to_string(), "us2".to_string()],
            request_timeout_secs: 20,
            cache_ttl_secs: 120,
        };
        assert_eq!(cfg.regions_param(), "us,us2");
    }

    #[test]
    fn test_bookmaker_order_starts_with_primary() {
        let scan = ScanConfig {
            primary_bookmaker: "fanduel".to_string(),
            fallback_bookmakers: vec!["draftkings".to_string(), "betmgm".to_string()],
            markets: vec![],
            diagnostics: false,
        };
        let order: Vec<&str> = scan.bookmaker_order().collect();
        assert_eq!(order, vec!["fanduel", "draftkings", "betmgm"]);
    }
}
