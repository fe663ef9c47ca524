//! The Odds API client.
//!
//! Two read-only operations: upcoming events for the sport, and player-prop
//! markets for one event. Calls are rate limited, cached for a short TTL,
//! and never retried: a failed call surfaces to the caller immediately.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::{OddsApiConfig, RateLimitConfig};
use crate::error::{EdgeError, Result};
use crate::market::models::{Event, EventOdds};
use crate::odds::cache::ResponseCache;

type Limiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

pub struct OddsClient {
    http: reqwest::Client,
    base_url: String,
    sport: String,
    regions: String,
    api_key: String,
    limiter: Arc<Limiter>,
    /// Single execution context in scope; the lock is never held across a
    /// request await.
    cache: Mutex<ResponseCache>,
}

impl OddsClient {
    /// Build a client. An empty key fails the precondition up front so the
    /// provider is never called with a blank credential.
    pub fn new(cfg: &OddsApiConfig, rate: &RateLimitConfig, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(EdgeError::MissingCredential);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            sport: cfg.sport.clone(),
            regions: cfg.regions_param(),
            api_key,
            limiter: create_rate_limiter(rate),
            cache: Mutex::new(ResponseCache::new(Duration::from_secs(cfg.cache_ttl_secs))),
        })
    }

    /// Fetch all upcoming events for the configured sport.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let url = format!("{}/sports/{}/odds", self.base_url, self.sport);
        let params = [
            ("apiKey", self.api_key.clone()),
            ("regions", self.regions.clone()),
            ("markets", "h2h".to_string()),
        ];
        let value = self.get_json(&url, &params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch player-prop markets for one event, restricted to a single
    /// bookmaker and the requested market keys.
    pub async fn list_event_props(
        &self,
        event_id: &str,
        bookmaker: &str,
        markets: &[String],
    ) -> Result<EventOdds> {
        let url = format!(
            "{}/sports/{}/events/{}/odds",
            self.base_url, self.sport, event_id
        );
        let params = [
            ("apiKey", self.api_key.clone()),
            ("regions", self.regions.clone()),
            ("bookmakers", bookmaker.to_string()),
            ("markets", markets.join(",")),
        ];
        let value = self.get_json(&url, &params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Issue a GET through the cache and rate limiter. Non-2xx responses
    /// become `EdgeError::Http` with status and body; transport failures
    /// (including the request timeout) become `EdgeError::Transport`.
    async fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        let cache_key = cache_key(url, params);

        {
            let cache = self.cache.lock().await;
            if let Some(hit) = cache.get(&cache_key) {
                debug!(url, "odds API cache hit");
                return Ok(hit);
            }
        }

        self.limiter.until_ready().await;

        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EdgeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response.json().await?;
        self.cache.lock().await.insert(cache_key, value.clone());
        Ok(value)
    }
}

/// Cache key: endpoint plus the full parameter set.
fn cache_key(url: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", url, query.join("&"))
}

fn create_rate_limiter(config: &RateLimitConfig) -> Arc<Limiter> {
    let rps = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::new(5).unwrap());
    let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::new(10).unwrap());

    let quota = Quota::per_second(rps).allow_burst(burst);
    Arc::new(RateLimiter::direct(quota))
}
