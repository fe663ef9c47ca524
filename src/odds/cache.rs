//! Short-lived response cache for provider calls.
//!
//! Keyed by endpoint plus the full query parameter set, so repeated UI
//! interactions inside the TTL window reuse the same provider response
//! instead of burning API quota. Entries expire by time only; there is no
//! manual invalidation. The `_at` methods take an explicit clock reading so
//! expiry is testable without sleeping.

use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CacheEntry {
    value: serde_json::Value,
    expires_at: Instant,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&self, key: &str, now: Instant) -> Option<serde_json::Value> {
        self.entries
            .get(key)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: String, value: serde_json::Value) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&mut self, key: String, value: serde_json::Value, now: Instant) {
        // Expired entries are dropped opportunistically on insert.
        self.entries.retain(|_, entry| entry.expires_at > now);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
