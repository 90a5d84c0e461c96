use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::error::AppError;
use crate::models::Job;
use crate::store::KeyValueStore;

pub const JOBS_KEY: &str = "angojob_cached_jobs";
pub const TIMESTAMP_KEY: &str = "angojob_cache_timestamp";

/// Cached lists older than this are treated as absent.
pub const CACHE_TTL_MS: i64 = 86_400_000;

/// Single-entry, time-boxed cache of the last fetched job list.
#[derive(Clone)]
pub struct JobCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl JobCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ttl: Duration::milliseconds(CACHE_TTL_MS),
        }
    }

    pub fn save(&self, jobs: &[Job]) -> Result<(), AppError> {
        self.save_at(jobs, Utc::now())
    }

    /// Replace the cached list and its timestamp in one store write.
    pub fn save_at(&self, jobs: &[Job], now: DateTime<Utc>) -> Result<(), AppError> {
        let payload = serde_json::to_string(jobs)
            .map_err(|e| AppError::Internal(format!("Failed to serialize jobs: {e}")))?;
        self.store.set_many(&[
            (JOBS_KEY, payload),
            (TIMESTAMP_KEY, now.timestamp_millis().to_string()),
        ])?;
        tracing::debug!("Cached {} jobs", jobs.len());
        Ok(())
    }

    pub fn load(&self) -> Option<Vec<Job>> {
        self.load_at(Utc::now())
    }

    /// Cached list, unless a key is missing, the entry has expired, or the
    /// payload is unreadable. Failures are logged and read as a miss.
    pub fn load_at(&self, now: DateTime<Utc>) -> Option<Vec<Job>> {
        let (payload, timestamp) = match (self.store.get(JOBS_KEY), self.store.get(TIMESTAMP_KEY))
        {
            (Ok(Some(p)), Ok(Some(t))) => (p, t),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Failed to read job cache: {e}");
                return None;
            }
            _ => return None,
        };

        let saved_ms = match timestamp.trim().parse::<i64>() {
            Ok(ms) => ms,
            Err(e) => {
                tracing::warn!("Invalid job cache timestamp {timestamp:?}: {e}");
                return None;
            }
        };
        let Some(age) = now.timestamp_millis().checked_sub(saved_ms) else {
            tracing::warn!("Invalid job cache timestamp {timestamp:?}: out of range");
            return None;
        };
        if age > self.ttl.num_milliseconds() {
            tracing::debug!("Job cache expired ({age} ms old)");
            return None;
        }

        match serde_json::from_str::<Vec<Job>>(&payload) {
            Ok(jobs) => Some(jobs),
            Err(e) => {
                tracing::warn!("Failed to deserialize cached jobs: {e}");
                None
            }
        }
    }
}
