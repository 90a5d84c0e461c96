// Job sources. The only shipped source is the mock generator; a real
// scraper would implement the same trait.

pub mod mock;
pub mod sequence;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::Job;

pub use mock::MockSource;
pub use sequence::{FetchSequence, FetchTicket};

/// Trait that all job sources must implement.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Fetch the current postings. A non-empty `query` restricts the
    /// result to jobs matching it. Failures never carry partial results.
    async fn fetch_jobs(&self, query: Option<&str>) -> Result<Vec<Job>, AppError>;
}

/// Keep only jobs matching `query`; `None` or empty keeps everything.
pub fn restrict_to_query(jobs: Vec<Job>, query: Option<&str>) -> Vec<Job> {
    match query {
        Some(q) if !q.is_empty() => jobs.into_iter().filter(|j| j.matches_query(q)).collect(),
        _ => jobs,
    }
}
