use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Inclusive salary bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

impl SalaryRange {
    pub const FULL: SalaryRange = SalaryRange {
        min: 0,
        max: u64::MAX,
    };

    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn up_to(max: u64) -> Self {
        Self { min: 0, max }
    }

    pub fn contains(&self, salary: u64) -> bool {
        self.min <= salary && salary <= self.max
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Narrow `jobs` to those passing every active criterion. Empty selections
/// and an empty query are no-ops; jobs without a salary always pass the
/// salary check. Input order is preserved.
pub fn filter_jobs(
    jobs: &[Job],
    categories: &[String],
    locations: &[String],
    salary_range: SalaryRange,
    search_query: &str,
) -> Vec<Job> {
    jobs.iter()
        .filter(|job| categories.is_empty() || categories.contains(&job.category))
        .filter(|job| locations.is_empty() || locations.contains(&job.location))
        .filter(|job| job.salary.is_none_or(|s| salary_range.contains(s)))
        .filter(|job| job.matches_query(search_query))
        .cloned()
        .collect()
}
