use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Job;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently published first.
    #[default]
    Date,
    /// Highest salary first; undisclosed counts as zero.
    Salary,
    /// Keeps source order. Unknown keys land here.
    #[serde(other)]
    Relevance,
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Unknown keys fall back to `Relevance`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "date" => SortKey::Date,
            "salary" => SortKey::Salary,
            _ => SortKey::Relevance,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Date => "date",
            SortKey::Salary => "salary",
            SortKey::Relevance => "relevance",
        };
        f.write_str(s)
    }
}

/// Return a reordered copy of `jobs`. The sort is stable, so ties keep
/// their input order. Unparsable publish dates sort after every valid one.
pub fn sort_jobs(jobs: &[Job], key: SortKey) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    match key {
        SortKey::Date => sorted.sort_by_key(|job| Reverse(job.published_at())),
        SortKey::Salary => sorted.sort_by_key(|job| Reverse(job.salary_or_zero())),
        SortKey::Relevance => {}
    }
    sorted
}
