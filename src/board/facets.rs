use serde::Serialize;

use crate::models::Job;

/// Salary ceiling offered when no job discloses a salary.
pub const DEFAULT_MAX_SALARY: u64 = 1_000_000;

/// Filter choices available for the current job list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub max_salary: u64,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

impl Facets {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut categories = Vec::new();
        let mut locations = Vec::new();
        for job in jobs {
            push_unique(&mut categories, &job.category);
            push_unique(&mut locations, &job.location);
        }
        let max_salary = jobs
            .iter()
            .filter_map(|j| j.salary)
            .max()
            .unwrap_or(DEFAULT_MAX_SALARY);
        Self {
            categories,
            locations,
            max_salary,
        }
    }
}
