use serde::{Deserialize, Serialize};

use super::filter::{SalaryRange, filter_jobs};
use super::sort::{SortKey, sort_jobs};
use crate::models::Job;

/// Records revealed per infinite-scroll increment.
pub const PAGE_SIZE: usize = 12;

/// Exposed prefix of a filtered and sorted list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobWindow {
    pub jobs: Vec<Job>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

/// Take the first `page` increments of an already sorted list.
pub fn window(mut sorted: Vec<Job>, page: usize) -> JobWindow {
    let page = page.max(1);
    let total = sorted.len();
    let limit = page.saturating_mul(PAGE_SIZE);
    sorted.truncate(limit);
    JobWindow {
        jobs: sorted,
        total,
        page,
        has_more: total > limit,
    }
}

/// Criteria and scroll position of the board. Every criteria change
/// collapses the window back to one increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub salary_range: SalaryRange,
    pub query: String,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            locations: Vec::new(),
            salary_range: SalaryRange::FULL,
            query: String::new(),
            sort: SortKey::Date,
            page: 1,
        }
    }
}

/// Partial update of a [`ViewState`], applied field by field.
#[derive(Debug, Default, Deserialize)]
pub struct ViewUpdate {
    pub toggle_category: Option<String>,
    pub toggle_location: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub query: Option<String>,
    pub sort: Option<SortKey>,
}

fn toggle(selection: &mut Vec<String>, value: String) {
    if let Some(pos) = selection.iter().position(|v| *v == value) {
        selection.remove(pos);
    } else {
        selection.push(value);
    }
}

impl ViewState {
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        toggle(&mut self.categories, category.into());
        self.page = 1;
    }

    pub fn toggle_location(&mut self, location: impl Into<String>) {
        toggle(&mut self.locations, location.into());
        self.page = 1;
    }

    pub fn set_salary_range(&mut self, range: SalaryRange) {
        self.salary_range = range;
        self.page = 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn apply(&mut self, update: ViewUpdate) {
        if let Some(category) = update.toggle_category {
            self.toggle_category(category);
        }
        if let Some(location) = update.toggle_location {
            self.toggle_location(location);
        }
        if let Some(range) = update.salary_range {
            self.set_salary_range(range);
        }
        if let Some(query) = update.query {
            self.set_query(query);
        }
        if let Some(sort) = update.sort {
            self.set_sort(sort);
        }
    }

    /// Clear selections and query; the salary range spans `[0, max_salary]`.
    pub fn reset(&mut self, max_salary: u64) {
        self.categories.clear();
        self.locations.clear();
        self.salary_range = SalaryRange::up_to(max_salary);
        self.query.clear();
        self.page = 1;
    }

    /// Reveal one more increment if the current window hides records.
    /// Returns whether the window grew.
    pub fn load_more(&mut self, jobs: &[Job]) -> bool {
        let total = self.matching(jobs).len();
        if total > self.page * PAGE_SIZE {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Every job passing the criteria, in display order.
    pub fn matching(&self, jobs: &[Job]) -> Vec<Job> {
        let filtered = filter_jobs(
            jobs,
            &self.categories,
            &self.locations,
            self.salary_range,
            &self.query,
        );
        sort_jobs(&filtered, self.sort)
    }

    pub fn render(&self, jobs: &[Job]) -> JobWindow {
        window(self.matching(jobs), self.page)
    }
}
