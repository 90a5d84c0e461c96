use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::board::{JobWindow, SalaryRange, SortKey, filter_jobs, sort_jobs, window};
use crate::error::AppError;
use crate::state::AppState;

/// Stateless board query. List parameters are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    pub categories: Option<String>,
    pub locations: Option<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

impl JobQuery {
    pub fn salary_range(&self) -> Result<SalaryRange, AppError> {
        let range = SalaryRange::new(
            self.salary_min.unwrap_or(SalaryRange::FULL.min),
            self.salary_max.unwrap_or(SalaryRange::FULL.max),
        );
        if range.min > range.max {
            return Err(AppError::BadRequest(format!(
                "salary_min ({}) exceeds salary_max ({})",
                range.min, range.max
            )));
        }
        Ok(range)
    }
}

/// GET /api/v1/jobs
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<JobWindow>, AppError> {
    let range = query.salary_range()?;
    let sort: SortKey = query
        .sort
        .as_deref()
        .unwrap_or("date")
        .parse()
        .unwrap_or_default();

    let board = state.board.read().await;
    let filtered = filter_jobs(
        &board.jobs,
        &split_list(query.categories.as_deref()),
        &split_list(query.locations.as_deref()),
        range,
        query.q.as_deref().unwrap_or(""),
    );
    let sorted = sort_jobs(&filtered, sort);
    Ok(Json(window(sorted, query.page.unwrap_or(1))))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// POST /api/v1/search
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> Result<Json<JobWindow>, AppError> {
    Ok(Json(state.search(&input.query).await?))
}

/// POST /api/v1/refresh
pub async fn refresh(State(state): State<AppState>) -> Result<Json<JobWindow>, AppError> {
    state.refresh().await?;
    Ok(Json(state.board.read().await.render()))
}
