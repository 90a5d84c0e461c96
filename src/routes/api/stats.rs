use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::board::{ChartSpec, Facets, Statistics};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: Statistics,
    pub charts: Vec<ChartSpec>,
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = Statistics::from_jobs(&state.board.read().await.jobs);
    let charts = stats.charts();
    Json(StatsResponse { stats, charts })
}

/// GET /api/v1/facets
pub async fn facets(State(state): State<AppState>) -> Json<Facets> {
    Json(state.board.read().await.facets())
}
