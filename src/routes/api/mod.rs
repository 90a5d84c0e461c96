pub mod export;
pub mod jobs;
pub mod stats;
pub mod view;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Board queries
        .route("/jobs", get(jobs::list))
        .route("/search", post(jobs::search))
        .route("/refresh", post(jobs::refresh))
        // View state
        .route("/view", get(view::get).patch(view::update))
        .route("/view/more", post(view::more))
        .route("/view/reset", post(view::reset))
        // Aggregates
        .route("/facets", get(stats::facets))
        .route("/stats", get(stats::stats))
        // Export
        .route("/export.csv", get(export::csv))
        .with_state(state);

    Router::new().nest("/api/v1", api)
}
