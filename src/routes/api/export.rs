use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::export::{CSV_CONTENT_TYPE, csv_filename, jobs_to_csv};
use crate::state::AppState;

/// GET /api/v1/export.csv
///
/// Exports the jobs currently exposed by the board view as a download.
pub async fn csv(State(state): State<AppState>) -> impl IntoResponse {
    let window = state.board.read().await.render();
    let content = jobs_to_csv(&window.jobs);
    let filename = csv_filename(Utc::now().date_naive());
    tracing::info!("Exporting {} jobs as {filename}", window.jobs.len());
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
}
