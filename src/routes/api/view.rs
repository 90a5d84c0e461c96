use axum::Json;
use axum::extract::State;

use crate::board::{JobWindow, ViewUpdate};
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/v1/view
pub async fn get(State(state): State<AppState>) -> Json<JobWindow> {
    Json(state.board.read().await.render())
}

/// PATCH /api/v1/view
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<ViewUpdate>,
) -> Result<Json<JobWindow>, AppError> {
    if let Some(range) = input.salary_range
        && range.min > range.max
    {
        return Err(AppError::BadRequest("Invalid salary range".to_string()));
    }
    let mut board = state.board.write().await;
    board.view.apply(input);
    Ok(Json(board.render()))
}

/// POST /api/v1/view/more
pub async fn more(State(state): State<AppState>) -> Json<JobWindow> {
    let mut board = state.board.write().await;
    let board = &mut *board;
    if !board.view.load_more(&board.jobs) {
        tracing::debug!("Window already shows every matching job");
    }
    Json(board.render())
}

/// POST /api/v1/view/reset
pub async fn reset(State(state): State<AppState>) -> Json<JobWindow> {
    let mut board = state.board.write().await;
    let max_salary = board.facets().max_salary;
    board.view.reset(max_salary);
    Json(board.render())
}
