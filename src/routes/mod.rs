pub mod api;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(api::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
