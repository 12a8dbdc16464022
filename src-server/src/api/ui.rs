use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};

use crate::{error::ApiError, main_lib::AppState};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

async fn index() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], Html(INDEX_HTML))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let settings = state.projection_service.settings();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "maxTotalDays": settings.max_total_days,
        "valueScale": settings.value_scale,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
