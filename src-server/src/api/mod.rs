use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub mod projection;
pub mod ui;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .nest("/api", projection::router().merge(ui::api_router()))
        .merge(ui::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(ui::not_found)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config.cors_origins() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!("ignoring invalid CORS origin {:?}", o);
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}
