use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use growthcalc_core::projection::{ProjectionConfig, ProjectionResult};

use crate::{error::ApiResult, main_lib::AppState};

/// Compute the day-by-day projection for the posted configuration.
///
/// The body is read as JSON whatever its content type, so plain form posts
/// from older pages keep working.
async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProjectionResult>> {
    let config = ProjectionConfig::from_slice(&body)?;
    let projection = state.projection_service.calculate(&config)?;
    tracing::debug!(
        total_days = projection.summary.total_days,
        "calculated projection"
    );
    Ok(Json(ProjectionResult::from(projection)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calculate", post(calculate))
}
