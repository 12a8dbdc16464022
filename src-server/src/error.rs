use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use growthcalc_core::errors::Error as CoreError;
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Core(CoreError::InputParse(e)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid input format").with_detail(e),
            ),
            ApiError::Core(CoreError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(e.to_string()))
            }
            ApiError::Core(CoreError::Calculation(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody::new("Projection could not be calculated").with_detail(e),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::new("Not found")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Core(CoreError::Calculation(e)) => tracing::warn!(error = %e, "projection failed"),
            ApiError::Core(e) => tracing::info!(error = %e, "rejected projection request"),
            ApiError::NotFound => {}
        }
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
