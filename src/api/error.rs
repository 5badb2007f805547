use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Failures surfaced by either service.
///
/// Task lookups answer with an `error` key and item lookups with a `detail`
/// key; validation and internal failures always use `detail`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Task not found")]
    TaskNotFound,
    #[error("Item not found")]
    ItemNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TaskNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unparseable path segments answer with a JSON 422 like every other client error.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::TaskNotFound => serde_json::json!({ "error": self.to_string() }),
            Self::Internal(err) => {
                tracing::error!("{:#}", err);
                serde_json::json!({ "detail": "Internal server error" })
            }
            Self::ItemNotFound | Self::Validation(_) => {
                serde_json::json!({ "detail": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
