use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TarotError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid reference catalog: {0}")]
    InvalidCatalog(String),

    #[error("Malformed draw request: {0}")]
    MalformedDraw(String),

    #[error("Request body rejected: {message}")]
    BodyRejected { status: StatusCode, message: String },
}

impl From<figment::Error> for TarotError {
    fn from(e: figment::Error) -> Self {
        TarotError::Config(Box::new(e))
    }
}

impl IntoResponse for TarotError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            TarotError::MalformedDraw(_) => StatusCode::BAD_REQUEST,
            TarotError::BodyRejected { status, .. } => *status,
            TarotError::DatabaseError(e) => {
                error!(error = %e, "store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            TarotError::Json(_)
            | TarotError::Io(_)
            | TarotError::Config(_)
            | TarotError::InvalidCatalog(_) => {
                error!(error = %self, "unexpected error while serving request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ApiErrorBody::new(self.to_string()))).into_response()
    }
}

/// Error body shared by every failing endpoint: `{"status":"error","message":...}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub status: String,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
