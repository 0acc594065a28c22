//! Error types for the server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_stack::Report;
use obesity_dash::DashError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Report<DashError>> for ServerError {
    fn from(report: Report<DashError>) -> Self {
        match report.current_context() {
            DashError::InvalidInput(msg) => {
                warn!(%msg, "rejected selection");
                ServerError::BadRequest(msg.clone())
            }
            other => {
                error!(?report, "failed to build dashboard");
                ServerError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
