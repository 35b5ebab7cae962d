use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A query failed; `context` names the operation, `message` carries the cause.
    #[error("{context}: {message}")]
    InternalServerError {
        context: &'static str,
        message: String,
    },

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn internal(context: &'static str, error: impl ToString) -> Self {
        ApiError::InternalServerError {
            context,
            message: error.to_string(),
        }
    }
}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::InternalServerError { context, message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string(), message)
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, "Ruta no encontrada".to_string(), message)
            }
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error,
                message,
            }),
        )
            .into_response()
    }
}
