use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No hay una ruta configurada para {0}")]
    NoRoute(String),

    #[error("{0}")]
    Body(#[from] axum::Error),

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GatewayErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            GatewayError::NoRoute(_) => (StatusCode::NOT_FOUND, "Ruta no encontrada"),
            GatewayError::Body(_) | GatewayError::Upstream(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno en el Gateway")
            }
        };

        (
            status,
            Json(GatewayErrorResponse {
                error,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
