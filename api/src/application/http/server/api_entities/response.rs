use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Successful reply. The body's fields are flattened next to `success: true`.
#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (
                StatusCode::OK,
                Json(Envelope {
                    success: true,
                    body,
                }),
            )
                .into_response(),
        }
    }
}
