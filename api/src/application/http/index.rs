use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    summary = "Describe this service",
    responses(
        (status = 200, body = IndexResponse)
    )
)]
pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    let service = state.args.server.service;
    let root_path = &state.args.server.root_path;

    Json(IndexResponse {
        message: format!("✅ {} funcionando", service.description()),
        endpoints: service
            .endpoints()
            .iter()
            .map(|(path, summary)| format!("GET {root_path}{path} - {summary}"))
            .collect(),
    })
}

pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
