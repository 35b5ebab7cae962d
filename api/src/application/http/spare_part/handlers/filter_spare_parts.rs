use axum::extract::State;
use concesionaria_core::domain::spare_part::ports::SparePartRepository;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::FilterQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SparePartsResponse {
    pub total: usize,
    #[schema(value_type = Vec<Object>)]
    pub repuestos: Vec<JsonValue>,
}

#[utoipa::path(
    get,
    path = "/filtros",
    tag = "repuestos",
    summary = "Filter spare parts",
    description = "Spare parts matching every supplied criterion, most recently stocked first.",
    params(
        ("categoria" = Option<String>, Query, description = "Exact category"),
        ("precio_min" = Option<f64>, Query, description = "Minimum price"),
        ("precio_max" = Option<f64>, Query, description = "Maximum price"),
        ("estado" = Option<String>, Query, description = "Exact status"),
        ("marca" = Option<String>, Query, description = "Compatible brand; parts marked `todas` always match"),
        ("modelo" = Option<String>, Query, description = "Compatible model; parts marked `todos` always match"),
        ("stock_min" = Option<i64>, Query, description = "Minimum stock"),
        ("buscar" = Option<String>, Query, description = "Substring of name or description"),
    ),
    responses(
        (status = 200, body = SparePartsResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn filter_spare_parts(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<SparePartsResponse>, ApiError> {
    let repuestos = state
        .spare_part_repository
        .filter_spare_parts(request)
        .await
        .map_err(|e| ApiError::internal("Error al filtrar repuestos", e))?;

    Ok(Response::OK(SparePartsResponse {
        total: repuestos.len(),
        repuestos,
    }))
}
