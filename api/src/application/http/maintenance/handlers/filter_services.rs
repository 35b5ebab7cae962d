use axum::extract::State;
use concesionaria_core::domain::maintenance::ports::MaintenanceRepository;
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
pub struct ServicesResponse {
    pub total: usize,
    #[schema(value_type = Vec<Object>)]
    pub servicios: Vec<JsonValue>,
}

#[utoipa::path(
    get,
    path = "/filtros",
    tag = "servicios",
    summary = "Filter maintenance services",
    description = "Services matching every supplied criterion, ordered by category and name.",
    params(
        ("categoria" = Option<String>, Query, description = "Exact category"),
        ("precio_min" = Option<f64>, Query, description = "Minimum labour price"),
        ("precio_max" = Option<f64>, Query, description = "Maximum labour price"),
        ("estado" = Option<String>, Query, description = "Exact status"),
        ("requiere_repuestos" = Option<bool>, Query, description = "`true` or `false`"),
        ("tiempo_max" = Option<i64>, Query, description = "Maximum estimated minutes"),
        ("buscar" = Option<String>, Query, description = "Substring of name or description"),
    ),
    responses(
        (status = 200, body = ServicesResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn filter_services(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<ServicesResponse>, ApiError> {
    let servicios = state
        .maintenance_repository
        .filter_services(request)
        .await
        .map_err(|e| ApiError::internal("Error al filtrar servicios", e))?;

    Ok(Response::OK(ServicesResponse {
        total: servicios.len(),
        servicios,
    }))
}
