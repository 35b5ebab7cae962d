use axum::extract::State;
use concesionaria_core::domain::maintenance::{
    DEFAULT_QUICK_MAX_MINUTES, ports::MaintenanceRepository,
};

use super::filter_services::ServicesResponse;
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

#[utoipa::path(
    get,
    path = "/rapidos",
    tag = "servicios",
    summary = "Quick active services",
    params(
        ("tiempo_max" = Option<i64>, Query, description = "Maximum estimated minutes, defaults to 60"),
    ),
    responses(
        (status = 200, body = ServicesResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_quick_services(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<ServicesResponse>, ApiError> {
    let max_minutes = request.integer_or("tiempo_max", DEFAULT_QUICK_MAX_MINUTES);

    let servicios = state
        .maintenance_repository
        .get_quick(max_minutes)
        .await
        .map_err(|e| ApiError::internal("Error al obtener servicios rápidos", e))?;

    Ok(Response::OK(ServicesResponse {
        total: servicios.len(),
        servicios,
    }))
}
