use axum::extract::State;
use concesionaria_core::domain::maintenance::{
    DEFAULT_MOST_REQUESTED_LIMIT, ports::MaintenanceRepository,
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
    path = "/mas-solicitados",
    tag = "servicios",
    summary = "Most requested services",
    description = "Services that appear on service orders, by number of appearances.",
    params(
        ("limite" = Option<i64>, Query, description = "Maximum rows, defaults to 10"),
    ),
    responses(
        (status = 200, body = ServicesResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_most_requested_services(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<ServicesResponse>, ApiError> {
    let limit = request.integer_or("limite", DEFAULT_MOST_REQUESTED_LIMIT);

    let servicios = state
        .maintenance_repository
        .get_most_requested(limit)
        .await
        .map_err(|e| ApiError::internal("Error al obtener servicios más solicitados", e))?;

    Ok(Response::OK(ServicesResponse {
        total: servicios.len(),
        servicios,
    }))
}
