use axum::extract::State;
use concesionaria_core::domain::maintenance::{
    ports::MaintenanceRepository, value_objects::MaintenanceFilterOptions,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/opciones-filtro",
    tag = "servicios",
    summary = "Values available for the service filters",
    responses(
        (status = 200, body = MaintenanceFilterOptions),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_maintenance_filter_options(
    State(state): State<AppState>,
) -> Result<Response<MaintenanceFilterOptions>, ApiError> {
    let options = state
        .maintenance_repository
        .get_filter_options()
        .await
        .map_err(|e| ApiError::internal("Error al obtener opciones de filtro", e))?;

    Ok(Response::OK(options))
}
