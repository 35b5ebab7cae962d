use axum::extract::State;
use concesionaria_core::domain::maintenance::{
    ports::MaintenanceRepository, value_objects::MaintenanceStats,
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
    path = "/estadisticas",
    tag = "servicios",
    summary = "Service catalogue summary",
    responses(
        (status = 200, body = MaintenanceStats),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_maintenance_stats(
    State(state): State<AppState>,
) -> Result<Response<MaintenanceStats>, ApiError> {
    let stats = state
        .maintenance_repository
        .get_stats()
        .await
        .map_err(|e| ApiError::internal("Error al obtener estadísticas", e))?;

    Ok(Response::OK(stats))
}
