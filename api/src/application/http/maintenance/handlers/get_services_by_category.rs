use axum::extract::State;
use concesionaria_core::domain::maintenance::{
    ports::MaintenanceRepository, value_objects::MaintenanceCategory,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ServicesByCategoryResponse {
    pub categorias: Vec<MaintenanceCategory>,
}

#[utoipa::path(
    get,
    path = "/por-categoria",
    tag = "servicios",
    summary = "Services grouped by category",
    responses(
        (status = 200, body = ServicesByCategoryResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_services_by_category(
    State(state): State<AppState>,
) -> Result<Response<ServicesByCategoryResponse>, ApiError> {
    let categorias = state
        .maintenance_repository
        .get_by_category()
        .await
        .map_err(|e| ApiError::internal("Error al obtener servicios por categoría", e))?;

    Ok(Response::OK(ServicesByCategoryResponse { categorias }))
}
