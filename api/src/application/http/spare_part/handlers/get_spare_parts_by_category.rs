use axum::extract::State;
use concesionaria_core::domain::spare_part::{
    ports::SparePartRepository, value_objects::SparePartCategory,
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
pub struct SparePartsByCategoryResponse {
    pub categorias: Vec<SparePartCategory>,
}

#[utoipa::path(
    get,
    path = "/por-categoria",
    tag = "repuestos",
    summary = "Spare parts grouped by category",
    responses(
        (status = 200, body = SparePartsByCategoryResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_spare_parts_by_category(
    State(state): State<AppState>,
) -> Result<Response<SparePartsByCategoryResponse>, ApiError> {
    let categorias = state
        .spare_part_repository
        .get_by_category()
        .await
        .map_err(|e| ApiError::internal("Error al obtener repuestos por categoría", e))?;

    Ok(Response::OK(SparePartsByCategoryResponse { categorias }))
}
