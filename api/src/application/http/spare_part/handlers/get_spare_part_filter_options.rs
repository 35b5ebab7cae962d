use axum::extract::State;
use concesionaria_core::domain::spare_part::{
    ports::SparePartRepository, value_objects::SparePartFilterOptions,
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
    tag = "repuestos",
    summary = "Values available for the spare part filters",
    responses(
        (status = 200, body = SparePartFilterOptions),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_spare_part_filter_options(
    State(state): State<AppState>,
) -> Result<Response<SparePartFilterOptions>, ApiError> {
    let options = state
        .spare_part_repository
        .get_filter_options()
        .await
        .map_err(|e| ApiError::internal("Error al obtener opciones de filtro", e))?;

    Ok(Response::OK(options))
}
