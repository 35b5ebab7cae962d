use axum::extract::State;
use concesionaria_core::domain::spare_part::{
    ports::SparePartRepository, value_objects::SparePartStats,
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
    tag = "repuestos",
    summary = "Inventory summary",
    description = "Totals per category and status, inventory value, average price, low-stock and sold-out counts.",
    responses(
        (status = 200, body = SparePartStats),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_spare_part_stats(
    State(state): State<AppState>,
) -> Result<Response<SparePartStats>, ApiError> {
    let stats = state
        .spare_part_repository
        .get_stats()
        .await
        .map_err(|e| ApiError::internal("Error al obtener estadísticas", e))?;

    Ok(Response::OK(stats))
}
