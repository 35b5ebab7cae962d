use axum::extract::State;
use concesionaria_core::domain::spare_part::{
    DEFAULT_LOW_STOCK_LIMIT, ports::SparePartRepository,
};

use super::filter_spare_parts::SparePartsResponse;
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
    path = "/bajo-stock",
    tag = "repuestos",
    summary = "Spare parts running low",
    description = "Parts with stock above zero and below `limite`, lowest stock first.",
    params(
        ("limite" = Option<i64>, Query, description = "Stock threshold, defaults to 10"),
    ),
    responses(
        (status = 200, body = SparePartsResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_low_stock_spare_parts(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<SparePartsResponse>, ApiError> {
    let limit = request.integer_or("limite", DEFAULT_LOW_STOCK_LIMIT);

    let repuestos = state
        .spare_part_repository
        .get_low_stock(limit)
        .await
        .map_err(|e| ApiError::internal("Error al obtener repuestos con bajo stock", e))?;

    Ok(Response::OK(SparePartsResponse {
        total: repuestos.len(),
        repuestos,
    }))
}
