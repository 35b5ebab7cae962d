use axum::extract::State;
use concesionaria_core::domain::{
    appointment::{ports::AppointmentRepository, value_objects::AppointmentStats},
    filter::DateRange,
};

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
    path = "/estadisticas",
    tag = "citas",
    summary = "Appointment counts by status",
    description = "The date range applies only when both bounds are present and valid.",
    params(
        ("fecha_inicio" = Option<String>, Query, description = "YYYY-MM-DD"),
        ("fecha_fin" = Option<String>, Query, description = "YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = AppointmentStats),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_appointment_stats(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<AppointmentStats>, ApiError> {
    let stats = state
        .appointment_repository
        .get_stats(DateRange::from_request(&request))
        .await
        .map_err(|e| ApiError::internal("Error al obtener estadísticas", e))?;

    Ok(Response::OK(stats))
}
