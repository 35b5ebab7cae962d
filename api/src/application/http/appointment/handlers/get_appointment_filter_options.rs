use axum::extract::State;
use concesionaria_core::domain::appointment::{
    ports::AppointmentRepository, value_objects::AppointmentFilterOptions,
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
    tag = "citas",
    summary = "Values available for the appointment filters",
    responses(
        (status = 200, body = AppointmentFilterOptions),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_appointment_filter_options(
    State(state): State<AppState>,
) -> Result<Response<AppointmentFilterOptions>, ApiError> {
    let options = state
        .appointment_repository
        .get_filter_options()
        .await
        .map_err(|e| ApiError::internal("Error al obtener opciones de filtro", e))?;

    Ok(Response::OK(options))
}
