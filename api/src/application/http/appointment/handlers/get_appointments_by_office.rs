use axum::extract::State;
use concesionaria_core::domain::{
    appointment::{ports::AppointmentRepository, value_objects::OfficeAppointments},
    filter::DateRange,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppointmentsByOfficeResponse {
    pub oficinas: Vec<OfficeAppointments>,
}

#[utoipa::path(
    get,
    path = "/por-oficina",
    tag = "citas",
    summary = "Appointment counts per office",
    params(
        ("fecha_inicio" = Option<String>, Query, description = "YYYY-MM-DD"),
        ("fecha_fin" = Option<String>, Query, description = "YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = AppointmentsByOfficeResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_appointments_by_office(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<AppointmentsByOfficeResponse>, ApiError> {
    let oficinas = state
        .appointment_repository
        .get_by_office(DateRange::from_request(&request))
        .await
        .map_err(|e| ApiError::internal("Error al obtener citas por oficina", e))?;

    Ok(Response::OK(AppointmentsByOfficeResponse { oficinas }))
}
