use axum::extract::State;
use concesionaria_core::domain::appointment::ports::AppointmentRepository;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
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
pub struct FilterAppointmentsResponse {
    pub total: usize,
    /// Appointment rows joined with office, client and vehicle columns.
    #[schema(value_type = Vec<Object>)]
    pub citas: Vec<JsonValue>,
}

#[utoipa::path(
    get,
    path = "/filtros",
    tag = "citas",
    summary = "Filter appointments",
    description = "Appointments matching every supplied criterion, newest first. Blank or unparseable values are ignored.",
    params(
        ("estado" = Option<String>, Query, description = "pendiente, confirmada, cancelada or completada"),
        ("fecha_inicio" = Option<String>, Query, description = "Earliest date, YYYY-MM-DD"),
        ("fecha_fin" = Option<String>, Query, description = "Latest date, YYYY-MM-DD"),
        ("id_oficina" = Option<i64>, Query, description = "Office id"),
        ("id_usuario" = Option<i64>, Query, description = "Client user id"),
        ("id_vehiculo" = Option<i64>, Query, description = "Vehicle id"),
    ),
    responses(
        (status = 200, body = FilterAppointmentsResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn filter_appointments(
    State(state): State<AppState>,
    FilterQuery(request): FilterQuery,
) -> Result<Response<FilterAppointmentsResponse>, ApiError> {
    let citas = state
        .appointment_repository
        .filter_appointments(request)
        .await
        .map_err(|e| ApiError::internal("Error al filtrar citas", e))?;

    Ok(Response::OK(FilterAppointmentsResponse {
        total: citas.len(),
        citas,
    }))
}
