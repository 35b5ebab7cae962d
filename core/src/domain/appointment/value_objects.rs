use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::domain::common::value_objects::StatusCount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppointmentStats {
    pub total: i64,
    pub por_estado: Vec<StatusCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OfficeAppointments {
    pub id_oficina: i64,
    pub nombre_oficina: Option<String>,
    pub direccion: Option<String>,
    pub total_citas: i64,
    pub completadas: i64,
    pub pendientes: i64,
    pub confirmadas: i64,
    pub canceladas: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppointmentFilterOptions {
    /// `{ id_oficina, nombre, direccion }` rows ordered by name.
    #[schema(value_type = Vec<Object>)]
    pub oficinas: Vec<JsonValue>,
    pub estados: Vec<String>,
}
