use serde_json::Value as JsonValue;

use crate::domain::{
    appointment::value_objects::{AppointmentFilterOptions, AppointmentStats, OfficeAppointments},
    common::entities::app_errors::CoreError,
    filter::{DateRange, FilterRequest},
};

/// Read-only queries over `citas` and `oficinas`.
pub trait AppointmentRepository: Send + Sync {
    /// Appointments matching `request`, newest first, joined with office,
    /// client and vehicle details.
    fn filter_appointments(
        &self,
        request: FilterRequest,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_stats(
        &self,
        range: Option<DateRange>,
    ) -> impl Future<Output = Result<AppointmentStats, CoreError>> + Send;

    fn get_by_office(
        &self,
        range: Option<DateRange>,
    ) -> impl Future<Output = Result<Vec<OfficeAppointments>, CoreError>> + Send;

    fn get_filter_options(
        &self,
    ) -> impl Future<Output = Result<AppointmentFilterOptions, CoreError>> + Send;
}
