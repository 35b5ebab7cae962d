use serde_json::Value as JsonValue;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::FilterRequest,
    maintenance::value_objects::{
        MaintenanceCategory, MaintenanceFilterOptions, MaintenanceStats,
    },
};

/// Read-only queries over `servicios_mantenimiento`.
pub trait MaintenanceRepository: Send + Sync {
    fn filter_services(
        &self,
        request: FilterRequest,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_stats(&self) -> impl Future<Output = Result<MaintenanceStats, CoreError>> + Send;

    fn get_by_category(
        &self,
    ) -> impl Future<Output = Result<Vec<MaintenanceCategory>, CoreError>> + Send;

    /// Services ordered by how often they appear on service orders.
    fn get_most_requested(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    /// Active services whose estimated time is at most `max_minutes`.
    fn get_quick(
        &self,
        max_minutes: i64,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_filter_options(
        &self,
    ) -> impl Future<Output = Result<MaintenanceFilterOptions, CoreError>> + Send;
}
