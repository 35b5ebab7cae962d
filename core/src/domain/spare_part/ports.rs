use serde_json::Value as JsonValue;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::FilterRequest,
    spare_part::value_objects::{SparePartCategory, SparePartFilterOptions, SparePartStats},
};

/// Read-only queries over `repuestos`.
pub trait SparePartRepository: Send + Sync {
    fn filter_spare_parts(
        &self,
        request: FilterRequest,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_stats(&self) -> impl Future<Output = Result<SparePartStats, CoreError>> + Send;

    fn get_by_category(
        &self,
    ) -> impl Future<Output = Result<Vec<SparePartCategory>, CoreError>> + Send;

    /// Parts with `0 < stock < limit`, lowest stock first.
    fn get_low_stock(
        &self,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_filter_options(
        &self,
    ) -> impl Future<Output = Result<SparePartFilterOptions, CoreError>> + Send;
}
