use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StatusCount {
    pub estado: Option<String>,
    pub cantidad: i64,
}

/// Currency bounds rendered with two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceRange {
    pub minimo: String,
    pub maximo: String,
}

/// Estimated-time bounds in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimeRange {
    pub minimo: i64,
    pub maximo: i64,
}
