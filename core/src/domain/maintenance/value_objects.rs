use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::value_objects::{PriceRange, StatusCount, TimeRange};

pub const DEFAULT_MOST_REQUESTED_LIMIT: i64 = 10;
pub const DEFAULT_QUICK_MAX_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryPricing {
    pub categoria: Option<String>,
    pub cantidad: i64,
    pub precio_promedio: String,
    pub tiempo_promedio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MaintenanceStats {
    pub total: i64,
    pub por_categoria: Vec<CategoryPricing>,
    pub por_estado: Vec<StatusCount>,
    pub con_repuestos: i64,
    pub sin_repuestos: i64,
    pub precio_promedio: String,
    pub precio_minimo: String,
    pub precio_maximo: String,
    pub tiempo_promedio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MaintenanceCategory {
    pub categoria: Option<String>,
    pub total_servicios: i64,
    pub precio_promedio: String,
    pub precio_minimo: String,
    pub precio_maximo: String,
    pub tiempo_promedio: String,
    pub con_repuestos: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MaintenanceFilterOptions {
    pub categorias: Vec<String>,
    pub estados: Vec<String>,
    pub rango_precios: PriceRange,
    pub rango_tiempos: TimeRange,
}
