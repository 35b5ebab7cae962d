use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::value_objects::{PriceRange, StatusCount};

/// Rows under this stock (and above zero) count as low stock in the summary.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

pub const DEFAULT_LOW_STOCK_LIMIT: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryStock {
    pub categoria: Option<String>,
    pub cantidad: i64,
    pub stock_total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SparePartStats {
    pub total: i64,
    pub por_categoria: Vec<CategoryStock>,
    pub por_estado: Vec<StatusCount>,
    pub valor_total: String,
    pub precio_promedio: String,
    pub bajo_stock: i64,
    pub agotados: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SparePartCategory {
    pub categoria: Option<String>,
    pub total_productos: i64,
    pub stock_total: i64,
    pub precio_minimo: String,
    pub precio_maximo: String,
    pub precio_promedio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SparePartFilterOptions {
    pub categorias: Vec<String>,
    pub estados: Vec<String>,
    pub rango_precios: PriceRange,
}
