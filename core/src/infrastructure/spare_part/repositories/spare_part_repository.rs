use std::sync::Arc;

use sea_orm::{DatabaseConnection, FromQueryResult, Value};
use serde_json::Value as JsonValue;
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            format::currency,
            value_objects::{PriceRange, StatusCount},
        },
        filter::FilterRequest,
        spare_part::{
            SPARE_PART_FILTERS,
            ports::SparePartRepository,
            value_objects::{
                CategoryStock, LOW_STOCK_THRESHOLD, SparePartCategory, SparePartFilterOptions,
                SparePartStats,
            },
        },
    },
    infrastructure::db::rows::{CountRow, LabelRow, RangeRow, StatusCountRow, statement},
};

pub(crate) const SPARE_PART_SELECT: &str = r#"SELECT
        id_repuesto,
        nombre,
        descripcion,
        precio,
        stock,
        imagen_url,
        categoria,
        estado,
        fecha_ingreso,
        marcas_compatibles,
        modelos_compatibles,
        created_at
    FROM repuestos"#;

pub(crate) const SPARE_PART_ORDER: &str = "ORDER BY fecha_ingreso DESC";

pub(crate) const LOW_STOCK_SQL: &str = r#"SELECT
        id_repuesto,
        nombre,
        descripcion,
        precio,
        stock,
        categoria,
        estado
    FROM repuestos
    WHERE stock < $1 AND stock > 0
    ORDER BY stock ASC"#;

#[derive(Debug, Clone, FromQueryResult)]
struct CategoryStockRow {
    categoria: Option<String>,
    cantidad: i64,
    stock_total: Option<i64>,
}

#[derive(Debug, Clone, FromQueryResult)]
struct InventoryValueRow {
    valor_total: Option<f64>,
    precio_promedio: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
struct SparePartCategoryRow {
    categoria: Option<String>,
    total_productos: i64,
    stock_total: Option<i64>,
    precio_minimo: Option<f64>,
    precio_maximo: Option<f64>,
    precio_promedio: Option<f64>,
}

impl From<SparePartCategoryRow> for SparePartCategory {
    fn from(row: SparePartCategoryRow) -> Self {
        SparePartCategory {
            categoria: row.categoria,
            total_productos: row.total_productos,
            stock_total: row.stock_total.unwrap_or(0),
            precio_minimo: currency(row.precio_minimo),
            precio_maximo: currency(row.precio_maximo),
            precio_promedio: currency(row.precio_promedio),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresSparePartRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresSparePartRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count(&self, sql: &str) -> Result<i64, CoreError> {
        let row = CountRow::find_by_statement(statement(sql, []))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to count spare parts: {}", e);
                CoreError::from(e)
            })?;

        Ok(row.map(|row| row.total).unwrap_or(0))
    }

    async fn labels(&self, sql: &str) -> Result<Vec<String>, CoreError> {
        let rows = LabelRow::find_by_statement(statement(sql, []))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list spare part labels: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(|row| row.value).collect())
    }
}

impl SparePartRepository for PostgresSparePartRepository {
    async fn filter_spare_parts(
        &self,
        request: FilterRequest,
    ) -> Result<Vec<JsonValue>, CoreError> {
        let fragment = SPARE_PART_FILTERS.build(&request);
        let sql = format!(
            "{SPARE_PART_SELECT} {} {SPARE_PART_ORDER}",
            fragment.where_clause()
        );

        JsonValue::find_by_statement(statement(sql, fragment.values()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to filter spare parts: {}", e);
                CoreError::from(e)
            })
    }

    async fn get_stats(&self) -> Result<SparePartStats, CoreError> {
        let total = self.count("SELECT COUNT(*) as total FROM repuestos").await?;

        let por_categoria = CategoryStockRow::find_by_statement(statement(
            r#"SELECT
                categoria,
                COUNT(*) as cantidad,
                SUM(stock)::bigint as stock_total
            FROM repuestos
            GROUP BY categoria
            ORDER BY cantidad DESC"#,
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group spare parts by category: {}", e);
            CoreError::from(e)
        })?;

        let por_estado = StatusCountRow::find_by_statement(statement(
            "SELECT estado, COUNT(*) as cantidad FROM repuestos GROUP BY estado",
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group spare parts by status: {}", e);
            CoreError::from(e)
        })?;

        let inventory = InventoryValueRow::find_by_statement(statement(
            r#"SELECT
                SUM(precio * stock)::float8 as valor_total,
                AVG(precio)::float8 as precio_promedio
            FROM repuestos"#,
            [],
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to compute inventory value: {}", e);
            CoreError::from(e)
        })?;

        let bajo_stock = self
            .count(&format!(
                "SELECT COUNT(*) as total FROM repuestos \
                 WHERE stock < {LOW_STOCK_THRESHOLD} AND stock > 0"
            ))
            .await?;
        let agotados = self
            .count("SELECT COUNT(*) as total FROM repuestos WHERE stock = 0")
            .await?;

        let (valor_total, precio_promedio) = inventory
            .map(|row| (row.valor_total, row.precio_promedio))
            .unwrap_or_default();

        Ok(SparePartStats {
            total,
            por_categoria: por_categoria
                .into_iter()
                .map(|row| CategoryStock {
                    categoria: row.categoria,
                    cantidad: row.cantidad,
                    stock_total: row.stock_total.unwrap_or(0),
                })
                .collect(),
            por_estado: por_estado.into_iter().map(StatusCount::from).collect(),
            valor_total: currency(valor_total),
            precio_promedio: currency(precio_promedio),
            bajo_stock,
            agotados,
        })
    }

    async fn get_by_category(&self) -> Result<Vec<SparePartCategory>, CoreError> {
        let rows = SparePartCategoryRow::find_by_statement(statement(
            r#"SELECT
                categoria,
                COUNT(*) as total_productos,
                SUM(stock)::bigint as stock_total,
                MIN(precio)::float8 as precio_minimo,
                MAX(precio)::float8 as precio_maximo,
                AVG(precio)::float8 as precio_promedio
            FROM repuestos
            GROUP BY categoria
            ORDER BY total_productos DESC"#,
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group spare parts by category: {}", e);
            CoreError::from(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_low_stock(&self, limit: i64) -> Result<Vec<JsonValue>, CoreError> {
        JsonValue::find_by_statement(statement(LOW_STOCK_SQL, [Value::from(limit)]))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list low stock spare parts: {}", e);
                CoreError::from(e)
            })
    }

    async fn get_filter_options(&self) -> Result<SparePartFilterOptions, CoreError> {
        let categorias = self
            .labels(
                "SELECT DISTINCT categoria as value FROM repuestos \
                 WHERE categoria IS NOT NULL ORDER BY categoria",
            )
            .await?;
        let estados = self
            .labels(
                "SELECT DISTINCT estado as value FROM repuestos \
                 WHERE estado IS NOT NULL ORDER BY estado",
            )
            .await?;

        let precios = RangeRow::find_by_statement(statement(
            "SELECT MIN(precio)::float8 as minimo, MAX(precio)::float8 as maximo FROM repuestos",
            [],
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to compute spare part price range: {}", e);
            CoreError::from(e)
        })?;

        let (minimo, maximo) = precios
            .map(|row| (row.minimo, row.maximo))
            .unwrap_or_default();

        Ok(SparePartFilterOptions {
            categorias,
            estados,
            rango_precios: PriceRange {
                minimo: currency(minimo),
                maximo: currency(maximo),
            },
        })
    }
}
