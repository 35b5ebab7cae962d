use std::sync::Arc;

use sea_orm::{DatabaseConnection, FromQueryResult, Value};
use serde_json::Value as JsonValue;
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            format::{currency, minutes},
            value_objects::{PriceRange, StatusCount, TimeRange},
        },
        filter::FilterRequest,
        maintenance::{
            MAINTENANCE_FILTERS,
            ports::MaintenanceRepository,
            value_objects::{
                CategoryPricing, MaintenanceCategory, MaintenanceFilterOptions, MaintenanceStats,
            },
        },
    },
    infrastructure::db::rows::{CountRow, LabelRow, RangeRow, StatusCountRow, statement},
};

pub(crate) const SERVICE_SELECT: &str = r#"SELECT
        id_servicio,
        nombre,
        descripcion,
        categoria,
        precio_mano_obra,
        tiempo_estimado,
        requiere_repuestos,
        estado,
        imagen_url,
        created_at
    FROM servicios_mantenimiento"#;

pub(crate) const SERVICE_ORDER: &str = "ORDER BY categoria, nombre";

pub(crate) const MOST_REQUESTED_SQL: &str = r#"SELECT
        s.id_servicio,
        s.nombre,
        s.descripcion,
        s.categoria,
        s.precio_mano_obra,
        s.tiempo_estimado,
        COUNT(osd.id_detalle) as veces_solicitado
    FROM servicios_mantenimiento s
    LEFT JOIN ordenes_servicio_detalle osd
        ON s.id_servicio = osd.id_servicio AND osd.tipo_item = 'servicio'
    GROUP BY s.id_servicio, s.nombre, s.descripcion, s.categoria, s.precio_mano_obra, s.tiempo_estimado
    HAVING COUNT(osd.id_detalle) > 0
    ORDER BY veces_solicitado DESC
    LIMIT $1"#;

pub(crate) const QUICK_SERVICES_SQL: &str = r#"SELECT
        id_servicio,
        nombre,
        descripcion,
        categoria,
        precio_mano_obra,
        tiempo_estimado,
        requiere_repuestos,
        estado
    FROM servicios_mantenimiento
    WHERE tiempo_estimado <= $1 AND estado = 'activo'
    ORDER BY tiempo_estimado ASC"#;

#[derive(Debug, Clone, FromQueryResult)]
struct CategoryPricingRow {
    categoria: Option<String>,
    cantidad: i64,
    precio_promedio: Option<f64>,
    tiempo_promedio: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
struct PricingSummaryRow {
    precio_promedio: Option<f64>,
    tiempo_promedio: Option<f64>,
    precio_minimo: Option<f64>,
    precio_maximo: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
struct MaintenanceCategoryRow {
    categoria: Option<String>,
    total_servicios: i64,
    precio_promedio: Option<f64>,
    precio_minimo: Option<f64>,
    precio_maximo: Option<f64>,
    tiempo_promedio: Option<f64>,
    con_repuestos: i64,
}

impl From<MaintenanceCategoryRow> for MaintenanceCategory {
    fn from(row: MaintenanceCategoryRow) -> Self {
        MaintenanceCategory {
            categoria: row.categoria,
            total_servicios: row.total_servicios,
            precio_promedio: currency(row.precio_promedio),
            precio_minimo: currency(row.precio_minimo),
            precio_maximo: currency(row.precio_maximo),
            tiempo_promedio: minutes(row.tiempo_promedio),
            con_repuestos: row.con_repuestos,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresMaintenanceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresMaintenanceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count(&self, sql: &str) -> Result<i64, CoreError> {
        let row = CountRow::find_by_statement(statement(sql, []))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to count services: {}", e);
                CoreError::from(e)
            })?;

        Ok(row.map(|row| row.total).unwrap_or(0))
    }

    async fn labels(&self, sql: &str) -> Result<Vec<String>, CoreError> {
        let rows = LabelRow::find_by_statement(statement(sql, []))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list service labels: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(|row| row.value).collect())
    }

    async fn range(&self, sql: &str) -> Result<(Option<f64>, Option<f64>), CoreError> {
        let row = RangeRow::find_by_statement(statement(sql, []))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to compute service range: {}", e);
                CoreError::from(e)
            })?;

        Ok(row.map(|row| (row.minimo, row.maximo)).unwrap_or_default())
    }

    async fn rows(&self, sql: &str, values: Vec<Value>) -> Result<Vec<JsonValue>, CoreError> {
        JsonValue::find_by_statement(statement(sql, values))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to query services: {}", e);
                CoreError::from(e)
            })
    }
}

impl MaintenanceRepository for PostgresMaintenanceRepository {
    async fn filter_services(&self, request: FilterRequest) -> Result<Vec<JsonValue>, CoreError> {
        let fragment = MAINTENANCE_FILTERS.build(&request);
        let sql = format!(
            "{SERVICE_SELECT} {} {SERVICE_ORDER}",
            fragment.where_clause()
        );

        self.rows(&sql, fragment.values()).await
    }

    async fn get_stats(&self) -> Result<MaintenanceStats, CoreError> {
        let total = self
            .count("SELECT COUNT(*) as total FROM servicios_mantenimiento")
            .await?;

        let por_categoria = CategoryPricingRow::find_by_statement(statement(
            r#"SELECT
                categoria,
                COUNT(*) as cantidad,
                AVG(precio_mano_obra)::float8 as precio_promedio,
                AVG(tiempo_estimado)::float8 as tiempo_promedio
            FROM servicios_mantenimiento
            GROUP BY categoria
            ORDER BY cantidad DESC"#,
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group services by category: {}", e);
            CoreError::from(e)
        })?;

        let por_estado = StatusCountRow::find_by_statement(statement(
            "SELECT estado, COUNT(*) as cantidad FROM servicios_mantenimiento GROUP BY estado",
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group services by status: {}", e);
            CoreError::from(e)
        })?;

        let con_repuestos = self
            .count(
                "SELECT COUNT(*) as total FROM servicios_mantenimiento \
                 WHERE requiere_repuestos = true",
            )
            .await?;

        let summary = PricingSummaryRow::find_by_statement(statement(
            r#"SELECT
                AVG(precio_mano_obra)::float8 as precio_promedio,
                AVG(tiempo_estimado)::float8 as tiempo_promedio,
                MIN(precio_mano_obra)::float8 as precio_minimo,
                MAX(precio_mano_obra)::float8 as precio_maximo
            FROM servicios_mantenimiento"#,
            [],
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to summarize service pricing: {}", e);
            CoreError::from(e)
        })?;

        let (precio_promedio, tiempo_promedio, precio_minimo, precio_maximo) = summary
            .map(|row| {
                (
                    row.precio_promedio,
                    row.tiempo_promedio,
                    row.precio_minimo,
                    row.precio_maximo,
                )
            })
            .unwrap_or_default();

        Ok(MaintenanceStats {
            total,
            por_categoria: por_categoria
                .into_iter()
                .map(|row| CategoryPricing {
                    categoria: row.categoria,
                    cantidad: row.cantidad,
                    precio_promedio: currency(row.precio_promedio),
                    tiempo_promedio: minutes(row.tiempo_promedio),
                })
                .collect(),
            por_estado: por_estado.into_iter().map(StatusCount::from).collect(),
            con_repuestos,
            sin_repuestos: total - con_repuestos,
            precio_promedio: currency(precio_promedio),
            precio_minimo: currency(precio_minimo),
            precio_maximo: currency(precio_maximo),
            tiempo_promedio: minutes(tiempo_promedio),
        })
    }

    async fn get_by_category(&self) -> Result<Vec<MaintenanceCategory>, CoreError> {
        let rows = MaintenanceCategoryRow::find_by_statement(statement(
            r#"SELECT
                categoria,
                COUNT(*) as total_servicios,
                AVG(precio_mano_obra)::float8 as precio_promedio,
                MIN(precio_mano_obra)::float8 as precio_minimo,
                MAX(precio_mano_obra)::float8 as precio_maximo,
                AVG(tiempo_estimado)::float8 as tiempo_promedio,
                COUNT(CASE WHEN requiere_repuestos = true THEN 1 END) as con_repuestos
            FROM servicios_mantenimiento
            GROUP BY categoria
            ORDER BY total_servicios DESC"#,
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to group services by category: {}", e);
            CoreError::from(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_most_requested(&self, limit: i64) -> Result<Vec<JsonValue>, CoreError> {
        self.rows(MOST_REQUESTED_SQL, vec![Value::from(limit)]).await
    }

    async fn get_quick(&self, max_minutes: i64) -> Result<Vec<JsonValue>, CoreError> {
        self.rows(QUICK_SERVICES_SQL, vec![Value::from(max_minutes)])
            .await
    }

    async fn get_filter_options(&self) -> Result<MaintenanceFilterOptions, CoreError> {
        let categorias = self
            .labels(
                "SELECT DISTINCT categoria as value FROM servicios_mantenimiento \
                 WHERE categoria IS NOT NULL ORDER BY categoria",
            )
            .await?;
        let estados = self
            .labels(
                "SELECT DISTINCT estado as value FROM servicios_mantenimiento \
                 WHERE estado IS NOT NULL ORDER BY estado",
            )
            .await?;
        let (precio_minimo, precio_maximo) = self
            .range(
                "SELECT MIN(precio_mano_obra)::float8 as minimo, \
                 MAX(precio_mano_obra)::float8 as maximo FROM servicios_mantenimiento",
            )
            .await?;
        let (tiempo_minimo, tiempo_maximo) = self
            .range(
                "SELECT MIN(tiempo_estimado)::float8 as minimo, \
                 MAX(tiempo_estimado)::float8 as maximo FROM servicios_mantenimiento",
            )
            .await?;

        Ok(MaintenanceFilterOptions {
            categorias,
            estados,
            rango_precios: PriceRange {
                minimo: currency(precio_minimo),
                maximo: currency(precio_maximo),
            },
            rango_tiempos: TimeRange {
                minimo: tiempo_minimo.unwrap_or(0.0) as i64,
                maximo: tiempo_maximo.unwrap_or(0.0) as i64,
            },
        })
    }
}
