use std::sync::Arc;

use sea_orm::{DatabaseConnection, FromQueryResult};
use serde_json::Value as JsonValue;
use tracing::error;

use crate::{
    domain::{
        appointment::{
            APPOINTMENT_FILTERS,
            ports::AppointmentRepository,
            value_objects::{AppointmentFilterOptions, AppointmentStats, OfficeAppointments},
        },
        common::entities::app_errors::CoreError,
        filter::{DateRange, FilterRequest, range_fragment},
    },
    infrastructure::db::rows::{CountRow, LabelRow, StatusCountRow, statement},
};

pub(crate) const APPOINTMENT_SELECT: &str = r#"SELECT
        c.id_cita,
        c.id_usuario,
        c.id_oficina,
        c.id_vehiculo,
        c.fecha,
        c.hora,
        c.estado,
        c.comentario,
        c.fecha_creacion,
        o.nombre as nombre_oficina,
        o.direccion as direccion_oficina,
        p.nombres || ' ' || p.apellidos as nombre_cliente,
        p.correo as correo_cliente,
        p.telefono as telefono_cliente,
        v.tipo as tipo_vehiculo,
        m.nombre as modelo_vehiculo,
        ma.nombre as marca_vehiculo
    FROM citas c
    LEFT JOIN oficinas o ON c.id_oficina = o.id_oficina
    LEFT JOIN usuario u ON c.id_usuario = u.id_usuario
    LEFT JOIN persona p ON u.id_persona = p.id_persona
    LEFT JOIN vehiculos v ON c.id_vehiculo = v.id_vehiculo
    LEFT JOIN modelos m ON v.id_modelo = m.id_modelo
    LEFT JOIN marcas ma ON m.id_marca = ma.id_marca"#;

pub(crate) const APPOINTMENT_ORDER: &str = "ORDER BY c.fecha DESC, c.hora DESC";

#[derive(Debug, Clone, FromQueryResult)]
struct OfficeAppointmentsRow {
    id_oficina: i64,
    nombre_oficina: Option<String>,
    direccion: Option<String>,
    total_citas: i64,
    completadas: i64,
    pendientes: i64,
    confirmadas: i64,
    canceladas: i64,
}

impl From<OfficeAppointmentsRow> for OfficeAppointments {
    fn from(row: OfficeAppointmentsRow) -> Self {
        OfficeAppointments {
            id_oficina: row.id_oficina,
            nombre_oficina: row.nombre_oficina,
            direccion: row.direccion,
            total_citas: row.total_citas,
            completadas: row.completadas,
            pendientes: row.pendientes,
            confirmadas: row.confirmadas,
            canceladas: row.canceladas,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresAppointmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresAppointmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl AppointmentRepository for PostgresAppointmentRepository {
    async fn filter_appointments(
        &self,
        request: FilterRequest,
    ) -> Result<Vec<JsonValue>, CoreError> {
        let fragment = APPOINTMENT_FILTERS.build(&request);
        let sql = format!(
            "{APPOINTMENT_SELECT} {} {APPOINTMENT_ORDER}",
            fragment.where_clause()
        );

        JsonValue::find_by_statement(statement(sql, fragment.values()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to filter appointments: {}", e);
                CoreError::from(e)
            })
    }

    async fn get_stats(&self, range: Option<DateRange>) -> Result<AppointmentStats, CoreError> {
        let fragment = range_fragment(range, "fecha");

        let por_estado = StatusCountRow::find_by_statement(statement(
            format!(
                "SELECT estado, COUNT(*) as cantidad FROM citas {} GROUP BY estado",
                fragment.where_clause()
            ),
            fragment.values(),
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to count appointments by status: {}", e);
            CoreError::from(e)
        })?;

        let total = CountRow::find_by_statement(statement(
            format!("SELECT COUNT(*) as total FROM citas {}", fragment.where_clause()),
            fragment.values(),
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to count appointments: {}", e);
            CoreError::from(e)
        })?
        .map(|row| row.total)
        .unwrap_or(0);

        Ok(AppointmentStats {
            total,
            por_estado: por_estado.into_iter().map(Into::into).collect(),
        })
    }

    async fn get_by_office(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<OfficeAppointments>, CoreError> {
        let fragment = range_fragment(range, "c.fecha");
        let sql = format!(
            r#"SELECT
                o.id_oficina::bigint as id_oficina,
                o.nombre as nombre_oficina,
                o.direccion,
                COUNT(c.id_cita) as total_citas,
                COUNT(CASE WHEN c.estado = 'completada' THEN 1 END) as completadas,
                COUNT(CASE WHEN c.estado = 'pendiente' THEN 1 END) as pendientes,
                COUNT(CASE WHEN c.estado = 'confirmada' THEN 1 END) as confirmadas,
                COUNT(CASE WHEN c.estado = 'cancelada' THEN 1 END) as canceladas
            FROM oficinas o
            LEFT JOIN citas c ON o.id_oficina = c.id_oficina
            {}
            GROUP BY o.id_oficina, o.nombre, o.direccion
            ORDER BY total_citas DESC"#,
            fragment.where_clause()
        );

        let rows = OfficeAppointmentsRow::find_by_statement(statement(sql, fragment.values()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to group appointments by office: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_filter_options(&self) -> Result<AppointmentFilterOptions, CoreError> {
        let oficinas = JsonValue::find_by_statement(statement(
            "SELECT id_oficina, nombre, direccion FROM oficinas ORDER BY nombre",
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to list offices: {}", e);
            CoreError::from(e)
        })?;

        let estados = LabelRow::find_by_statement(statement(
            "SELECT DISTINCT estado as value FROM citas WHERE estado IS NOT NULL ORDER BY estado",
            [],
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to list appointment statuses: {}", e);
            CoreError::from(e)
        })?;

        Ok(AppointmentFilterOptions {
            oficinas,
            estados: estados.into_iter().map(|row| row.value).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Transaction, Value};

    use super::*;
    use crate::{
        domain::common::value_objects::StatusCount,
        infrastructure::db::rows::{mock_row as row, transaction_log},
    };

    fn january() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_filter_appointments_binds_typed_params_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row([
                ("id_cita", Value::Int(Some(7))),
                ("estado", Value::from("pendiente")),
            ])]])
            .into_connection();
        let repository = PostgresAppointmentRepository::new(Arc::new(db));

        let request = FilterRequest::new()
            .with("estado", "pendiente")
            .with("fecha_inicio", "2024-01-01")
            .with("id_oficina", "3")
            .with("id_usuario", "abc");

        let rows = repository.filter_appointments(request).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id_cita"], 7);
        assert_eq!(rows[0]["estado"], "pendiente");

        let expected_sql = format!(
            "{APPOINTMENT_SELECT} WHERE 1=1 AND c.estado = $1 AND c.fecha >= $2 \
             AND c.id_oficina = $3 {APPOINTMENT_ORDER}"
        );
        assert_eq!(
            transaction_log(repository.db),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                expected_sql,
                [
                    Value::from("pendiente"),
                    Value::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                    Value::from(3i64),
                ],
            )]
        );
    }

    #[tokio::test]
    async fn test_stats_with_range_runs_both_queries_with_same_bounds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row([
                    ("estado", Value::from("pendiente")),
                    ("cantidad", Value::BigInt(Some(2))),
                ]),
                row([
                    ("estado", Value::from("completada")),
                    ("cantidad", Value::BigInt(Some(3))),
                ]),
            ]])
            .append_query_results([vec![row([("total", Value::BigInt(Some(5)))])]])
            .into_connection();
        let repository = PostgresAppointmentRepository::new(Arc::new(db));

        let stats = repository.get_stats(Some(january())).await.unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(
            stats.por_estado,
            [
                StatusCount {
                    estado: Some("pendiente".into()),
                    cantidad: 2
                },
                StatusCount {
                    estado: Some("completada".into()),
                    cantidad: 3
                },
            ]
        );
        assert_eq!(
            stats.total,
            stats.por_estado.iter().map(|s| s.cantidad).sum::<i64>()
        );

        let bounds = [
            Value::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            Value::from(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
        ];
        assert_eq!(
            transaction_log(repository.db),
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    "SELECT estado, COUNT(*) as cantidad FROM citas \
                     WHERE 1=1 AND fecha BETWEEN $1 AND $2 GROUP BY estado",
                    bounds.clone(),
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    "SELECT COUNT(*) as total FROM citas WHERE 1=1 AND fecha BETWEEN $1 AND $2",
                    bounds,
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_by_office_keeps_zero_counts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row([
                ("id_oficina", Value::BigInt(Some(1))),
                ("nombre_oficina", Value::from("Centro")),
                ("direccion", Value::String(None)),
                ("total_citas", Value::BigInt(Some(0))),
                ("completadas", Value::BigInt(Some(0))),
                ("pendientes", Value::BigInt(Some(0))),
                ("confirmadas", Value::BigInt(Some(0))),
                ("canceladas", Value::BigInt(Some(0))),
            ])]])
            .into_connection();
        let repository = PostgresAppointmentRepository::new(Arc::new(db));

        let offices = repository.get_by_office(None).await.unwrap();

        assert_eq!(
            offices,
            [OfficeAppointments {
                id_oficina: 1,
                nombre_oficina: Some("Centro".into()),
                direccion: None,
                total_citas: 0,
                completadas: 0,
                pendientes: 0,
                confirmadas: 0,
                canceladas: 0,
            }]
        );
    }

    #[tokio::test]
    async fn test_filter_options() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row([
                ("id_oficina", Value::Int(Some(1))),
                ("nombre", Value::from("Centro")),
                ("direccion", Value::from("Av. Principal 123")),
            ])]])
            .append_query_results([vec![
                row([("value", Value::from("cancelada"))]),
                row([("value", Value::from("pendiente"))]),
            ]])
            .into_connection();
        let repository = PostgresAppointmentRepository::new(Arc::new(db));

        let options = repository.get_filter_options().await.unwrap();

        assert_eq!(options.oficinas.len(), 1);
        assert_eq!(options.oficinas[0]["nombre"], "Centro");
        assert_eq!(options.estados, ["cancelada", "pendiente"]);
    }

    #[tokio::test]
    async fn test_database_error_is_propagated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let repository = PostgresAppointmentRepository::new(Arc::new(db));

        let error = repository
            .filter_appointments(FilterRequest::new())
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            CoreError::Database(message) if message.contains("connection refused")
        ));
    }
}
