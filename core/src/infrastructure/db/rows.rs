//! Typed rows for the aggregate queries shared across resources.
//!
//! Counts come back as `bigint`; averages and bounds are cast to `float8` in
//! SQL so they decode into `f64`.

use sea_orm::{DatabaseBackend, FromQueryResult, Statement, Value};

use crate::domain::common::value_objects::StatusCount;

#[derive(Debug, Clone, FromQueryResult)]
pub struct CountRow {
    pub total: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct LabelRow {
    pub value: String,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct StatusCountRow {
    pub estado: Option<String>,
    pub cantidad: i64,
}

impl From<StatusCountRow> for StatusCount {
    fn from(row: StatusCountRow) -> Self {
        StatusCount {
            estado: row.estado,
            cantidad: row.cantidad,
        }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct RangeRow {
    pub minimo: Option<f64>,
    pub maximo: Option<f64>,
}

pub fn statement<S, I>(sql: S, values: I) -> Statement
where
    S: Into<String>,
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

/// Builds one `MockDatabase` row keyed by column name.
#[cfg(test)]
pub(crate) fn mock_row<const N: usize>(
    columns: [(&'static str, Value); N],
) -> std::collections::BTreeMap<&'static str, Value> {
    std::collections::BTreeMap::from(columns)
}

/// Statements received by a mock connection. Every other handle to `db` must
/// be dropped first.
#[cfg(test)]
pub(crate) fn transaction_log(
    db: std::sync::Arc<sea_orm::DatabaseConnection>,
) -> Vec<sea_orm::Transaction> {
    std::sync::Arc::into_inner(db)
        .expect("connection still shared")
        .into_transaction_log()
}
