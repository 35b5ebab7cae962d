use std::{
    collections::BTreeMap,
    io,
    sync::{Arc, Mutex},
};

use axum_test::TestServer;
use clap::Parser;
use concesionaria_core::infrastructure::db::DatabaseConnection;
use sea_orm::{MockDatabase, Transaction, Value};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};

pub type MockRow = BTreeMap<&'static str, Value>;

pub fn mock_row<const N: usize>(columns: [(&'static str, Value); N]) -> MockRow {
    BTreeMap::from(columns)
}

pub fn no_rows() -> Vec<MockRow> {
    Vec::new()
}

/// Shared handle over a prepared mock database.
pub fn connect(mock: MockDatabase) -> Arc<DatabaseConnection> {
    Arc::new(mock.into_connection())
}

pub fn test_state(service: &str, db: Arc<DatabaseConnection>) -> AppState {
    let args = Args::parse_from(["concesionaria-api", "--service", service]);
    AppState::new(Arc::new(args), db)
}

/// Full service router (layers included) over `db`.
pub fn test_server(service: &str, db: Arc<DatabaseConnection>) -> TestServer {
    let app = router(test_state(service, db)).unwrap();
    TestServer::new(app).unwrap()
}

/// Every statement the mock connection received. Consumes the server so the
/// repositories release their handles on `db`.
pub fn transaction_log(server: TestServer, db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    drop(server);
    Arc::into_inner(db)
        .expect("connection still shared")
        .into_transaction_log()
}

/// Debug rendering of [`transaction_log`].
pub fn logged_sql(server: TestServer, db: Arc<DatabaseConnection>) -> String {
    format!("{:?}", transaction_log(server, db))
}

/// Log output captured in memory.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records error events of the workspace crates on this thread until the
/// guard drops.
pub fn capture_errors() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(
            "concesionaria_core=error,concesionaria_api=error",
        ))
        .with_writer(move || writer.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
