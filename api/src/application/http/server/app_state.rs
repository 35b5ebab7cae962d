use std::sync::Arc;

use concesionaria_core::infrastructure::{
    appointment::repositories::appointment_repository::PostgresAppointmentRepository,
    db::DatabaseConnection,
    maintenance::repositories::maintenance_repository::PostgresMaintenanceRepository,
    spare_part::repositories::spare_part_repository::PostgresSparePartRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub appointment_repository: Arc<PostgresAppointmentRepository>,
    pub spare_part_repository: Arc<PostgresSparePartRepository>,
    pub maintenance_repository: Arc<PostgresMaintenanceRepository>,
}

impl AppState {
    pub fn new(args: Arc<Args>, db: Arc<DatabaseConnection>) -> Self {
        Self {
            args,
            appointment_repository: Arc::new(PostgresAppointmentRepository::new(Arc::clone(&db))),
            spare_part_repository: Arc::new(PostgresSparePartRepository::new(Arc::clone(&db))),
            maintenance_repository: Arc::new(PostgresMaintenanceRepository::new(db)),
        }
    }
}
