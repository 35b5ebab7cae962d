pub mod ports;
pub mod schema;
pub mod value_objects;

pub use ports::MaintenanceRepository;
pub use schema::MAINTENANCE_FILTERS;
pub use value_objects::*;
