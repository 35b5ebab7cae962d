pub mod ports;
pub mod schema;
pub mod value_objects;

pub use ports::AppointmentRepository;
pub use schema::APPOINTMENT_FILTERS;
pub use value_objects::*;
