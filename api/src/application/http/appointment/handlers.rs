pub mod filter_appointments;
pub mod get_appointment_filter_options;
pub mod get_appointment_stats;
pub mod get_appointments_by_office;
