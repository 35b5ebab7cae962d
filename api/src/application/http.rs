pub mod appointment;
pub mod index;
pub mod maintenance;
pub mod query_extractor;
pub mod server;
pub mod spare_part;
