pub mod appointment;
pub mod common;
pub mod filter;
pub mod maintenance;
pub mod spare_part;
