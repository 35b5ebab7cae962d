pub mod appointment;
pub mod db;
pub mod maintenance;
pub mod spare_part;
