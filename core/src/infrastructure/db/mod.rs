pub mod postgres;
pub mod rows;

pub use sea_orm::DatabaseConnection;
