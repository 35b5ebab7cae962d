pub mod entities;
pub mod format;
pub mod value_objects;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}
