use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Connectivity or SQL failure; carries the driver's message.
    #[error("{0}")]
    Database(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<sea_orm::DbErr> for CoreError {
    fn from(error: sea_orm::DbErr) -> Self {
        CoreError::Database(error.to_string())
    }
}
