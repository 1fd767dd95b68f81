use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::errors::ModelError;

/// Failure classes the HTTP layer knows how to map. Messages carry the raw underlying text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// Connection refused, pool exhausted and similar transient faults.
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} {id} not found")) }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return Self::Conflict(e.to_string());
            }
            _ => {}
        }
        match &e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(e.to_string()),
            DbErr::RecordNotFound(msg) => Self::NotFound(msg.clone()),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UnknownCategory(_) => Self::Validation(e.to_string()),
        }
    }
}
