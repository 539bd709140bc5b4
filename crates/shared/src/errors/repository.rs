use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Classifies a sqlx error so callers can tell integrity violations
    /// (SQLSTATE class 23) apart from a store that cannot be reached.
    pub fn from_sqlx(err: SqlxError) -> Self {
        match err {
            SqlxError::Database(db) => {
                let code = db.code().map(|c| c.to_string());
                match code.as_deref() {
                    Some("23505") => Self::AlreadyExists(db.message().to_string()),
                    Some("23503") => Self::ForeignKey(db.message().to_string()),
                    Some(c) if c.starts_with("23") => Self::Conflict(db.message().to_string()),
                    _ => Self::Sqlx(SqlxError::Database(db)),
                }
            }
            SqlxError::RowNotFound => Self::NotFound,
            e @ (SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_)) => {
                Self::Unavailable(e.to_string())
            }
            other => Self::Sqlx(other),
        }
    }
}
