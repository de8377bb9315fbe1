use sea_orm::{DbErr, SqlErr};

/// Result type returned by every adapter operation.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors surfaced by the adapter.
///
/// Storage failures are classified from the Sea-ORM error:
///
/// - unique and foreign key violations → [`AdapterError::ConstraintViolation`]
/// - connection failures and pool acquire timeouts → [`AdapterError::StorageUnavailable`]
/// - everything else → [`AdapterError::Backend`]
///
/// The adapter never retries; callers decide what to do with each variant.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// An update or delete-by-id targeted an entity that does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A uniqueness or referential constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or the connection pool timed out.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Any other database or statement-building error.
    #[error("backend error: {0}")]
    Backend(String),

    /// The adapter was given a model mapping it cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AdapterError {
    pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Returns `true` for [`AdapterError::ConstraintViolation`].
    ///
    /// Useful for the "already linked, fetch existing" path after losing an
    /// insert race.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    /// Returns `true` for [`AdapterError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DbErr> for AdapterError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return Self::ConstraintViolation(msg);
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::ConstraintViolation(msg);
            }
            _ => {}
        }

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                Self::StorageUnavailable(err.to_string())
            }
            _ => Self::Backend(err.to_string()),
        }
    }
}

impl From<sea_orm::sea_query::error::Error> for AdapterError {
    fn from(err: sea_orm::sea_query::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
