//! Database error type

/// Failures surfaced by the pool and the repositories.
///
/// Connection and storage failures are kept apart so callers can tell an
/// unreachable database from a failing statement.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),

    #[error("malformed row {id}: {reason}")]
    Corrupt { id: String, reason: String },
}

impl DbError {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::Connection(_) => "connection",
            Self::Storage(_) => "storage",
            Self::Corrupt { .. } => "corrupt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        assert_eq!(DbError::Connection(sqlx::Error::PoolClosed).kind(), "connection");
        assert_eq!(DbError::Storage(sqlx::Error::RowNotFound).kind(), "storage");
        assert_eq!(
            DbError::Corrupt {
                id: "x-1".into(),
                reason: "negative block number".into()
            }
            .to_string(),
            "malformed row x-1: negative block number"
        );
    }
}
