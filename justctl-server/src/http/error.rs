//! API error types with IntoResponse
//!
//! Every outcome of the justification route is answered with HTTP 200 and a
//! `{ success: false, error }` body. The error kind survives up to this point
//! so it can be logged before the message is flattened.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::response::{MSG_DATABASE, MSG_MISSING_PARAMS, MSG_NOT_FOUND};
use crate::models::{JustificationResponse, ValidationError};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameters missing or malformed
    Validation(ValidationError),

    /// No justification stored for the key
    NotFound { chain_id: String, block_number: u32 },

    /// Connection or storage failure (logged, generic message)
    Database(DbError),
}

impl ApiError {
    /// Message shown to clients
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => MSG_MISSING_PARAMS,
            Self::NotFound { .. } => MSG_NOT_FOUND,
            Self::Database(_) => MSG_DATABASE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!(error = %e, "rejected justification query"),
            Self::NotFound {
                chain_id,
                block_number,
            } => tracing::debug!(chain_id, block_number, "justification not found"),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(kind = e.kind(), error = %e, "Database error");
            }
        }

        let body = JustificationResponse::failure(self.public_message());
        (StatusCode::OK, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, JustificationResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_200_with_missing_params() {
        let (status, body) =
            body_of(ApiError::Validation(ValidationError::Missing { field: "blockNumber" })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some(MSG_MISSING_PARAMS));
    }

    #[tokio::test]
    async fn not_found_is_200() {
        let (status, body) = body_of(ApiError::NotFound {
            chain_id: "chainX".into(),
            block_number: 999,
        })
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error.as_deref(), Some(MSG_NOT_FOUND));
    }

    #[tokio::test]
    async fn database_errors_are_flattened() {
        for err in [
            DbError::Connection(sqlx::Error::PoolTimedOut),
            DbError::Storage(sqlx::Error::Protocol("boom".into())),
        ] {
            let (status, body) = body_of(ApiError::from(err)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.error.as_deref(), Some(MSG_DATABASE));
            assert_eq!(body.justification, None);
        }
    }
}
