//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Checks out one pooled connection per statement
//! - Handles conflicts via ON CONFLICT (no check-then-insert)
//! - Surfaces connection and storage failures unchanged, no retries

pub mod justifications;

use async_trait::async_trait;
use serde_json::Value;

use super::DbError;
use crate::models::JustificationRecord;

pub use justifications::JustificationRepo;

/// Storage operations for justifications.
///
/// Chain ids are matched case-insensitively everywhere.
#[async_trait]
pub trait JustificationStore: Send + Sync + 'static {
    /// Point lookup; `Ok(None)` when nothing is stored for the key.
    async fn get(
        &self,
        chain_id: &str,
        block_number: u32,
    ) -> Result<Option<JustificationRecord>, DbError>;

    /// Insert, or overwrite `data` and `created_at` of the existing record.
    async fn put(&self, chain_id: &str, block_number: u32, data: &Value) -> Result<(), DbError>;

    async fn exists(&self, chain_id: &str, block_number: u32) -> Result<bool, DbError>;

    /// Highest stored block for a chain.
    async fn latest_block_number(&self, chain_id: &str) -> Result<Option<u32>, DbError>;
}
