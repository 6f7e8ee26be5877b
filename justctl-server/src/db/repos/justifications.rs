//! Justification repository
//!
//! - get/exists: lookup by derived id
//! - put: INSERT with ON CONFLICT (id) DO UPDATE, one atomic statement
//! - latest_block_number: MAX over the chain, case-insensitive

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

use super::JustificationStore;
use crate::db::{Database, DbError};
use crate::models::{JustificationId, JustificationRecord};

/// Row as stored in `justifications`
#[derive(Debug, FromRow)]
struct JustificationRow {
    id: String,
    avail_chain_id: String,
    block_number: i64,
    data: Json<Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<JustificationRow> for JustificationRecord {
    type Error = DbError;

    fn try_from(row: JustificationRow) -> Result<Self, Self::Error> {
        let block_number = u32::try_from(row.block_number).map_err(|_| DbError::Corrupt {
            id: row.id.clone(),
            reason: format!("block number {} out of range", row.block_number),
        })?;

        Ok(Self {
            id: row.id,
            chain_id: row.avail_chain_id,
            block_number,
            data: row.data.0,
            created_at: row.created_at,
        })
    }
}

/// Postgres-backed justification repository
#[derive(Debug, Clone)]
pub struct JustificationRepo {
    db: Database,
}

impl JustificationRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl JustificationStore for JustificationRepo {
    async fn get(
        &self,
        chain_id: &str,
        block_number: u32,
    ) -> Result<Option<JustificationRecord>, DbError> {
        let id = JustificationId::derive(chain_id, block_number);
        tracing::debug!(chain_id, block_number, %id, "fetching justification");

        let mut conn = self.db.acquire().await?;
        let row = sqlx::query_as::<_, JustificationRow>(
            r#"
            SELECT id, avail_chain_id, block_number, data, created_at
            FROM justifications
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(DbError::Storage)?;

        row.map(JustificationRecord::try_from).transpose()
    }

    async fn put(&self, chain_id: &str, block_number: u32, data: &Value) -> Result<(), DbError> {
        let id = JustificationId::derive(chain_id, block_number);
        tracing::debug!(chain_id, block_number, %id, "storing justification");

        let mut conn = self.db.acquire().await?;
        // Conflict target is the derived id so differently-cased chain ids
        // land on the same row.
        sqlx::query(
            r#"
            INSERT INTO justifications (id, avail_chain_id, block_number, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id)
            DO UPDATE SET data = EXCLUDED.data, created_at = NOW()
            "#,
        )
        .bind(id.as_str())
        .bind(chain_id)
        .bind(i64::from(block_number))
        .bind(Json(data))
        .execute(&mut *conn)
        .await
        .map_err(DbError::Storage)?;

        Ok(())
    }

    async fn exists(&self, chain_id: &str, block_number: u32) -> Result<bool, DbError> {
        let id = JustificationId::derive(chain_id, block_number);

        let mut conn = self.db.acquire().await?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM justifications WHERE id = $1)",
        )
        .bind(id.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(DbError::Storage)
    }

    async fn latest_block_number(&self, chain_id: &str) -> Result<Option<u32>, DbError> {
        let mut conn = self.db.acquire().await?;
        let latest = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT MAX(block_number)
            FROM justifications
            WHERE lower(avail_chain_id) = lower($1)
            "#,
        )
        .bind(chain_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(DbError::Storage)?;

        latest
            .map(|block| {
                u32::try_from(block).map_err(|_| DbError::Corrupt {
                    id: chain_id.to_owned(),
                    reason: format!("latest block number {} out of range", block),
                })
            })
            .transpose()
    }
}
