//! Justification lookup endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{parse_block_number, ChainId, JustificationResponse, ValidationError};

/// Query parameters of interest; the first occurrence of a repeated key wins.
#[derive(Debug, Default)]
pub struct JustificationQuery {
    pub block_number: Option<String>,
    pub avail_chain_id: Option<String>,
}

impl JustificationQuery {
    /// Collect from raw key/value pairs, ignoring unknown keys.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "blockNumber" => &mut query.block_number,
                "availChainId" => &mut query.avail_chain_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    fn validate(&self) -> Result<(ChainId, u32), ValidationError> {
        let block_number = self
            .block_number
            .as_deref()
            .ok_or(ValidationError::Missing { field: "blockNumber" })?;
        let chain_id = self
            .avail_chain_id
            .as_deref()
            .ok_or(ValidationError::Missing { field: "availChainId" })?;

        Ok((ChainId::new(chain_id)?, parse_block_number(block_number)?))
    }
}

/// GET /justification?blockNumber=..&availChainId=..
///
/// The query is taken as plain pairs so a malformed string is answered with
/// our own envelope instead of the extractor's 400.
async fn get_justification(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<JustificationResponse>, ApiError> {
    let Query(pairs) = query.map_err(|_| ValidationError::InvalidFormat {
        field: "query",
        reason: "not a valid query string",
    })?;
    let (chain_id, block_number) = JustificationQuery::from_pairs(pairs).validate()?;

    let record = state
        .store
        .get(chain_id.as_str(), block_number)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            chain_id: chain_id.as_str().to_owned(),
            block_number,
        })?;

    Ok(Json(JustificationResponse::found(record.data)))
}

/// Justification routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/justification", get(get_justification))
}
