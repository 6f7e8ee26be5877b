//! Justification records and their identifiers
//!
//! A justification is an opaque payload attached to one block of one chain.
//! Records are keyed by `lower(chain_id + "-" + block_number)`, so chain ids
//! that differ only in letter case address the same record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::ValidationError;

/// Derived primary key of a justification record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JustificationId(String);

impl JustificationId {
    /// Derive the record key for a chain and block.
    ///
    /// # Example
    /// ```
    /// use justctl_server::models::JustificationId;
    ///
    /// let id = JustificationId::derive("Turing-Testnet", 42);
    /// assert_eq!(id.as_str(), "turing-testnet-42");
    /// assert_eq!(id, JustificationId::derive("turing-testnet", 42));
    /// ```
    pub fn derive(chain_id: &str, block_number: u32) -> Self {
        Self(format!("{}-{}", chain_id, block_number).to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JustificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, non-empty chain identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "availChainId" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a block number from its textual form.
///
/// Accepts base-10 integers in `0..=u32::MAX`; anything else (signs,
/// fractions, exponents, surrounding noise) is rejected.
pub fn parse_block_number(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "blockNumber" });
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "blockNumber",
            reason: "must be a non-negative integer",
        });
    }
    trimmed.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "blockNumber",
        reason: "out of range",
    })
}

/// A stored justification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JustificationRecord {
    pub id: String,
    pub chain_id: String,
    pub block_number: u32,
    /// Opaque payload, returned exactly as stored
    pub data: Value,
    pub created_at: DateTime<Utc>,
}
