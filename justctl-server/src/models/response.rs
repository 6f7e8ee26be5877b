//! Response envelope for the justification route

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MSG_MISSING_PARAMS: &str = "Missing required parameters: blockNumber and availChainId";
pub const MSG_NOT_FOUND: &str = "No justification found";
pub const MSG_DATABASE: &str = "Database error occurred";

/// `{ success, justification?, error? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JustificationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JustificationResponse {
    pub fn found(data: Value) -> Self {
        Self {
            success: true,
            justification: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            justification: None,
            error: Some(message.into()),
        }
    }
}
