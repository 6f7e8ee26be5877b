//! Domain models with validation at construction
//!
//! Query parameters are validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod justification;
pub mod response;
pub mod validation;

pub use justification::{parse_block_number, ChainId, JustificationId, JustificationRecord};
pub use response::JustificationResponse;
pub use validation::ValidationError;
