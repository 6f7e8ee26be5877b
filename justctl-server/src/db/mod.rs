//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool per process, constructed explicitly and passed down
//! - Every operation checks out one connection for one statement
//! - Connections return to the pool when their guard drops, error paths included
//! - Writes are single `ON CONFLICT` statements, never check-then-insert

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{Database, PoolStats};
pub use repos::*;

/// DDL for the `justifications` table.
pub const SCHEMA: &str = include_str!("../../sql/justifications.sql");
