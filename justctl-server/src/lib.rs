//! justctl-server: justification store and HTTP query route
//!
//! Stores opaque justification payloads keyed by chain id and block number
//! in Postgres, and serves them over `GET /justification`.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DatabaseConfig, RuntimeEnv, TlsPolicy};
pub use db::{Database, DbError, JustificationRepo, JustificationStore};
pub use http::{run_server, ServerConfig};
