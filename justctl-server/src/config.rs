//! Database configuration - connection string and TLS policy
//!
//! The CLI resolves `DATABASE_URL` and `APP_ENV` (flags, environment or
//! `.env`) and builds a [`DatabaseConfig`] from them; `production` turns TLS on.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long `acquire` waits for a free connection before giving up.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime mode the process was started in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    Production,
    #[default]
    Development,
}

impl FromStr for RuntimeEnv {
    type Err = std::convert::Infallible;

    /// Anything other than `production`/`prod` is treated as development.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            _ => Ok(Self::Development),
        }
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

/// Transport security for database connections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Plaintext connections (local development)
    Disable,
    /// Encrypted connections; the server certificate is not verified
    Require,
}

impl From<RuntimeEnv> for TlsPolicy {
    fn from(env: RuntimeEnv) -> Self {
        match env {
            RuntimeEnv::Production => Self::Require,
            RuntimeEnv::Development => Self::Disable,
        }
    }
}

/// Everything needed to build the connection pool
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub tls: TlsPolicy,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Config for `url` with the TLS policy implied by `env`.
    pub fn new(url: impl Into<String>, env: RuntimeEnv) -> Self {
        Self {
            url: url.into(),
            tls: TlsPolicy::from(env),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

// Connection strings carry credentials; keep them out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("tls", &self.tls)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
