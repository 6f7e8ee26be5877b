//! Command implementations for justctl CLI

pub mod serve;
pub mod store;

use anyhow::{Context, Result};
use clap::Args;
use justctl_server::{Database, DatabaseConfig, RuntimeEnv};

pub use serve::run_serve;
pub use store::{run_exists, run_get, run_latest, run_put};

/// Database connection flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Runtime environment; `production` turns on TLS to the database
    #[arg(long = "env", env = "APP_ENV", default_value = "development")]
    pub app_env: RuntimeEnv,
}

impl DbArgs {
    pub fn config(&self) -> Result<DatabaseConfig> {
        let url = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
        Ok(DatabaseConfig::new(url, self.app_env))
    }

    pub async fn connect(&self) -> Result<Database> {
        let config = self.config()?;
        Database::connect(&config)
            .await
            .context("Failed to create database pool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justctl_server::TlsPolicy;

    #[test]
    fn missing_url_is_reported() {
        let args = DbArgs {
            database_url: None,
            app_env: RuntimeEnv::Development,
        };
        let err = args.config().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[test]
    fn production_env_selects_tls() {
        let args = DbArgs {
            database_url: Some("postgres://localhost/justctl".into()),
            app_env: RuntimeEnv::Production,
        };
        let config = args.config().unwrap();
        assert_eq!(config.url, "postgres://localhost/justctl");
        assert_eq!(config.tls, TlsPolicy::Require);
    }
}
