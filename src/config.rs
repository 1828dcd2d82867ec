//! Server configuration.
//!
//! All settings come from environment variables:
//!
//! ```bash
//! DOCGATE_BIND=127.0.0.1:3587
//! DOCGATE_DB_ENDPOINT=ws://localhost:8000
//! DOCGATE_DB_USERNAME=root
//! DOCGATE_DB_PASSWORD=secret
//! DOCGATE_DB_NAMESPACE=docgate
//! DOCGATE_DB_DATABASE=docgate
//! DOCGATE_JWT_SECRET=...              # required
//! DOCGATE_SITE_URL=https://docs.example.com
//! DOCGATE_GOOGLE_CLIENT_ID=...        # optional, enables Google sign-in
//! DOCGATE_DOCS_DIR=build
//! ```

use std::env;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub db_endpoint: String,
    pub db_username: String,
    pub db_password: String,
    pub db_namespace: String,
    pub db_database: String,
    pub jwt_secret: String,
    /// Public base URL of the documentation site, used to build signup links.
    pub site_url: String,
    pub google_client_id: Option<String>,
    /// Directory holding the built static documentation tree.
    pub docs_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: var_or("DOCGATE_BIND", "127.0.0.1:3587"),
            db_endpoint: var_or("DOCGATE_DB_ENDPOINT", "ws://localhost:8000"),
            db_username: var_or("DOCGATE_DB_USERNAME", "root"),
            db_password: var_or("DOCGATE_DB_PASSWORD", "secret"),
            db_namespace: var_or("DOCGATE_DB_NAMESPACE", "docgate"),
            db_database: var_or("DOCGATE_DB_DATABASE", "docgate"),
            jwt_secret: env::var("DOCGATE_JWT_SECRET")
                .map_err(|_| ConfigError::MissingVar("DOCGATE_JWT_SECRET"))?,
            site_url: var_or("DOCGATE_SITE_URL", "http://localhost:3000"),
            google_client_id: env::var("DOCGATE_GOOGLE_CLIENT_ID").ok(),
            docs_dir: var_or("DOCGATE_DOCS_DIR", "build"),
        })
    }
}
