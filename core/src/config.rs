//! Client configuration loaded from the environment.
//!
//! Reads `ENVIRONMENT`, `X_AUTH_TOKEN` and the optional `BASE_URL`. A `.env`
//! file in the working directory is honoured in development; real env vars
//! take precedence over it.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Environment name, the `{environment}` in `https://{environment}.bloomreach.io`.
    #[serde(default)]
    pub environment: String,
    pub x_auth_token: String,
    /// Overrides the host derived from `environment`.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        let _ = dotenvy::dotenv();
        Self::load(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ApiError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self, ApiError> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default().source(vars))
            .build()?;
        let loaded: ClientConfig = cfg.try_deserialize()?;
        if loaded.environment.is_empty() && loaded.base_url.is_none() {
            return Err(ApiError::Config("ENVIRONMENT is empty".into()));
        }
        if loaded.x_auth_token.is_empty() {
            return Err(ApiError::Config("X_AUTH_TOKEN is empty".into()));
        }
        Ok(loaded)
    }
}
