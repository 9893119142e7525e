use crate::config::{ConfigProvider, DEFAULT_RATES_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{validate_provider, Validate};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub rates_endpoint: String,
    pub timeout_seconds: u64,
    pub application_id: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup("RATES_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SkillError::InvalidConfigValueError {
                    field: "RATES_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            rates_endpoint: lookup("RATES_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_RATES_ENDPOINT.to_string()),
            timeout_seconds,
            application_id: lookup("SKILL_APPLICATION_ID").filter(|id| !id.is_empty()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn rates_endpoint(&self) -> &str {
        &self.rates_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
