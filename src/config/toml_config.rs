use crate::config::{ConfigProvider, DEFAULT_RATES_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_provider, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub skill: SkillConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillConfig {
    pub application_id: Option<String>,
    /// Refuse to start without an application id.
    #[serde(default)]
    pub require_application_id: bool,
}

fn default_endpoint() -> String {
    DEFAULT_RATES_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn rates_endpoint(&self) -> &str {
        &self.rates.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.rates.timeout_seconds)
    }

    fn application_id(&self) -> Option<&str> {
        self.skill.application_id.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.skill.require_application_id {
            validate_required_field("skill.application_id", &self.skill.application_id)?;
        }
        validate_provider(self)?;

        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}
