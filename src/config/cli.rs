use crate::config::{ConfigProvider, DEFAULT_RATES_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_provider, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::io::AsyncReadExt;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "exchange-skill")]
#[command(about = "Run the exchange calculator skill against a request envelope")]
pub struct CliConfig {
    #[arg(long, default_value = "-", help = "Request envelope JSON file, '-' for stdin")]
    pub event: String,

    #[arg(long, default_value = DEFAULT_RATES_ENDPOINT)]
    pub rates_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long)]
    pub application_id: Option<String>,

    #[arg(long, help = "TOML config file; replaces the rates and application options")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
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

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("event", &self.event)?;
        validate_provider(self)?;
        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}

/// Read one request envelope from a file, or stdin when `path` is `-`.
pub async fn read_event(path: &str) -> Result<serde_json::Value> {
    let raw = if path == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        tokio::fs::read(path).await?
    };

    Ok(serde_json::from_slice(&raw)?)
}
