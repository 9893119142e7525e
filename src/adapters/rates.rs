use crate::config::ConfigProvider;
use crate::domain::model::RateSnapshot;
use crate::domain::ports::RateSource;
use crate::utils::error::{Result, SkillError};
use reqwest::Client;
use std::time::Duration;

/// Fixer.io quote for one lira, which the skill divides by.
pub const DEFAULT_RATES_ENDPOINT: &str = "http://api.fixer.io/latest?base=TRY";

pub struct HttpRateFetcher {
    client: Client,
    endpoint: String,
}

impl HttpRateFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use a caller-provided client, e.g. one shared across warm invocations.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.rates_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RateSource for HttpRateFetcher {
    async fn fetch_rates(&self) -> Result<RateSnapshot> {
        tracing::debug!("Making rates request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Rates API response status: {}", status);
        if !status.is_success() {
            return Err(SkillError::RateStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let snapshot = RateSnapshot::from_api_body(&body)?;
        tracing::debug!("Fetched rates: {:?}", snapshot);

        Ok(snapshot)
    }
}
