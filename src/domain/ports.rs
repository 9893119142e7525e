use crate::domain::model::RateSnapshot;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of exchange rates against the Turkish lira.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateSnapshot>;
}
