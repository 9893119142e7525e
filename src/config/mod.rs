#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use std::time::Duration;

pub use crate::adapters::rates::DEFAULT_RATES_ENDPOINT;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const MIN_TIMEOUT_SECONDS: u64 = 1;
pub const MAX_TIMEOUT_SECONDS: u64 = 60;

pub trait ConfigProvider: Send + Sync {
    fn rates_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    /// Expected `session.application.applicationId`; `None` accepts any.
    fn application_id(&self) -> Option<&str>;
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use toml_config::TomlConfig;
