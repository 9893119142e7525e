pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::rates::HttpRateFetcher;
pub use config::{ConfigProvider, LambdaConfig, TomlConfig};
pub use core::dispatcher::SkillDispatcher;
pub use domain::model::{RequestEnvelope, ResponseEnvelope};
pub use utils::error::{Result, SkillError};
