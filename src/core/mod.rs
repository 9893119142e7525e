pub mod currency;
pub mod dispatcher;
pub mod intents;
pub mod response;

pub use crate::domain::model::{Currency, RateSnapshot, RequestEnvelope, ResponseEnvelope};
pub use crate::domain::ports::RateSource;
pub use crate::utils::error::Result;
