use crate::core::currency::{convert_to_lira, parse_amount};
use crate::core::response;
use crate::domain::model::{Currency, Intent, SpeechletResponse};
use crate::domain::ports::RateSource;
use crate::utils::error::{Result, SkillError};

pub const CALCULATE_EXCHANGE: &str = "calculateExchange";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";

pub const AMOUNT_SLOT: &str = "Amount";
pub const CURRENCY_SLOT: &str = "Currency";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIntent {
    CalculateExchange,
    Help,
    Stop,
    Cancel,
}

impl SkillIntent {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            CALCULATE_EXCHANGE => Ok(SkillIntent::CalculateExchange),
            HELP_INTENT => Ok(SkillIntent::Help),
            STOP_INTENT => Ok(SkillIntent::Stop),
            CANCEL_INTENT => Ok(SkillIntent::Cancel),
            _ => Err(SkillError::InvalidIntent {
                name: name.to_string(),
            }),
        }
    }
}

/// Run the handler for `intent`. Exactly one response is produced per call.
pub async fn handle_intent<R: RateSource + ?Sized>(
    intent: &Intent,
    rates: &R,
) -> Result<SpeechletResponse> {
    match SkillIntent::from_name(&intent.name)? {
        SkillIntent::CalculateExchange => calculate_exchange(intent, rates).await,
        SkillIntent::Help => Ok(response::welcome_response()),
        SkillIntent::Stop | SkillIntent::Cancel => Ok(response::session_end_response()),
    }
}

async fn calculate_exchange<R: RateSource + ?Sized>(
    intent: &Intent,
    rates: &R,
) -> Result<SpeechletResponse> {
    let (amount_val, currency_val) = match (
        intent.slot_value(AMOUNT_SLOT),
        intent.slot_value(CURRENCY_SLOT),
    ) {
        (Some(amount), Some(currency)) => (amount, currency),
        _ => {
            tracing::info!("Exchange requested without amount or currency, asking again");
            return Ok(response::clarification_response(&intent.name));
        }
    };

    // 先驗證輸入，避免無謂的外部請求
    let amount = parse_amount(amount_val)?;
    let currency = Currency::from_label(currency_val)?;

    let snapshot = rates.fetch_rates().await?;
    let rate = snapshot.rate_for(currency)?;
    let liras = convert_to_lira(amount, rate)?;

    tracing::info!(
        amount = amount,
        currency = currency.code(),
        rate = rate,
        liras = liras,
        "Exchange calculated"
    );

    Ok(response::exchange_response(
        &intent.name,
        amount_val,
        currency_val,
        liras,
    ))
}
