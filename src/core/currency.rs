use crate::domain::model::{Currency, RateSnapshot};
use crate::utils::error::{Result, SkillError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Dollars, Currency::Euros];

    /// Resolve the spoken slot value (e.g. "dollars") to a currency.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "dollars" => Ok(Currency::Dollars),
            "euros" => Ok(Currency::Euros),
            _ => Err(SkillError::UnsupportedCurrency {
                label: label.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Dollars => "dollars",
            Currency::Euros => "euros",
        }
    }

    /// ISO 4217 code used as the key in the rates API response.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Dollars => "USD",
            Currency::Euros => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Deserialize)]
struct RatesPayload {
    rates: serde_json::Map<String, serde_json::Value>,
}

impl RateSnapshot {
    pub fn new(usd: f64, eur: f64) -> Result<Self> {
        let mut rates = HashMap::new();
        for (currency, rate) in [(Currency::Dollars, usd), (Currency::Euros, eur)] {
            rates.insert(currency, checked_rate(currency, Some(rate))?);
        }
        Ok(Self { rates })
    }

    /// Parse a `{"rates": {"EUR": .., "USD": ..}}` body. Other currencies in
    /// the payload are ignored.
    pub fn from_api_body(body: &[u8]) -> Result<Self> {
        let payload: RatesPayload =
            serde_json::from_slice(body).map_err(SkillError::RateParseError)?;

        let mut rates = HashMap::new();
        for currency in Currency::ALL {
            let raw = payload.rates.get(currency.code()).and_then(|v| v.as_f64());
            rates.insert(currency, checked_rate(currency, raw)?);
        }

        Ok(Self { rates })
    }

    pub fn rate_for(&self, currency: Currency) -> Result<f64> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| SkillError::MissingRate {
                currency: currency.code().to_string(),
            })
    }
}

fn checked_rate(currency: Currency, rate: Option<f64>) -> Result<f64> {
    match rate {
        Some(r) if r.is_finite() && r > 0.0 => Ok(r),
        _ => Err(SkillError::MissingRate {
            currency: currency.code().to_string(),
        }),
    }
}

/// Parse the spoken amount. Only finite, non-negative numbers are accepted.
pub fn parse_amount(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(SkillError::InvalidAmount {
            value: value.to_string(),
        }),
    }
}

/// Amount of lira for `amount` units of a currency quoted at `rate` per lira.
/// Fails when the rounded result does not fit in an `i64`.
pub fn convert_to_lira(amount: f64, rate: f64) -> Result<i64> {
    let liras = (amount / rate).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !liras.is_finite() || liras < i64::MIN as f64 || liras >= i64::MAX as f64 {
        return Err(SkillError::InvalidAmount {
            value: amount.to_string(),
        });
    }
    Ok(liras as i64)
}
