use crate::utils::error::{Result, SkillError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SkillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SkillError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Shared checks for every [`ConfigProvider`](crate::config::ConfigProvider).
pub fn validate_provider<C: crate::config::ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("rates_endpoint", config.rates_endpoint())?;
    validate_range(
        "timeout_seconds",
        config.request_timeout().as_secs(),
        crate::config::MIN_TIMEOUT_SECONDS,
        crate::config::MAX_TIMEOUT_SECONDS,
    )?;
    if let Some(app_id) = config.application_id() {
        validate_non_empty_string("application_id", app_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("rates_endpoint", "https://example.com/latest").is_ok());
        assert!(validate_url("rates_endpoint", "http://api.fixer.io/latest?base=TRY").is_ok());
        assert!(validate_url("rates_endpoint", "").is_err());
        assert!(validate_url("rates_endpoint", "invalid-url").is_err());
        assert!(validate_url("rates_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 5u64, 1, 60).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 60).is_err());
        assert!(validate_range("timeout_seconds", 61u64, 1, 60).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("amzn1.ask.skill.test".to_string());
        assert!(validate_required_field("application_id", &present).is_ok());

        let missing: Option<String> = None;
        let err = validate_required_field("application_id", &missing).unwrap_err();
        assert!(matches!(err, SkillError::MissingConfigError { field } if field == "application_id"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("application_id", "abc").is_ok());
        assert!(validate_non_empty_string("application_id", "   ").is_err());
    }
}
