use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Invalid intent: {name}")]
    InvalidIntent { name: String },

    #[error("Unsupported request type: {request_type}")]
    UnsupportedRequest { request_type: String },

    #[error("Invalid application id: {application_id}")]
    InvalidApplicationId { application_id: String },

    #[error("Unsupported currency: {label}")]
    UnsupportedCurrency { label: String },

    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    #[error("Rates API request failed: {0}")]
    RateApiError(#[from] reqwest::Error),

    #[error("Rates API returned status {status}")]
    RateStatusError { status: u16 },

    #[error("Rates API response could not be parsed: {0}")]
    RateParseError(#[source] serde_json::Error),

    #[error("Rates API response has no usable rate for {currency}")]
    MissingRate { currency: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The inbound envelope asked for something the skill does not handle.
    Request,
    /// The user's slot values could not be used.
    Input,
    /// The external rates service failed or returned garbage.
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SkillError::InvalidIntent { .. }
            | SkillError::UnsupportedRequest { .. }
            | SkillError::InvalidApplicationId { .. }
            | SkillError::SerializationError(_) => ErrorCategory::Request,
            SkillError::UnsupportedCurrency { .. } | SkillError::InvalidAmount { .. } => {
                ErrorCategory::Input
            }
            SkillError::RateApiError(_)
            | SkillError::RateStatusError { .. }
            | SkillError::RateParseError(_)
            | SkillError::MissingRate { .. } => ErrorCategory::Upstream,
            SkillError::TomlError(_)
            | SkillError::MissingConfigError { .. }
            | SkillError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SkillError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            // 上游服務可能只是暫時失敗
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Request => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkillError::InvalidIntent { name } => {
                format!("The skill does not know how to handle the intent '{}'", name)
            }
            SkillError::UnsupportedRequest { request_type } => {
                format!("Request type '{}' is not supported", request_type)
            }
            SkillError::InvalidApplicationId { .. } => {
                "The request was sent by an application this skill does not serve".to_string()
            }
            SkillError::UnsupportedCurrency { label } => format!(
                "'{}' is not a supported currency, only dollars and euros are",
                label
            ),
            SkillError::InvalidAmount { value } => {
                format!("'{}' is not an amount that can be exchanged", value)
            }
            SkillError::RateApiError(e) if e.is_timeout() => {
                "The exchange rates service did not answer in time".to_string()
            }
            SkillError::RateApiError(_) | SkillError::RateStatusError { .. } => {
                "The exchange rates service is unavailable".to_string()
            }
            SkillError::RateParseError(_) | SkillError::MissingRate { .. } => {
                "The exchange rates service returned data the skill cannot read".to_string()
            }
            SkillError::SerializationError(_) => "The request envelope is malformed".to_string(),
            SkillError::TomlError(_)
            | SkillError::MissingConfigError { .. }
            | SkillError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            SkillError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => {
                "Check the interaction model and the request envelope sent to the skill"
            }
            ErrorCategory::Input => "Ask again with an amount and either dollars or euros",
            ErrorCategory::Upstream => {
                "Retry later or point --rates-endpoint at a reachable rates service"
            }
            ErrorCategory::Configuration => "Fix the configuration file or environment variables",
            ErrorCategory::System => "Check that the input file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
