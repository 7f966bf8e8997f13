use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected status {status} while fetching '{key}'")]
    UnexpectedStatus { key: String, status: u16 },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl SiteError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SiteError::ConfigValidationError { .. }
                | SiteError::InvalidConfigValueError { .. }
                | SiteError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ApiError(_) | SiteError::UnexpectedStatus { .. } => {
                "Could not reach the constants API".to_string()
            }
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::SerializationError(e) => format!("Dataset is not valid JSON: {}", e),
            SiteError::CsvError(e) => format!("Could not write CSV output: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ApiError(_) | SiteError::UnexpectedStatus { .. } => {
                "Check the endpoint and your network connection"
            }
            SiteError::UrlError(_) => "Endpoints must be absolute http(s) URLs",
            SiteError::IoError(_) => "Check that the path exists and is readable",
            _ if self.is_config_error() => "Fix the configuration file and try again",
            _ => "Re-run with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
