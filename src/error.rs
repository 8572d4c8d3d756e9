use std::fmt;

#[derive(Debug)]
pub enum TradierError {
    HttpError(String),
    StatusError { status: u16, body: String },
    JsonError(String),
    ConfigError(String)
}

pub type Result<T> = std::result::Result<T, TradierError>;

impl fmt::Display for TradierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradierError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            TradierError::StatusError { status, body } => {
                write!(f, "API request failed with status {}: {}", status, body)
            }
            TradierError::JsonError(msg) => write!(f, "JSON parsing error: {}", msg),
            TradierError::ConfigError(msg) => write!(f, "Configuration error: {}", msg)
        }
    }
}

impl std::error::Error for TradierError {}

impl From<serde_json::Error> for TradierError {
    fn from(err: serde_json::Error) -> TradierError {
        TradierError::JsonError(err.to_string())
    }
}

impl From<reqwest::Error> for TradierError {
    fn from(err: reqwest::Error) -> TradierError {
        TradierError::HttpError(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for TradierError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> TradierError {
        TradierError::ConfigError(format!("invalid access token: {}", err))
    }
}
