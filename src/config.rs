use crate::error::{Result, TradierError};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const API_KEY_VAR: &str = "TRADIER_API_KEY";
pub const ENVIRONMENT_VAR: &str = "TRADIER_ENVIRONMENT";

/// Tradier API deployment a client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Beta,
    Sandbox,
    /// Streaming origin. None of the market-data endpoints are served from it;
    /// it is kept so callers can resolve its base URL.
    Stream
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.tradier.com/v1/",
            Environment::Beta => "https://api.tradier.com/beta/",
            Environment::Sandbox => "https://sandbox.tradier.com/v1/",
            Environment::Stream => "https://stream.tradier.com/v1/"
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Beta => write!(f, "beta"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Stream => write!(f, "stream")
        }
    }
}

impl FromStr for Environment {
    type Err = TradierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prod" | "production" => Ok(Environment::Production),
            "beta" => Ok(Environment::Beta),
            "sandbox" => Ok(Environment::Sandbox),
            "stream" => Ok(Environment::Stream),
            other => Err(TradierError::ConfigError(format!(
                "unknown Tradier environment '{}', expected one of prod, beta, sandbox, stream",
                other
            )))
        }
    }
}

/// Credentials plus environment selection
#[derive(Clone)]
pub struct TradierConfig {
    pub access_token: String,
    pub environment: Environment
}

impl fmt::Debug for TradierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradierConfig")
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

impl TradierConfig {
    pub fn new(access_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            access_token: access_token.into(),
            environment
        }
    }

    /// Read `TRADIER_API_KEY` (required) and `TRADIER_ENVIRONMENT` (optional,
    /// defaults to production).
    pub fn from_env() -> Result<Self> {
        let access_token = match env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                return Err(TradierError::ConfigError(format!(
                    "{} environment variable not found",
                    API_KEY_VAR
                )))
            }
        };
        let environment = match env::var(ENVIRONMENT_VAR) {
            Ok(tag) if !tag.trim().is_empty() => tag.parse()?,
            _ => Environment::Production
        };
        Ok(Self::new(access_token, environment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!("beta".parse::<Environment>().unwrap(), Environment::Beta);
        assert_eq!(" SANDBOX ".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("stream".parse::<Environment>().unwrap(), Environment::Stream);
    }

    #[test]
    fn test_environment_from_str_unknown() {
        let err = "paper".parse::<Environment>().unwrap_err();
        assert!(matches!(err, TradierError::ConfigError(_)));
        assert!(err.to_string().contains("paper"));

        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_display_round_trips() {
        for environment in [
            Environment::Production,
            Environment::Beta,
            Environment::Sandbox,
            Environment::Stream
        ] {
            let tag = environment.to_string();
            assert_eq!(tag.parse::<Environment>().unwrap(), environment);
        }
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.tradier.com/v1/");
        assert_eq!(Environment::Beta.base_url(), "https://api.tradier.com/beta/");
        assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.tradier.com/v1/");
        assert_eq!(Environment::Stream.base_url(), "https://stream.tradier.com/v1/");
    }

    #[test]
    fn test_config_debug_hides_token() {
        let config = TradierConfig::new("secret-token", Environment::Sandbox);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("Sandbox"));
    }
}
