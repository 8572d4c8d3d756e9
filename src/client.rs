use std::sync::Arc;

use crate::config::{Environment, TradierConfig};
use crate::error::Result;
use crate::http::TradierHttp;
use crate::market_data::MarketDataRequests;

/// Entry point binding an access token and an environment to the API.
///
/// The transport is built once and shared by every endpoint group; cloning a
/// `Tradier` shares it as well.
///
/// # Example
/// ```rust,no_run
/// use tradier_market_data::{Environment, Tradier};
///
/// # async fn example() -> tradier_market_data::Result<()> {
/// let tradier = Tradier::new("access-token", Environment::Sandbox)?;
/// let strikes = tradier
///     .market_data
///     .get_option_strikes("SPY", chrono::NaiveDate::from_ymd_opt(2024, 12, 20).unwrap())
///     .await?;
/// println!("{} strikes", strikes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tradier {
    /// `None` when bound to a custom base URL
    pub environment: Option<Environment>,
    pub market_data: MarketDataRequests,
    http: Arc<TradierHttp>
}

impl Tradier {
    pub fn new(access_token: &str, environment: Environment) -> Result<Self> {
        let mut tradier = Self::with_base_url(access_token, environment.base_url())?;
        tradier.environment = Some(environment);
        Ok(tradier)
    }

    /// Bind to an arbitrary origin, e.g. a proxy or a local stub server
    pub fn with_base_url(access_token: &str, base_url: &str) -> Result<Self> {
        let http = Arc::new(TradierHttp::new(base_url, access_token)?);
        Ok(Self {
            environment: None,
            market_data: MarketDataRequests::new(Arc::clone(&http)),
            http
        })
    }

    pub fn from_config(config: &TradierConfig) -> Result<Self> {
        Self::new(&config.access_token, config.environment)
    }

    /// Build from `TRADIER_API_KEY` and `TRADIER_ENVIRONMENT`
    pub fn from_env() -> Result<Self> {
        Self::from_config(&TradierConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }
}
