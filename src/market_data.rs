use crate::http::{Query, TradierHttp};
use std::fmt::Display;
use std::sync::Arc;

/// Market data endpoints (`/markets/...`).
///
/// Every method issues exactly one GET against the shared transport and
/// unwraps the response envelope. Arguments passed as `None` are left out of
/// the query string. Nothing is validated or cached client side.
///
/// The endpoint methods live next to their response handling in `quotes`,
/// `chain`, `expirations`, `lookup`, `history` and `etb`.
///
/// # Example
/// ```rust,no_run
/// use tradier_market_data::{Environment, Tradier};
///
/// # async fn example() -> tradier_market_data::Result<()> {
/// let tradier = Tradier::new("access-token", Environment::Sandbox)?;
/// let quotes = tradier.market_data.get_quotes(["SPY", "QQQ"], None).await?;
/// for quote in quotes {
///     println!("{} {:?}", quote.symbol, quote.last);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataRequests {
    pub(crate) http: Arc<TradierHttp>
}

impl MarketDataRequests {
    pub fn new(http: Arc<TradierHttp>) -> Self {
        Self { http }
    }
}

pub(crate) fn push_param(query: &mut Query, name: &'static str, value: Option<impl Display>) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::Result;

    pub fn requests() -> MarketDataRequests {
        let http = TradierHttp::new("https://sandbox.tradier.com/v1/", "test-token").unwrap();
        MarketDataRequests::new(Arc::new(http))
    }

    /// Path and query string the transport would send
    pub fn url_of(requests: &MarketDataRequests, path: &str, query: &Query) -> Result<String> {
        let request = requests.http.request(path, query)?;
        Ok(request.url().as_str().to_string())
    }
}
