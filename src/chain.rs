use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::http::Query;
use crate::market_data::{push_param, MarketDataRequests};
use crate::types::{OptionChain, OptionChainResponse, StrikesResponse};
use crate::util::date_to_tradier;

impl MarketDataRequests {
    /// Get all quotes in an option chain for one expiration
    ///
    /// # Arguments
    /// * `symbol` - The underlying symbol (e.g., "SPY", "AAPL")
    /// * `expiration` - Expiration date
    /// * `greeks` - Whether to include Greeks and IV data
    ///
    /// # Returns
    /// `OptionChain::Chain` with the contracts from `.options.option`, or
    /// `OptionChain::Empty` when Tradier answers `{"options": null}`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use chrono::NaiveDate;
    /// use tradier_market_data::{Environment, OptionChain, Tradier};
    ///
    /// # async fn example() -> tradier_market_data::Result<()> {
    /// let tradier = Tradier::new("access-token", Environment::Production)?;
    /// let expiration = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
    /// match tradier.market_data.get_option_chain("SPY", expiration, Some(true)).await? {
    ///     OptionChain::Chain(options) => println!("Found {} options", options.len()),
    ///     OptionChain::Empty => println!("No contracts for that expiration"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_option_chain(
        &self,
        symbol: &str,
        expiration: NaiveDate,
        greeks: Option<bool>
    ) -> Result<OptionChain> {
        let query = chain_query(symbol, expiration, greeks);
        let response: OptionChainResponse =
            self.http.get("markets/options/chains", query).await?;

        match response.options {
            Some(options) => Ok(OptionChain::Chain(options.option)),
            None => {
                debug!("No option chain for {} expiring {}", symbol, expiration);
                Ok(OptionChain::Empty)
            }
        }
    }

    /// Get the strike prices listed for one expiration (`.strikes.strike`)
    pub async fn get_option_strikes(
        &self,
        symbol: &str,
        expiration: NaiveDate
    ) -> Result<Vec<f64>> {
        let query = strikes_query(symbol, expiration);
        let response: StrikesResponse = self.http.get("markets/options/strikes", query).await?;
        Ok(response.strikes.map(|s| s.strike).unwrap_or_default())
    }
}

fn chain_query(symbol: &str, expiration: NaiveDate, greeks: Option<bool>) -> Query {
    let mut query = strikes_query(symbol, expiration);
    push_param(&mut query, "greeks", greeks);
    query
}

fn strikes_query(symbol: &str, expiration: NaiveDate) -> Query {
    vec![
        ("symbol", symbol.to_string()),
        ("expiration", date_to_tradier(expiration)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::test_support::{requests, url_of};

    fn expiration() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 7, 1).unwrap()
    }

    #[test]
    fn test_chain_query() {
        let url = url_of(
            &requests(),
            "markets/options/chains",
            &chain_query("TSLA", expiration(), Some(false))
        )
        .unwrap();
        assert!(url.ends_with(
            "/markets/options/chains?symbol=TSLA&expiration=2022-07-01&greeks=false"
        ));
    }

    #[test]
    fn test_chain_query_omits_greeks() {
        let query = chain_query("TSLA", expiration(), None);
        assert!(query.iter().all(|(name, _)| *name != "greeks"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_strikes_query() {
        assert_eq!(
            strikes_query("TSLA", expiration()),
            vec![
                ("symbol", "TSLA".to_string()),
                ("expiration", "2022-07-01".to_string()),
            ]
        );
    }
}
