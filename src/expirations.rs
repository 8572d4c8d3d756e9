use crate::error::Result;
use crate::http::Query;
use crate::market_data::{push_param, MarketDataRequests};
use crate::types::{Expirations, ExpirationsResponse};

impl MarketDataRequests {
    /// Get option expiration dates for an underlying
    ///
    /// Some underlyings list weeklies under a different root (SPX/SPXW,
    /// RUT/RUTW). Pass `include_all_roots` to see every expiration,
    /// including roots created by corporate actions (AAPL1).
    ///
    /// # Returns
    /// `Expirations::Detailed` from `.expirations.expiration` when either flag
    /// is `Some(true)`, otherwise `Expirations::Dates` from `.expirations.date`.
    pub async fn get_option_expiration_dates(
        &self,
        symbol: &str,
        include_all_roots: Option<bool>,
        strikes: Option<bool>
    ) -> Result<Expirations> {
        let query = expirations_query(symbol, include_all_roots, strikes);
        let response: ExpirationsResponse =
            self.http.get("markets/options/expirations", query).await?;

        let detailed = include_all_roots.unwrap_or(false) || strikes.unwrap_or(false);
        let expirations = match response.expirations {
            Some(wrapper) if detailed => Expirations::Detailed(wrapper.expiration),
            Some(wrapper) => Expirations::Dates(wrapper.date),
            None if detailed => Expirations::Detailed(Vec::new()),
            None => Expirations::Dates(Vec::new())
        };
        Ok(expirations)
    }
}

fn expirations_query(
    symbol: &str,
    include_all_roots: Option<bool>,
    strikes: Option<bool>
) -> Query {
    let mut query = vec![("symbol", symbol.to_string())];
    push_param(&mut query, "includeAllRoots", include_all_roots);
    push_param(&mut query, "strikes", strikes);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::test_support::{requests, url_of};

    #[test]
    fn test_expirations_query_all_params() {
        let url = url_of(
            &requests(),
            "markets/options/expirations",
            &expirations_query("SPX", Some(true), Some(true))
        )
        .unwrap();
        assert!(url.ends_with("?symbol=SPX&includeAllRoots=true&strikes=true"));
    }

    #[test]
    fn test_expirations_query_symbol_only() {
        assert_eq!(
            expirations_query("SPY", None, None),
            vec![("symbol", "SPY".to_string())]
        );
    }
}
