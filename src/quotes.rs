use crate::error::Result;
use crate::http::Query;
use crate::market_data::{push_param, MarketDataRequests};
use crate::types::{Quote, QuotesResponse, Symbols};

impl MarketDataRequests {
    /// Get quotes for one or more symbols. Option symbols are accepted too.
    ///
    /// # Arguments
    /// * `symbols` - A symbol or list of symbols (e.g. `"AAPL"`, `["SPY", "QQQ"]`)
    /// * `greeks` - Whether to include Greeks for option symbols
    ///
    /// # Returns
    /// The quotes from `.quotes.quote`. A single quote is returned as a
    /// one-element vector; unmatched symbols are simply absent.
    pub async fn get_quotes(
        &self,
        symbols: impl Into<Symbols>,
        greeks: Option<bool>
    ) -> Result<Vec<Quote>> {
        let query = quotes_query(&symbols.into(), greeks);
        let response: QuotesResponse = self.http.get("markets/quotes", query).await?;
        Ok(response.quotes.map(|q| q.quote).unwrap_or_default())
    }
}

fn quotes_query(symbols: &Symbols, greeks: Option<bool>) -> Query {
    let mut query = vec![("symbols", symbols.to_query())];
    push_param(&mut query, "greeks", greeks);
    query
}
