use crate::error::Result;
use crate::market_data::MarketDataRequests;
use crate::types::OptionSymbolsResponse;

impl MarketDataRequests {
    /// Get every option symbol listed for an underlying, including extra
    /// roots such as SPXW or RUTW.
    ///
    /// Returns `.symbols[0].options`; an underlying without listed options
    /// yields an empty vector.
    pub async fn get_option_symbols(&self, underlying: &str) -> Result<Vec<String>> {
        let query = vec![("underlying", underlying.to_string())];
        let response: OptionSymbolsResponse = self.http.get("markets/options/lookup", query).await?;
        Ok(response
            .symbols
            .into_iter()
            .next()
            .map(|root| root.options)
            .unwrap_or_default())
    }
}
