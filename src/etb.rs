use crate::error::Result;
use crate::market_data::MarketDataRequests;
use crate::types::{SecuritiesResponse, Security};

impl MarketDataRequests {
    /// Get the easy-to-borrow list: securities that can be sold short with a
    /// Tradier Brokerage account. The list is long and slow to download.
    pub async fn get_etb_list(&self) -> Result<Vec<Security>> {
        let response: SecuritiesResponse = self.http.get("markets/etb", Vec::new()).await?;
        Ok(response.securities.map(|s| s.security).unwrap_or_default())
    }
}
