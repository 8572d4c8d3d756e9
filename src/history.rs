use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::http::Query;
use crate::market_data::{push_param, MarketDataRequests};
use crate::types::{
    History, HistoryResponse, Interval, MinuteInterval, SeriesDataPoint, SessionFilter,
    TimeSalesResponse
};
use crate::util::{date_to_tradier, datetime_to_tradier};

impl MarketDataRequests {
    /// Get historical pricing for a security
    ///
    /// Usually covers the whole life of the security for a reasonable
    /// start/end. OCC option symbols (e.g. AAPL220617C00270000) are accepted.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to get historical data for (e.g., "AAPL", "SPY")
    /// * `interval` - Daily, Weekly or Monthly bars
    /// * `start` - First date to include
    /// * `end` - Last date to include
    ///
    /// # Returns
    /// The `.history` object unchanged in shape. Tradier keys the bars under
    /// `day` whatever the interval. Empty when there is no data for the range.
    ///
    /// # Example
    /// ```rust,no_run
    /// use chrono::NaiveDate;
    /// use tradier_market_data::{Environment, Interval, Tradier};
    ///
    /// # async fn example() -> tradier_market_data::Result<()> {
    /// let tradier = Tradier::new("access-token", Environment::Production)?;
    /// let history = tradier
    ///     .market_data
    ///     .get_historical_pricing(
    ///         "AAPL",
    ///         Some(Interval::Daily),
    ///         NaiveDate::from_ymd_opt(2023, 1, 1),
    ///         NaiveDate::from_ymd_opt(2023, 12, 31),
    ///     )
    ///     .await?;
    /// for bar in history.get("day").into_iter().flatten() {
    ///     println!("{}: {:?}", bar.date, bar.close);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_historical_pricing(
        &self,
        symbol: &str,
        interval: Option<Interval>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>
    ) -> Result<History> {
        let query = history_query(symbol, interval, start, end);
        let response: HistoryResponse = self.http.get("markets/history", query).await?;
        Ok(response.history)
    }

    /// Get time and sales (`.series.data`), typically used for charting
    ///
    /// Tick data for busy symbols is very large; keep the window small or
    /// use the streaming API instead. Tick interval is not available in the
    /// sandbox.
    pub async fn get_time_and_sales(
        &self,
        symbol: &str,
        interval: Option<MinuteInterval>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        session_filter: Option<SessionFilter>
    ) -> Result<Vec<SeriesDataPoint>> {
        let query = timesales_query(symbol, interval, start, end, session_filter);
        let response: TimeSalesResponse = self.http.get("markets/timesales", query).await?;
        Ok(response.series.map(|s| s.data).unwrap_or_default())
    }
}

fn history_query(
    symbol: &str,
    interval: Option<Interval>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>
) -> Query {
    let mut query = vec![("symbol", symbol.to_string())];
    push_param(&mut query, "interval", interval);
    push_param(&mut query, "start", start.map(date_to_tradier));
    push_param(&mut query, "end", end.map(date_to_tradier));
    query
}

fn timesales_query(
    symbol: &str,
    interval: Option<MinuteInterval>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    session_filter: Option<SessionFilter>
) -> Query {
    let mut query = vec![("symbol", symbol.to_string())];
    push_param(&mut query, "interval", interval);
    push_param(&mut query, "start", start.map(datetime_to_tradier));
    push_param(&mut query, "end", end.map(datetime_to_tradier));
    push_param(&mut query, "session_filter", session_filter);
    query
}
