use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::options::{parse_occ_option_symbol, OptionSpec};
use crate::util::{deserialize_naive_dates, deserialize_one_or_many, one_or_many_from_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Interval {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Daily => write!(f, "daily"),
            Interval::Weekly => write!(f, "weekly"),
            Interval::Monthly => write!(f, "monthly")
        }
    }
}

/// Bar width for time and sales. Tick data is not served by the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum MinuteInterval {
    #[serde(rename = "tick")]
    Tick,
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes
}

impl fmt::Display for MinuteInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinuteInterval::Tick => write!(f, "tick"),
            MinuteInterval::OneMinute => write!(f, "1min"),
            MinuteInterval::FiveMinutes => write!(f, "5min"),
            MinuteInterval::FifteenMinutes => write!(f, "15min")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SessionFilter {
    /// Pre-market, regular and post-market data
    #[serde(rename = "all")]
    All,
    /// Regular session only
    #[serde(rename = "open")]
    Open
}

impl fmt::Display for SessionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionFilter::All => write!(f, "all"),
            SessionFilter::Open => write!(f, "open")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum OptionRight {
    #[serde(rename = "call", alias = "C")]
    Call,
    #[serde(rename = "put", alias = "P")]
    Put
}

/// One symbol or a list of symbols for the quotes endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbols {
    One(String),
    Many(Vec<String>)
}

impl Symbols {
    /// Comma separated form sent as the `symbols` query parameter
    pub fn to_query(&self) -> String {
        match self {
            Symbols::One(symbol) => symbol.clone(),
            Symbols::Many(symbols) => symbols.join(",")
        }
    }
}

impl From<&str> for Symbols {
    fn from(symbol: &str) -> Self {
        Symbols::One(symbol.to_string())
    }
}

impl From<String> for Symbols {
    fn from(symbol: String) -> Self {
        Symbols::One(symbol)
    }
}

impl From<Vec<String>> for Symbols {
    fn from(symbols: Vec<String>) -> Self {
        Symbols::Many(symbols)
    }
}

impl From<Vec<&str>> for Symbols {
    fn from(symbols: Vec<&str>) -> Self {
        Symbols::Many(symbols.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Symbols {
    fn from(symbols: &[&str]) -> Self {
        Symbols::Many(symbols.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Symbols {
    fn from(symbols: [&str; N]) -> Self {
        Symbols::Many(symbols.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Greeks {
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
    pub rho: Option<f64>,
    pub phi: Option<f64>,
    pub bid_iv: Option<f64>,
    pub mid_iv: Option<f64>,
    pub ask_iv: Option<f64>,
    pub smv_vol: Option<f64>,
    pub updated_at: Option<String>
}

/// Snapshot quote for an equity, index or option symbol. The option-only
/// fields are absent for other security types.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exch: String,
    #[serde(rename = "type", default)]
    pub asset_type: String,
    pub last: Option<f64>,
    pub change: Option<f64>,
    pub volume: Option<u64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub change_percentage: Option<f64>,
    pub average_volume: Option<u64>,
    pub last_volume: Option<u64>,
    pub trade_date: Option<u64>,
    pub prevclose: Option<f64>,
    #[serde(rename = "week_52_high", alias = "week52_high")]
    pub week52_high: Option<f64>,
    #[serde(rename = "week_52_low", alias = "week52_low")]
    pub week52_low: Option<f64>,
    pub bidsize: Option<u64>,
    pub bidexch: Option<String>,
    pub bid_date: Option<u64>,
    pub asksize: Option<u64>,
    pub askexch: Option<String>,
    pub ask_date: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_root_symbols")]
    pub root_symbols: Option<Vec<String>>,
    pub underlying: Option<String>,
    pub strike: Option<f64>,
    pub open_interest: Option<u64>,
    pub contract_size: Option<u64>,
    pub expiration_date: Option<NaiveDate>,
    pub expiration_type: Option<String>,
    pub option_type: Option<OptionRight>,
    pub root_symbol: Option<String>,
    pub greeks: Option<Greeks>
}

// Tradier sends root symbols as one comma separated string
fn deserialize_root_symbols<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(
            s.split(',')
                .map(str::trim)
                .filter(|root| !root.is_empty())
                .map(str::to_string)
                .collect()
        )),
        other => one_or_many_from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionData {
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exch: String,
    #[serde(rename = "type", default)]
    pub asset_type: String,
    pub last: Option<f64>,
    pub change: Option<f64>,
    pub volume: Option<u64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub underlying: String,
    pub strike: f64,
    pub change_percentage: Option<f64>,
    pub average_volume: Option<u64>,
    pub last_volume: Option<u64>,
    pub trade_date: Option<u64>,
    pub prevclose: Option<f64>,
    #[serde(rename = "week_52_high", alias = "week52_high")]
    pub week52_high: Option<f64>,
    #[serde(rename = "week_52_low", alias = "week52_low")]
    pub week52_low: Option<f64>,
    pub bidsize: Option<u64>,
    pub bidexch: Option<String>,
    pub bid_date: Option<u64>,
    pub asksize: Option<u64>,
    pub askexch: Option<String>,
    pub ask_date: Option<u64>,
    pub open_interest: Option<u64>,
    pub contract_size: Option<u64>,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub expiration_type: String,
    #[serde(rename = "option_type")]
    pub right: OptionRight,
    pub root_symbol: String,
    pub greeks: Option<Greeks>
}

impl OptionData {
    /// Decode the contract's OCC symbol
    pub fn occ_spec(&self) -> Option<OptionSpec> {
        parse_occ_option_symbol(&self.symbol)
    }
}

/// Result of an option chain lookup. Tradier answers `{"options": null}` when
/// no contracts exist for the requested expiration.
#[derive(Debug, Clone)]
pub enum OptionChain {
    Empty,
    Chain(Vec<OptionData>)
}

impl OptionChain {
    pub fn options(&self) -> &[OptionData] {
        match self {
            OptionChain::Empty => &[],
            OptionChain::Chain(options) => options
        }
    }

    pub fn into_options(self) -> Vec<OptionData> {
        match self {
            OptionChain::Empty => Vec::new(),
            OptionChain::Chain(options) => options
        }
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Contracts ordered by strike price
    pub fn sorted_by_strike(&self, ascending: bool) -> Vec<&OptionData> {
        let mut options = self.options().iter().collect::<Vec<_>>();
        options.sort_by(|a, b| {
            if ascending {
                a.strike.total_cmp(&b.strike)
            } else {
                b.strike.total_cmp(&a.strike)
            }
        });
        options
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpirationDetail {
    pub date: NaiveDate,
    pub contract_size: Option<u64>,
    pub expiration_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_detail_strikes")]
    pub strikes: Vec<f64>
}

// Strikes arrive wrapped as {"strike": [...]}; a bare list is also accepted
fn deserialize_detail_strikes<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>
{
    let value = match Value::deserialize(deserializer)? {
        Value::Object(mut wrapper) => wrapper.remove("strike").unwrap_or(Value::Null),
        other => other
    };
    one_or_many_from_value(value).map_err(serde::de::Error::custom)
}

/// Expiration listing. `Detailed` is returned when root or strike detail was
/// requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Expirations {
    Dates(Vec<NaiveDate>),
    Detailed(Vec<ExpirationDetail>)
}

impl Expirations {
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            Expirations::Dates(dates) => dates.clone(),
            Expirations::Detailed(details) => details.iter().map(|d| d.date).collect()
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Expirations::Dates(dates) => dates.len(),
            Expirations::Detailed(details) => details.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoricalBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>
}

/// The `.history` object. Tradier keys bars under `day` for every interval.
pub type History = HashMap<String, Vec<HistoricalBar>>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeriesDataPoint {
    /// Exchange-local time, e.g. `2019-05-06T09:30:00`
    pub time: String,
    /// Unix seconds
    pub timestamp: i64,
    pub price: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
    pub vwap: Option<f64>
}

impl SeriesDataPoint {
    /// `time` interpreted in the US equity market time zone
    pub fn market_time(&self) -> Option<DateTime<Tz>> {
        let naive = NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M:%S").ok()?;
        New_York.from_local_datetime(&naive).single()
    }

    pub fn utc_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Entry of the easy-to-borrow list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Security {
    pub symbol: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub security_type: String,
    pub description: String
}

// Response envelopes. Each holds the path the endpoint unwraps to.

#[derive(Debug, Deserialize)]
pub(crate) struct QuotesResponse {
    pub quotes: Option<QuotesWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuotesWrapper {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub quote: Vec<Quote>
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionChainResponse {
    pub options: Option<OptionsWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionsWrapper {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub option: Vec<OptionData>
}

#[derive(Debug, Deserialize)]
pub(crate) struct StrikesResponse {
    pub strikes: Option<StrikesWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct StrikesWrapper {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub strike: Vec<f64>
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExpirationsResponse {
    pub expirations: Option<ExpirationsWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExpirationsWrapper {
    #[serde(default, deserialize_with = "deserialize_naive_dates")]
    pub date: Vec<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub expiration: Vec<ExpirationDetail>
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionSymbolsResponse {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub symbols: Vec<OptionRoot>
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionRoot {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub options: Vec<String>
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default, deserialize_with = "deserialize_history")]
    pub history: History
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<History, D::Error>
where
    D: Deserializer<'de>
{
    match Value::deserialize(deserializer)? {
        Value::Object(periods) => periods
            .into_iter()
            .map(|(period, bars)| {
                one_or_many_from_value::<HistoricalBar>(bars).map(|bars| (period, bars))
            })
            .collect::<Result<History, serde_json::Error>>()
            .map_err(serde::de::Error::custom),
        Value::Null => Ok(History::new()),
        Value::String(s) if s == "null" => Ok(History::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected history object or null, found {}",
            other
        )))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimeSalesResponse {
    pub series: Option<SeriesWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeriesWrapper {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub data: Vec<SeriesDataPoint>
}

#[derive(Debug, Deserialize)]
pub(crate) struct SecuritiesResponse {
    pub securities: Option<SecuritiesWrapper>
}

#[derive(Debug, Deserialize)]
pub(crate) struct SecuritiesWrapper {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub security: Vec<Security>
}
