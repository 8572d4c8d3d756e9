mod chain;
pub mod client;
pub mod config;
mod error;
mod etb;
mod expirations;
mod history;
pub mod http;
mod lookup;
pub mod market_data;
pub mod options;
mod quotes;
pub mod types;
pub mod util;

pub use error::{Result, TradierError};

// Re-export commonly used types
pub use types::{
    ExpirationDetail, Expirations, Greeks, HistoricalBar, History, Interval, MinuteInterval,
    OptionChain, OptionData, OptionRight, Quote, Security, SeriesDataPoint, SessionFilter,
    Symbols
};

pub use client::Tradier;
pub use config::{Environment, TradierConfig};
pub use http::TradierHttp;
pub use market_data::MarketDataRequests;
pub use options::{parse_occ_option_symbol, OptionSpec};
