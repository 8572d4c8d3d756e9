use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tradier_market_data::{Interval, Tradier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let tradier = Tradier::from_env()?;

    let start_date = NaiveDate::from_ymd_opt(2015, 9, 21);
    let end_date = NaiveDate::from_ymd_opt(2025, 9, 21);

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let mut hist_dir = PathBuf::from(data_dir);
    hist_dir.push("hist");
    fs::create_dir_all(&hist_dir)?;

    let symbols = vec!["SPY", "QQQ", "TLT"];

    println!("Fetching 10 years of historical daily pricing data...");
    println!("Output directory: {}", hist_dir.display());

    for symbol in symbols {
        println!("\nFetching data for {}...", symbol);

        match tradier
            .market_data
            .get_historical_pricing(symbol, Some(Interval::Daily), start_date, end_date)
            .await
        {
            Ok(history) => {
                let data = history.get("day").cloned().unwrap_or_default();
                println!(
                    "Successfully retrieved {} data points for {}",
                    data.len(),
                    symbol
                );

                let filepath = hist_dir.join(format!("{}_hist.json", symbol.to_lowercase()));
                fs::write(&filepath, serde_json::to_string_pretty(&data)?)?;
                println!("Data saved to: {}", filepath.display());

                if let (Some(first), Some(last)) = (data.first(), data.last()) {
                    println!("Date range: {} to {}", first.date, last.date);
                    if let (Some(first_close), Some(last_close)) = (first.close, last.close) {
                        println!("Price change: ${:.2} to ${:.2}", first_close, last_close);
                    }
                }
            }
            Err(e) => {
                println!("Failed to get historical data for {}: {}", symbol, e);
            }
        }
    }

    println!("\nHistorical data collection complete.");
    Ok(())
}
