use tradier_market_data::{OptionChain, Tradier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "SPY".to_string());
    let tradier = Tradier::from_env()?;

    let expirations = tradier
        .market_data
        .get_option_expiration_dates(&symbol, None, None)
        .await?;
    let Some(expiration) = expirations.dates().first().copied() else {
        println!("{} has no listed options", symbol);
        return Ok(());
    };

    let quote = tradier.market_data.get_quotes(symbol.as_str(), None).await?;
    let last = quote.first().and_then(|q| q.last);
    println!("{} last {:?}, nearest expiration {}", symbol, last, expiration);

    match tradier
        .market_data
        .get_option_chain(&symbol, expiration, Some(true))
        .await?
    {
        OptionChain::Empty => println!("Empty chain"),
        chain => {
            for option in chain.sorted_by_strike(true) {
                let delta = option.greeks.as_ref().and_then(|g| g.delta);
                println!(
                    "{:<22} {:?} strike {:>8.2} bid {:?} ask {:?} delta {:?}",
                    option.symbol, option.right, option.strike, option.bid, option.ask, delta
                );
            }
        }
    }

    Ok(())
}
