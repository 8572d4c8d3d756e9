use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::OptionRight;

/// Parsed OCC option specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub underlying_symbol: String,
    pub expiration: NaiveDate,
    pub strike: f64,
    pub right: OptionRight
}

/// Parse an OCC (Options Clearing Corporation) option symbol
///
/// OCC format: ROOT + YYMMDD + C|P + STRIKE, strike in thousandths.
/// The symbol is read from the right so roots containing digits
/// (`AAPL1`, adjusted contracts) parse correctly.
///
/// - "QQQ241010P00450000" -> QQQ, 2024-10-10, Put, 450.00
/// - "SPXW240119C04750000" -> SPXW, 2024-01-19, Call, 4750.00
///
/// Returns `None` when the symbol is not an OCC symbol.
pub fn parse_occ_option_symbol(symbol: &str) -> Option<OptionSpec> {
    let symbol = symbol.trim();
    if !symbol.is_ascii() {
        return None;
    }

    let strike_len = symbol
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if strike_len == 0 {
        return None;
    }
    let type_pos = symbol.len().checked_sub(strike_len + 1)?;
    let date_start = type_pos.checked_sub(6)?;
    if date_start == 0 {
        return None;
    }

    let right = match symbol.as_bytes()[type_pos] {
        b'C' | b'c' => OptionRight::Call,
        b'P' | b'p' => OptionRight::Put,
        _ => return None
    };

    let date_str = &symbol[date_start..type_pos];
    if !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + date_str[0..2].parse::<i32>().ok()?;
    let month = date_str[2..4].parse::<u32>().ok()?;
    let day = date_str[4..6].parse::<u32>().ok()?;
    let expiration = NaiveDate::from_ymd_opt(year, month, day)?;

    let strike = symbol[type_pos + 1..].parse::<u64>().ok()? as f64 / 1000.0;

    Some(OptionSpec {
        underlying_symbol: symbol[..date_start].trim_end().to_string(),
        expiration,
        strike,
        right
    })
}
