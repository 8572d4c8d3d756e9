use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Convert a chrono NaiveDate to Tradier's date format (YYYY-MM-DD)
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use tradier_market_data::util::date_to_tradier;
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// assert_eq!(date_to_tradier(date), "2023-12-25");
/// ```
pub fn date_to_tradier(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert a chrono NaiveDateTime to the minute resolution timesales expects
/// (YYYY-MM-DD HH:MM)
pub fn datetime_to_tradier(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// Convert a Tradier date string (YYYY-MM-DD) to a chrono NaiveDate
///
/// # Example
/// ```rust
/// use chrono::Datelike;
/// use tradier_market_data::util::tradier_to_date;
///
/// let date = tradier_to_date("2023-12-25").unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 12);
/// assert_eq!(date.day(), 25);
/// ```
pub fn tradier_to_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

/// Serialize a Vec<NaiveDate> to Vec<String> using Tradier date format
pub fn serialize_naive_dates<S>(dates: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer
{
    let strings: Vec<String> = dates.iter().map(|date| date_to_tradier(*date)).collect();
    strings.serialize(serializer)
}

/// Deserialize a date list using Tradier date format. A bare string is a
/// one-element list and null is empty.
pub fn deserialize_naive_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>
{
    let strings: Vec<String> = deserialize_one_or_many(deserializer)?;
    strings
        .into_iter()
        .map(|s| tradier_to_date(&s).map_err(de::Error::custom))
        .collect()
}

/// Tradier collapses one-element arrays into the bare element and sends
/// `null` (or the string `"null"`) for empty collections. Accepts all of
/// those and always yields a Vec.
pub fn deserialize_one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned
{
    let value = Value::deserialize(deserializer)?;
    one_or_many_from_value(value).map_err(de::Error::custom)
}

pub(crate) fn one_or_many_from_value<T>(value: Value) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned
{
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s == "null" => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        other => Ok(vec![serde_json::from_value(other)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_date_to_tradier_format() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(date_to_tradier(date), "2023-12-25");

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(date_to_tradier(date), "2020-01-01");
    }

    #[test]
    fn test_datetime_to_tradier_format() {
        let datetime = NaiveDate::from_ymd_opt(2019, 5, 6)
            .unwrap()
            .and_hms_opt(9, 30, 45)
            .unwrap();
        assert_eq!(datetime_to_tradier(datetime), "2019-05-06 09:30");
    }

    #[test]
    fn test_tradier_date_to_naive() {
        let date = tradier_to_date("2020-01-01").unwrap();
        assert_eq!(date.year(), 2020);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_tradier_date_to_naive_invalid() {
        assert!(tradier_to_date("2023-13-45").is_err());
        assert!(tradier_to_date("2023/12/25").is_err());
    }

    #[derive(Serialize, Deserialize)]
    struct Dates(
        #[serde(
            serialize_with = "serialize_naive_dates",
            deserialize_with = "deserialize_naive_dates"
        )]
        Vec<NaiveDate>
    );

    #[test]
    fn test_serde_naive_dates() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ];

        let serialized = serde_json::to_string(&Dates(dates.clone())).unwrap();
        assert_eq!(serialized, r#"["2023-12-25","2024-01-01"]"#);

        let deserialized: Dates = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.0, dates);
    }

    #[test]
    fn test_single_date_string() {
        let deserialized: Dates = serde_json::from_str(r#""2024-01-19""#).unwrap();
        assert_eq!(
            deserialized.0,
            vec![NaiveDate::from_ymd_opt(2024, 1, 19).unwrap()]
        );
    }

    #[derive(Deserialize)]
    struct Numbers {
        #[serde(default, deserialize_with = "deserialize_one_or_many")]
        n: Vec<f64>
    }

    #[test]
    fn test_one_or_many() {
        let many: Numbers = serde_json::from_str(r#"{"n": [1.0, 2.5]}"#).unwrap();
        assert_eq!(many.n, vec![1.0, 2.5]);

        let one: Numbers = serde_json::from_str(r#"{"n": 7.5}"#).unwrap();
        assert_eq!(one.n, vec![7.5]);

        let null: Numbers = serde_json::from_str(r#"{"n": null}"#).unwrap();
        assert!(null.n.is_empty());

        let null_string: Numbers = serde_json::from_str(r#"{"n": "null"}"#).unwrap();
        assert!(null_string.n.is_empty());

        let absent: Numbers = serde_json::from_str("{}").unwrap();
        assert!(absent.n.is_empty());
    }

    #[test]
    fn test_one_or_many_rejects_wrong_element_type() {
        let result: Result<Numbers, _> = serde_json::from_str(r#"{"n": ["a"]}"#);
        assert!(result.is_err());
    }
}
