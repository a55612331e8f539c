use std::fmt;

use clap::ValueEnum;
use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Normalize a user-typed currency code. No validation against ISO 4217 is done.
pub fn currency_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A request for one exchange rate, current or at a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub source: String,
    pub target: String,
    pub at: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalRangeQuery {
    pub source: String,
    pub target: String,
    pub from: DateTime,
    /// Defaults to the current instant when the request is built
    pub to: Option<DateTime>,
    pub granularity: Granularity,
}

/// Sampling interval of a historical series, sent to the API as `group`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    #[default]
    Day,
    Hour,
    Minute,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Day => "day",
            Granularity::Hour => "hour",
            Granularity::Minute => "minute",
        })
    }
}

/// One observation returned by `/rates`. Missing fields decode as empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateRecord {
    pub source: String,
    pub target: String,
    /// Value of 1 unit of source currency in target currency
    pub rate: Decimal,
    #[serde(rename = "time")]
    pub observed_at: String,
}

impl RateRecord {
    /// Value of 1 unit of target currency in source currency.
    ///
    /// A zero rate has no inverse and reports 0.
    pub fn reverse_rate(&self) -> Decimal {
        Decimal::ONE.checked_div(self.rate).unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rate: Decimal) -> RateRecord {
        RateRecord {
            source: "USD".into(),
            target: "EUR".into(),
            rate,
            observed_at: String::new(),
        }
    }

    #[test]
    fn test_reverse_rate() {
        assert_eq!(record(Decimal::new(8, 1)).reverse_rate(), Decimal::new(125, 2));
        assert_eq!(record(Decimal::ZERO).reverse_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_decode_wise_rate() {
        let rec: RateRecord = serde_json::from_str(
            r#"{"rate":1.166,"source":"EUR","target":"USD","time":"2018-08-31T10:43:31+0000"}"#,
        )
        .unwrap();
        assert_eq!(rec.source, "EUR");
        assert_eq!(rec.rate, Decimal::new(1166, 3));
        assert_eq!(rec.observed_at, "2018-08-31T10:43:31+0000");
    }

    #[test]
    fn test_decode_missing_fields() {
        let rec: RateRecord = serde_json::from_str(r#"{"source":"GBP"}"#).unwrap();
        assert_eq!(rec.target, "");
        assert_eq!(rec.rate, Decimal::ZERO);

        let cur: Currency =
            serde_json::from_str(r#"{"code":"EUR","name":"Euro","symbol":"€"}"#).unwrap();
        assert_eq!(cur.display_name, "Euro");
    }

    #[test]
    fn test_currency_code() {
        assert_eq!(currency_code(" usd\n"), "USD");
        assert_eq!(currency_code("notacode"), "NOTACODE");
    }

    #[test]
    fn test_granularity_display() {
        assert_eq!(Granularity::default().to_string(), "day");
        assert_eq!(Granularity::Hour.to_string(), "hour");
    }
}
