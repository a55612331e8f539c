//! Plain-text rendering of API results.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{Currency, RateRecord};

/// Six decimal places, rounding half away from zero
pub fn fixed6(value: Decimal) -> String {
    format!(
        "{:.6}",
        value.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn format_rate(record: Option<&RateRecord>) -> String {
    let Some(rec) = record else {
        return "No rate data available.".to_string();
    };

    format!(
        "\n{source}/{target} Exchange Rate:\n\n1 {source} = {rate} {target}\n1 {target} = {reverse} {source}\n\nRate timestamp: {time}\n",
        source = rec.source,
        target = rec.target,
        rate = fixed6(rec.rate),
        reverse = fixed6(rec.reverse_rate()),
        time = rec.observed_at,
    )
}

/// Fixed-width table: SOURCE(8) TARGET(8) RATE(15) DATE(25)
pub fn format_rates(records: &[RateRecord], title: Option<&str>) -> String {
    if records.is_empty() {
        return "No rates data available.".to_string();
    }

    let title = title.unwrap_or("Exchange Rates:");
    let mut out = format!("\n{title}\n{}\n\n", "-".repeat(title.chars().count()));
    out.push_str(&row("SOURCE", "TARGET", "RATE", "DATE"));
    out.push_str(&row(
        &"-".repeat(8),
        &"-".repeat(8),
        &"-".repeat(15),
        &"-".repeat(25),
    ));
    for rec in records {
        out.push_str(&row(
            &rec.source,
            &rec.target,
            &fixed6(rec.rate),
            &rec.observed_at,
        ));
    }
    out
}

fn row(source: &str, target: &str, rate: &str, date: &str) -> String {
    format!("{source:<8} {target:<8} {rate:<15} {date:<25}\n")
}

pub fn format_currencies(currencies: &[Currency]) -> String {
    if currencies.is_empty() {
        return "No currency information available.".to_string();
    }

    let rows: String = currencies
        .iter()
        .map(|c| format!("{:<8} - {}\n", c.code, c.display_name))
        .collect();
    format!("\nAvailable Currencies:\n{}\n{rows}", "-".repeat(40))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(target: &str, rate: Decimal) -> RateRecord {
        RateRecord {
            source: "USD".into(),
            target: target.into(),
            rate,
            observed_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_fixed6() {
        assert_eq!(fixed6(Decimal::new(92, 2)), "0.920000");
        assert_eq!(fixed6(Decimal::new(10869565217, 10)), "1.086957");
        assert_eq!(fixed6(Decimal::ZERO), "0.000000");
        assert_eq!(fixed6(Decimal::new(1234, 0)), "1234.000000");
    }

    #[test]
    fn test_single_rate() {
        let out = format_rate(Some(&record("EUR", Decimal::new(8, 1))));
        assert!(out.contains("USD/EUR Exchange Rate:"));
        assert!(out.contains("1 USD = 0.800000 EUR"));
        assert!(out.contains("1 EUR = 1.250000 USD"));
        assert!(out.contains("Rate timestamp: 2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_zero_rate_reverse_is_zero() {
        let out = format_rate(Some(&record("EUR", Decimal::ZERO)));
        assert!(out.contains("1 EUR = 0.000000 USD"));
    }

    #[test]
    fn test_no_rate() {
        assert_eq!(format_rate(None), "No rate data available.");
        assert_eq!(format_rates(&[], Some("x")), "No rates data available.");
        assert_eq!(format_currencies(&[]), "No currency information available.");
    }

    #[test]
    fn test_table_layout() {
        let out = format_rates(
            &[record("EUR", Decimal::new(92, 2)), record("GBP", Decimal::new(79, 2))],
            Some("Exchange rates from USD"),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Exchange rates from USD");
        assert_eq!(lines[2], "-".repeat(23));
        assert_eq!(
            lines[4],
            "SOURCE   TARGET   RATE            DATE                     "
        );
        assert_eq!(lines[5].len(), 8 + 8 + 15 + 25 + 3);
        assert_eq!(
            lines[6],
            "USD      EUR      0.920000        2024-01-01T00:00:00Z     "
        );
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_default_title() {
        let out = format_rates(&[record("EUR", Decimal::ONE)], None);
        assert!(out.starts_with("\nExchange Rates:\n---------------\n"));
    }

    #[test]
    fn test_currencies() {
        let out = format_currencies(&[Currency {
            code: "EUR".into(),
            display_name: "Euro".into(),
        }]);
        assert!(out.contains(&"-".repeat(40)));
        assert!(out.contains("EUR      - Euro\n"));
    }
}
