//! Query parameters for the `/rates` operations.
//!
//! Every timestamp is sent in ISO-8601 form (`2023-01-15T14:30:00`).

use jiff::Zoned;
use jiff::civil::DateTime;

use crate::model::{HistoricalRangeQuery, RateQuery};

/// Default number of rows kept from a multi-rate response
pub const DEFAULT_LIMIT: usize = 10;

pub type Params = Vec<(&'static str, String)>;

/// Parameters for a spot rate. Without `at` the API returns the current rate.
pub fn spot_rate_params(query: &RateQuery) -> Params {
    let mut params = vec![
        ("source", query.source.clone()),
        ("target", query.target.clone()),
    ];
    if let Some(at) = query.at {
        params.push(("time", at.to_string()));
    }
    params
}

/// Parameters for a list of rates from `source` and/or to `target`.
///
/// At least one of the two must be given; the caller is responsible for that. With neither the
/// API is asked for every pair.
pub fn multi_rate_params(source: Option<&str>, target: Option<&str>) -> Params {
    let mut params = Params::new();
    if let Some(source) = source {
        params.push(("source", source.to_string()));
    }
    if let Some(target) = target {
        params.push(("target", target.to_string()));
    }
    params
}

/// Parameters for a historical series. A missing end is the current local time.
///
/// `group` is passed through unvalidated.
pub fn history_params(query: &HistoricalRangeQuery) -> Params {
    let to = query.to.unwrap_or_else(now);
    vec![
        ("source", query.source.clone()),
        ("target", query.target.clone()),
        ("from", query.from.to_string()),
        ("to", to.to_string()),
        ("group", query.granularity.to_string()),
    ]
}

/// Current local time, to the whole second
fn now() -> DateTime {
    let now = Zoned::now().datetime();
    now.date().at(now.hour(), now.minute(), now.second(), 0)
}

/// Keep the first `limit` records of a multi-rate response.
pub fn truncate<T>(mut records: Vec<T>, limit: usize) -> Vec<T> {
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Granularity;
    use jiff::civil::{date, datetime};

    fn get<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_spot_rate_params() {
        let mut query = RateQuery {
            source: "USD".into(),
            target: "EUR".into(),
            at: None,
        };
        let params = spot_rate_params(&query);
        assert_eq!(
            params,
            vec![("source", "USD".to_string()), ("target", "EUR".to_string())]
        );

        query.at = Some(datetime(2023, 1, 15, 14, 30, 0, 0));
        let params = spot_rate_params(&query);
        assert_eq!(get(&params, "time"), Some("2023-01-15T14:30:00"));
    }

    #[test]
    fn test_multi_rate_params() {
        assert_eq!(
            multi_rate_params(Some("USD"), None),
            vec![("source", "USD".to_string())]
        );
        assert_eq!(
            multi_rate_params(None, Some("EUR")),
            vec![("target", "EUR".to_string())]
        );
        assert_eq!(multi_rate_params(Some("USD"), Some("EUR")).len(), 2);
        assert!(multi_rate_params(None, None).is_empty());
    }

    #[test]
    fn test_history_params() {
        let query = HistoricalRangeQuery {
            source: "GBP".into(),
            target: "JPY".into(),
            from: date(2024, 1, 1).at(0, 0, 0, 0),
            to: Some(date(2024, 2, 1).at(0, 0, 0, 0)),
            granularity: Granularity::Day,
        };
        let params = history_params(&query);
        assert_eq!(get(&params, "from"), Some("2024-01-01T00:00:00"));
        assert_eq!(get(&params, "to"), Some("2024-02-01T00:00:00"));
        assert_eq!(get(&params, "group"), Some("day"));
    }

    #[test]
    fn test_history_defaults_to_now() {
        let before = now();
        let params = history_params(&HistoricalRangeQuery {
            source: "GBP".into(),
            target: "JPY".into(),
            from: date(2024, 1, 1).at(0, 0, 0, 0),
            to: None,
            granularity: Granularity::Hour,
        });
        let to = get(&params, "to").unwrap();
        assert!(!to.contains('.'), "{to}");
        let to: DateTime = to.parse().unwrap();
        assert!(to >= before);
        assert_eq!(get(&params, "group"), Some("hour"));
    }

    #[test]
    fn test_truncate() {
        let records: Vec<u32> = (0..15).collect();
        assert_eq!(truncate(records, DEFAULT_LIMIT), (0..10).collect::<Vec<_>>());
        assert_eq!(truncate(vec![1, 2], DEFAULT_LIMIT), vec![1, 2]);
    }
}
