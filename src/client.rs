use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::Agent;

use crate::config::Config;
use crate::model::{Currency, HistoricalRangeQuery, RateQuery, RateRecord};
use crate::params::{self, Params};
use crate::{Error, Result};

/// Issues a GET against the API and returns the decoded JSON body.
pub trait Transport {
    fn get(&self, path: &str, params: &Params) -> Result<Value>;
}

/// Blocking HTTP transport carrying the configured credential on every request
pub struct HttpTransport {
    agent: Agent,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Self {
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .build(),
        );
        HttpTransport { agent, config }
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, params: &Params) -> Result<Value> {
        let url = format!("{}{path}", self.config.base_url);
        log::debug!("GET {url} {params:?}");

        let mut resp = self
            .agent
            .get(&url)
            .header("Authorization", self.config.authorization())
            .header("Accept", "application/json")
            .query_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .call()?;
        log::debug!("{url} -> {}", resp.status());

        Ok(resp.body_mut().read_json::<Value>()?)
    }
}

/// The four API operations.
///
/// Failures never reach the caller: they are logged and an empty result is returned, so a
/// command loop can carry on.
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new(config: Config) -> Self {
        ApiClient::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        ApiClient { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Current rate, or the rate at `query.at`
    pub fn spot_rate(&self, query: &RateQuery) -> Option<RateRecord> {
        let params = params::spot_rate_params(query);
        report(
            "exchange rate",
            self.transport.get("/rates", &params).and_then(first_record),
        )
    }

    /// Up to `limit` rates from `source` and/or to `target`, in response order.
    ///
    /// At least one of `source` and `target` must be given.
    pub fn rates(
        &self,
        source: Option<&str>,
        target: Option<&str>,
        limit: usize,
    ) -> Vec<RateRecord> {
        let params = params::multi_rate_params(source, target);
        let records = report(
            "rates",
            self.transport.get("/rates", &params).and_then(decode_list),
        );
        params::truncate(records, limit)
    }

    pub fn history(&self, query: &HistoricalRangeQuery) -> Vec<RateRecord> {
        let params = params::history_params(query);
        report(
            "historical rates",
            self.transport.get("/rates", &params).and_then(decode_list),
        )
    }

    pub fn currencies(&self) -> Vec<Currency> {
        report(
            "currencies",
            self.transport.get("/currencies", &Params::new()).and_then(decode_list),
        )
    }
}

fn report<R: Default>(what: &str, result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(Error::EmptyResult) => {
            log::debug!("no {what} in response");
            R::default()
        }
        Err(e) => {
            log::error!("Error fetching {what}: {e}");
            R::default()
        }
    }
}

/// Decode each element on its own; malformed records are skipped.
fn decode_list<D: DeserializeOwned>(body: Value) -> Result<Vec<D>> {
    let Value::Array(items) = body else {
        return Err(Error::EmptyResult);
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping record {i}: {e}");
                None
            }
        })
        .collect())
}

/// The API answers a spot query with a one-element list; a bare object is accepted too.
fn first_record(body: Value) -> Result<Option<RateRecord>> {
    match body {
        Value::Array(items) => match items.into_iter().next() {
            Some(item) => Ok(Some(serde_json::from_value(item)?)),
            None => Err(Error::EmptyResult),
        },
        Value::Object(_) => Ok(Some(serde_json::from_value(body)?)),
        _ => Err(Error::EmptyResult),
    }
}
