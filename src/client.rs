//! Upstream request dispatch.
//!
//! Every gateway endpoint ends in exactly one call to [`MflClient::dispatch`]:
//! build the query string, GET it from the host of the chosen [`Target`],
//! decode the body as JSON and hand it back untouched.

use std::{fmt::Display, sync::Arc, time::Duration};

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::UpstreamError;

/// Upper bound for one upstream round trip, body included.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Which upstream host is called and which credentials ride along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// League host with `APIKEY` and `L`.
    League,
    /// League host with `APIKEY` only (account-level queries).
    Unscoped,
    /// NFL data host, no credentials.
    Nfl,
}

/// Upstream query parameters, in insertion order.
///
/// Values that are absent are never stored, so they never reach the query
/// string. Setting a key twice replaces the earlier value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Present only when `value` is `Some`; `Some(0)` is a real value.
    pub fn opt<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Always present, as `1` or `0`.
    pub fn switch(self, key: &'static str, on: bool) -> Self {
        self.set(key, u8::from(on))
    }

    /// `1` when on, omitted otherwise. Upstream cannot tell false from unset.
    pub fn flag(self, key: &'static str, on: bool) -> Self {
        if on { self.set(key, 1) } else { self }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    fn merge(mut self, other: QueryParams) -> Self {
        for (key, value) in other.pairs {
            self = self.set(key, value);
        }
        self
    }
}

/// Shared handle to the upstream API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MflClient {
    http: Client,
    config: Arc<Config>,
    timeout: Duration,
}

impl MflClient {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config, UPSTREAM_TIMEOUT)
    }

    pub fn with_timeout(config: Config, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(MflClient {
            http,
            config: Arc::new(config),
            timeout,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn host(&self, target: Target) -> &str {
        match target {
            Target::League | Target::Unscoped => &self.config.league_host,
            Target::Nfl => &self.config.nfl_host,
        }
    }

    /// Full outgoing parameter set for one call.
    pub fn build_query(&self, target: Target, request_type: &str, params: QueryParams) -> QueryParams {
        let mut query = QueryParams::new();
        if target != Target::Nfl {
            query = query.set("APIKEY", &self.config.api_key);
        }
        query = query.set("JSON", 1).set("TYPE", request_type);
        if target == Target::League {
            query = query.set("L", &self.config.league_id);
        }
        query.merge(params)
    }

    pub async fn dispatch(
        &self,
        target: Target,
        request_type: &str,
        params: QueryParams,
    ) -> Result<Value, UpstreamError> {
        let query = self.build_query(target, request_type, params);
        tracing::debug!(request_type, ?target, "Dispatching upstream request");

        let response = self
            .http
            .get(self.host(target))
            .query(query.pairs())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        serde_json::from_slice(&body).map_err(UpstreamError::Decode)
    }

    pub async fn league(&self, request_type: &str, params: QueryParams) -> Result<Value, UpstreamError> {
        self.dispatch(Target::League, request_type, params).await
    }

    pub async fn unscoped(&self, request_type: &str, params: QueryParams) -> Result<Value, UpstreamError> {
        self.dispatch(Target::Unscoped, request_type, params).await
    }

    pub async fn nfl(&self, request_type: &str, params: QueryParams) -> Result<Value, UpstreamError> {
        self.dispatch(Target::Nfl, request_type, params).await
    }

    fn classify(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else {
            UpstreamError::Unreachable(err)
        }
    }
}
