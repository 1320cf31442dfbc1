use crate::config::AppConfig;
use crate::error::FetchError;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Body of `GET /latest`.
///
/// Fields are optional so an incomplete answer surfaces as a data-shape
/// failure rather than a decode error.
#[derive(Deserialize, Debug)]
pub struct LatestResponse {
    pub rates: Option<HashMap<String, f64>>,
    pub date: Option<String>,
}

/// Body of `GET /{start}..{end}`, keyed by ISO date.
#[derive(Deserialize, Debug)]
pub struct RangeResponse {
    pub rates: Option<HashMap<String, HashMap<String, f64>>>,
}

#[derive(Clone, Debug)]
pub struct FxClient {
    client: Client,
    base: String,
    from: String,
    to: String,
}

impl FxClient {
    pub fn new(base: &str, from: &str, to: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(FxClient {
            client,
            base: base.trim_end_matches('/').to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.api_base, &config.from, &config.to, config.timeout)
    }

    /// Currency code the rates are quoted in.
    pub fn quote(&self) -> &str {
        &self.to
    }

    pub fn latest_url(&self) -> String {
        format!("{}/latest?from={}&to={}", self.base, self.from, self.to)
    }

    pub fn range_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/{}..{}?from={}&to={}",
            self.base,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            self.from,
            self.to
        )
    }

    pub async fn latest(&self) -> Result<LatestResponse, FetchError> {
        self.get_json(self.latest_url()).await
    }

    pub async fn range(&self, start: NaiveDate, end: NaiveDate) -> Result<RangeResponse, FetchError> {
        self.get_json(self.range_url(start, end)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        tracing::debug!(%url, "requesting upstream rates");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        // Syntax errors count as network failures, type mismatches do not.
        let value: Value = serde_json::from_slice(&bytes).map_err(FetchError::MalformedBody)?;
        serde_json::from_value(value)
            .map_err(|e| FetchError::Unexpected(format!("unexpected response shape: {e}")))
    }
}
