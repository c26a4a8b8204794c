use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::data::fetch::{FetchError, JsonFetcher};
use crate::domain::{Currency, ExchangeRate, ExchangeRateTimeSeries};

/// Error raised by the Frankfurter client: either the transport failed or
/// the JSON came back without the fields we expect.
#[derive(Debug, Clone)]
pub enum ApiError {
    Fetch(FetchError),
    /// JSON was present but malformed for the requested operation. Treated
    /// as fatal for the current operation; no partial fallback.
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(err) => write!(f, "fetch failed: {}", err),
            ApiError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::Fetch(err)
    }
}

/// Client for the Frankfurter REST API. URL building lives here; response
/// mapping is done by the standalone `parse_*` functions below.
pub struct FrankfurterClient {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl FrankfurterClient {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Loads the supported currencies, ordered by code.
    pub fn currencies(&self) -> Result<Vec<Currency>, ApiError> {
        let url = format!("{}/currencies", self.base_url);
        parse_currency_list(&self.fetcher.fetch(&url)?)
    }

    /// Loads the latest published rate converting `from` into `to`.
    pub fn latest_rate(&self, from: &Currency, to: &Currency) -> Result<ExchangeRate, ApiError> {
        let url = format!(
            "{}/latest?symbols={}&base={}",
            self.base_url,
            to.code(),
            from.code()
        );
        parse_latest_rate(&self.fetcher.fetch(&url)?, from, to)
    }

    /// Loads the daily rate series from `start` to the present.
    pub fn time_series(
        &self,
        from: &Currency,
        to: &Currency,
        start: NaiveDate,
    ) -> Result<ExchangeRateTimeSeries, ApiError> {
        let url = format!(
            "{}/{}..?symbols={}&base={}",
            self.base_url,
            start.format("%Y-%m-%d"),
            to.code(),
            from.code()
        );
        parse_time_series(&self.fetcher.fetch(&url)?, from, to)
    }
}

/// Maps the `/currencies` response, a JSON object of `{code: name}`, into an
/// ordered list of currencies. Any non-object JSON or non-string name fails
/// the whole parse.
pub fn parse_currency_list(json: &str) -> Result<Vec<Currency>, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let symbols = value
        .as_object()
        .ok_or_else(|| ApiError::Malformed("currency list is not a JSON object".to_string()))?;

    symbols
        .iter()
        .map(|(code, name)| {
            name.as_str()
                .map(|n| Currency::new(code, n))
                .ok_or_else(|| {
                    ApiError::Malformed(format!("currency name for {} is not a string", code))
                })
        })
        .collect()
}

#[derive(Deserialize)]
struct LatestRateResponse {
    date: String,
    rates: HashMap<String, f64>,
}

/// Maps the `/latest` response into an [`ExchangeRate`] for the requested
/// target currency.
pub fn parse_latest_rate(
    json: &str,
    from: &Currency,
    to: &Currency,
) -> Result<ExchangeRate, ApiError> {
    let response: LatestRateResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let rate = response.rates.get(to.code()).copied().ok_or_else(|| {
        ApiError::Malformed(format!("no rate for {} in latest response", to.code()))
    })?;
    Ok(ExchangeRate::new(
        from.clone(),
        to.clone(),
        response.date,
        rate,
    ))
}

#[derive(Deserialize)]
struct TimeSeriesResponse {
    rates: HashMap<String, HashMap<String, f64>>,
}

/// Maps the historical-range response into an [`ExchangeRateTimeSeries`].
/// A date entry missing the target code fails the whole parse; we never
/// return a partially mapped series.
pub fn parse_time_series(
    json: &str,
    from: &Currency,
    to: &Currency,
) -> Result<ExchangeRateTimeSeries, ApiError> {
    let response: TimeSeriesResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Malformed(e.to_string()))?;

    let mut rates = HashMap::with_capacity(response.rates.len());
    for (day, by_code) in response.rates {
        let rate = by_code.get(to.code()).copied().ok_or_else(|| {
            ApiError::Malformed(format!("no {} rate for {}", to.code(), day))
        })?;
        rates.insert(day, rate);
    }

    Ok(ExchangeRateTimeSeries::new(from.clone(), to.clone(), rates))
}
