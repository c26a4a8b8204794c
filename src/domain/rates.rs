use std::collections::HashMap;

use super::Currency;

/// The latest published rate for a currency pair. `rate` is the multiplier
/// converting one unit of `from` into `to`; `date` is the provider's
/// publication date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    from: Currency,
    to: Currency,
    date: String,
    rate: f64,
}

impl ExchangeRate {
    pub fn new(from: Currency, to: Currency, date: impl Into<String>, rate: f64) -> Self {
        Self {
            from,
            to,
            date: date.into(),
            rate,
        }
    }

    pub fn from_currency(&self) -> &Currency {
        &self.from
    }

    pub fn to_currency(&self) -> &Currency {
        &self.to
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Daily observations for a currency pair over the lookback window, keyed by
/// `YYYY-MM-DD` date string. Keys are unique and unordered; consumers must
/// call [`sorted_points`](Self::sorted_points) before rendering.
#[derive(Debug, Clone)]
pub struct ExchangeRateTimeSeries {
    from: Currency,
    to: Currency,
    rates: HashMap<String, f64>,
}

impl ExchangeRateTimeSeries {
    pub fn new(from: Currency, to: Currency, rates: HashMap<String, f64>) -> Self {
        Self { from, to, rates }
    }

    pub fn from_currency(&self) -> &Currency {
        &self.from
    }

    pub fn to_currency(&self) -> &Currency {
        &self.to
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns `(date, rate)` pairs sorted chronologically. `YYYY-MM-DD`
    /// strings compare correctly lexicographically, so a plain string sort
    /// is a date sort.
    pub fn sorted_points(&self) -> Vec<(String, f64)> {
        let mut points: Vec<(String, f64)> = self
            .rates
            .iter()
            .map(|(day, rate)| (day.clone(), *rate))
            .collect();
        points.sort_by(|a, b| a.0.cmp(&b.0));
        points
    }
}

/// Descriptive chart configuration: title and axis labels, no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl ChartSpec {
    pub fn new(
        title: impl Into<String>,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_axis_label: x_axis_label.into(),
            y_axis_label: y_axis_label.into(),
        }
    }
}
