use crate::data::{LatestResponse, RangeResponse};
use crate::error::FetchError;
use chrono::NaiveDate;
use serde::Serialize;

/// Margin applied on each side of the mid price.
pub const SPREAD: f64 = 0.001;

pub const NO_RATE: &str = "no exchange rate data returned";
pub const NO_HISTORY: &str = "no historical exchange rate data returned";
pub const INCOMPLETE_HISTORY: &str = "historical entry is missing the quote currency";

/// Rounds to 4 decimal places using the exact binary value, so `6.00005`
/// (stored just below the midpoint) rounds down.
pub fn round4(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub buy_price: f64,
    pub sell_price: f64,
    pub mid_price: f64,
    pub success: bool,
    pub update_time: String,
}

impl RateSnapshot {
    pub fn from_mid(rate: f64, update_time: String) -> Self {
        RateSnapshot {
            buy_price: round4(rate - SPREAD),
            sell_price: round4(rate + SPREAD),
            mid_price: round4(rate),
            success: true,
            update_time,
        }
    }

    pub fn from_latest(body: LatestResponse, quote: &str) -> Result<Self, FetchError> {
        let rate = body
            .rates
            .as_ref()
            .and_then(|rates| rates.get(quote))
            .copied()
            .ok_or(FetchError::DataShape(NO_RATE))?;

        Ok(Self::from_mid(rate, body.date.unwrap_or_default()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub count: usize,
}

impl Statistics {
    /// `None` for an empty series, so the mean never divides by zero.
    pub fn calculate(rates: &[f64]) -> Option<Self> {
        if rates.is_empty() {
            return None;
        }

        let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = rates.iter().sum::<f64>() / rates.len() as f64;

        Some(Statistics {
            max: round4(max),
            min: round4(min),
            mean: round4(mean),
            count: rates.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalSeries {
    /// `MM-DD`, ascending by the underlying date. The year is dropped.
    pub labels: Vec<String>,
    pub rates: Vec<f64>,
    pub statistics: Statistics,
}

impl HistoricalSeries {
    pub fn from_range(body: RangeResponse, quote: &str) -> Result<Self, FetchError> {
        let days = body
            .rates
            .filter(|rates| !rates.is_empty())
            .ok_or(FetchError::DataShape(NO_HISTORY))?;

        let mut points = days
            .iter()
            .map(|(day, quotes)| {
                let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
                    FetchError::Unexpected(format!("invalid date {day:?} in history: {e}"))
                })?;
                let rate = quotes
                    .get(quote)
                    .copied()
                    .ok_or(FetchError::DataShape(INCOMPLETE_HISTORY))?;
                Ok((date, rate))
            })
            .collect::<Result<Vec<(NaiveDate, f64)>, FetchError>>()?;

        points.sort_by_key(|(date, _)| *date);

        let labels = points
            .iter()
            .map(|(date, _)| date.format("%m-%d").to_string())
            .collect();
        let rates: Vec<f64> = points.iter().map(|(_, rate)| round4(*rate)).collect();

        let statistics = Statistics::calculate(&rates).ok_or(FetchError::DataShape(NO_HISTORY))?;

        Ok(HistoricalSeries {
            labels,
            rates,
            statistics,
        })
    }
}
