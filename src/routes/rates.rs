use super::{AppState, Response};
use crate::data::FxClient;
use crate::error::FetchError;
use crate::rates::{HistoricalSeries, RateSnapshot};
use axum::{extract::State, Json};
use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

/// Length of the historical window, ending today.
const TRAILING_DAYS: u64 = 365;

#[derive(Debug, Serialize)]
pub struct Historical {
    pub success: bool,
    pub data: HistoricalSeries,
}

pub async fn real_time_rates(State(state): State<AppState>) -> Json<Response<RateSnapshot>> {
    let result = fetch_real_time(&state.client).await;
    Json(Response::from_result("real-time rates", result))
}

pub async fn historical_rates(State(state): State<AppState>) -> Json<Response<Historical>> {
    let today = Local::now().date_naive();
    let result = fetch_historical(&state.client, today).await;
    Json(Response::from_result("historical rates", result))
}

pub async fn fetch_real_time(client: &FxClient) -> Result<RateSnapshot, FetchError> {
    let body = client.latest().await?;
    RateSnapshot::from_latest(body, client.quote())
}

pub async fn fetch_historical(client: &FxClient, today: NaiveDate) -> Result<Historical, FetchError> {
    let start = today
        .checked_sub_days(Days::new(TRAILING_DAYS))
        .ok_or_else(|| FetchError::Unexpected(format!("cannot go back {TRAILING_DAYS} days from {today}")))?;

    let body = client.range(start, today).await?;
    let data = HistoricalSeries::from_range(body, client.quote())?;

    Ok(Historical {
        success: true,
        data,
    })
}
