use crate::data::FxClient;
use crate::error::{ErrorEnvelope, FetchError};
use axum::{routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

pub mod index;
pub mod rates;

#[derive(Clone)]
pub struct AppState {
    pub client: FxClient,
}

/// Body of every `/api` response. Failures are reported in-band with
/// `success: false` and HTTP 200.
#[derive(Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error(ErrorEnvelope),
}

impl<T> Response<T> {
    pub fn from_result(context: &str, result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => Response::Success(payload),
            Err(err) => {
                tracing::error!(kind = err.kind(), error = ?err, "{context} failed: {err}");
                Response::Error(ErrorEnvelope::from(&err))
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/favicon.ico", get(index::favicon))
        .route("/api/real-time-rates", get(rates::real_time_rates))
        .route("/api/historical-rates", get(rates::historical_rates))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
