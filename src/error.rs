use serde::Serialize;
use thiserror::Error;

/// Why a rates request could not be answered.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect, DNS, timeout or non-2xx status.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The body arrived but is not JSON at all.
    #[error("network request failed: malformed response body: {0}")]
    MalformedBody(serde_json::Error),
    /// The upstream answered but without the fields we need.
    #[error("{0}")]
    DataShape(&'static str),
    #[error("failed to fetch data: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::MalformedBody(_) => "network",
            Self::DataShape(_) => "data_shape",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl From<&FetchError> for ErrorEnvelope {
    fn from(err: &FetchError) -> Self {
        ErrorEnvelope {
            success: false,
            error: err.to_string(),
        }
    }
}
