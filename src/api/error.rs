use thiserror::Error;

/// Failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{endpoint} reported failure: {message}")]
    Rejected {
        endpoint: &'static str,
        message: String,
    },
    #[error("{endpoint} reported success without a payload")]
    MissingPayload { endpoint: &'static str },
}

impl ApiError {
    pub(crate) fn rejected(endpoint: &'static str, message: Option<String>) -> Self {
        Self::Rejected {
            endpoint,
            message: message.unwrap_or_else(|| "no reason given".to_string()),
        }
    }
}
