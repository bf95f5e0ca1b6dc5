use crate::api::error::ApiError;
use crate::api::models::{
    Fortune, FortuneRequest, FortuneResponse, HealthStatus, NameCandidate, SelectionLog,
    SuggestRequest, SuggestResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const SUGGEST_NAMES: &str = "/api/suggest-names";
const LOG_SELECTION: &str = "/api/log-selection";
const FORTUNE: &str = "/api/fortune";
const HEALTH: &str = "/health";

/// Operations the session controller needs from the backend.
#[async_trait]
pub trait NaeilumApi: Send + Sync {
    /// Generate name candidates. `success:false` is an error.
    async fn suggest_names(&self, request: &SuggestRequest)
        -> Result<Vec<NameCandidate>, ApiError>;

    /// Record a chosen name. The response body is ignored.
    async fn log_selection(&self, log: &SelectionLog) -> Result<(), ApiError>;

    /// Draw a fortune for the given tags. `success:false` is an error.
    async fn fortune(&self, request: &FortuneRequest) -> Result<Fortune, ApiError>;

    /// Probe the backend's health endpoint.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// `reqwest`-backed client for a Naeilum server.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, endpoint: &'static str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(endpoint, "POST");
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })
    }
}

#[async_trait]
impl NaeilumApi for HttpApi {
    async fn suggest_names(
        &self,
        request: &SuggestRequest,
    ) -> Result<Vec<NameCandidate>, ApiError> {
        let body: SuggestResponse = self.post_json(SUGGEST_NAMES, request).await?;
        if !body.success {
            return Err(ApiError::rejected(SUGGEST_NAMES, body.error));
        }
        body.candidates.ok_or(ApiError::MissingPayload {
            endpoint: SUGGEST_NAMES,
        })
    }

    async fn log_selection(&self, log: &SelectionLog) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(LOG_SELECTION))
            .json(log)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: LOG_SELECTION,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: LOG_SELECTION,
                status,
            });
        }
        Ok(())
    }

    async fn fortune(&self, request: &FortuneRequest) -> Result<Fortune, ApiError> {
        let body: FortuneResponse = self.post_json(FORTUNE, request).await?;
        if !body.success {
            return Err(ApiError::rejected(FORTUNE, body.error));
        }
        body.fortune
            .ok_or(ApiError::MissingPayload { endpoint: FORTUNE })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self
            .http
            .get(self.url(HEALTH))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: HEALTH,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: HEALTH,
                status,
            });
        }

        response.json().await.map_err(|source| ApiError::Transport {
            endpoint: HEALTH,
            source,
        })
    }
}
