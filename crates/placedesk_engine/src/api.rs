use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use placedesk_core::{JobSummary, PlaceRecord};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the scraper backend, without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The single error shape every API call resolves to. Transport faults and
/// non-2xx responses both land here; nothing from reqwest leaks past this
/// module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request could not be sent or the response not received.
    Transport,
    /// The server answered with a non-2xx status.
    Server { status: u16 },
    /// A 2xx response body could not be parsed (or was missing).
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Transport => write!(f, "transport error"),
            ApiErrorKind::Server { status } => write!(f, "server error (http {status})"),
            ApiErrorKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Wire shape of `GET /jobs/{id}/results`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobResultsPayload {
    pub job_id: String,
    #[serde(default)]
    pub queries: Vec<String>,
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<PlaceRecord>,
}

/// The four remote operations the result-management layer consumes.
///
/// Each call is a single fire-and-observe request: no retries, no caching.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, ApiError>;
    async fn job_results(&self, job_id: &str) -> Result<JobResultsPayload, ApiError>;
    /// Persists one record's contacted flag. A 2xx response with a body
    /// yields the updated record; a no-content response yields `None`.
    async fn set_contacted(
        &self,
        place_id: &str,
        contacted: bool,
    ) -> Result<Option<PlaceRecord>, ApiError>;
    async fn delete_job(&self, job_id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_transport_error)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, ApiError> {
        let response = self
            .client
            .get(self.url("/jobs"))
            .send()
            .await
            .map_err(map_transport_error)?;
        require_body(parse_success(response).await?)
    }

    async fn job_results(&self, job_id: &str) -> Result<JobResultsPayload, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/jobs/{job_id}/results")))
            .send()
            .await
            .map_err(map_transport_error)?;
        require_body(parse_success(response).await?)
    }

    async fn set_contacted(
        &self,
        place_id: &str,
        contacted: bool,
    ) -> Result<Option<PlaceRecord>, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/places/{place_id}")))
            .json(&serde_json::json!({ "contacted": contacted }))
            .send()
            .await
            .map_err(map_transport_error)?;
        parse_success(response).await
    }

    async fn delete_job(&self, job_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/jobs/{job_id}")))
            .send()
            .await
            .map_err(map_transport_error)?;
        parse_success::<serde_json::Value>(response).await.map(|_| ())
    }
}

/// Resolves a response into `Ok(Some(parsed))`, `Ok(None)` for a success
/// without a body, or a single `ApiError` for everything else.
async fn parse_success<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(server_error(status.as_u16(), &body));
    }

    let bytes = response.bytes().await.map_err(map_transport_error)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|err| ApiError::new(ApiErrorKind::Decode, err.to_string()))
}

fn require_body<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::new(ApiErrorKind::Decode, "missing response body"))
}

/// Extracts the backend's `{"error": …}` message when present, otherwise
/// falls back to a generic server-error text.
fn server_error(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| format!("server error ({status})"));
    ApiError::new(ApiErrorKind::Server { status }, message)
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    ApiError::new(ApiErrorKind::Transport, err.to_string())
}
