//! HTTP client for the Lexora API.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lexora_core::{
    ClauseCompareRequest, ClauseExplainRequest, ClientConfig, CompareResponse, ExplainResponse,
    HealthReport, LegalQaRequest, LegalQaResponse, NdaGenerateRequest, NdaResponse,
    PdfExportRequest,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::assistant::LegalAssistant;
use crate::error::ApiError;
use crate::fallback;
use crate::health::{HealthGate, Reachability};

/// Method and optional JSON body for [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// A bodyless `GET`.
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }

    /// A `POST` carrying `body` as JSON.
    ///
    /// Fails only if `body` cannot be represented as JSON.
    pub fn post<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Client for the Lexora API.
///
/// Owns its reachability cache; generative calls consult it before going
/// to the network and answer from [`fallback`] while the API is offline.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
    health_timeout: Duration,
    health: Mutex<HealthGate>,
}

impl ApiClient {
    /// Create a client for the API at `config.base_url`.
    ///
    /// The base URL is the API root including its `/api` prefix, e.g.
    /// `http://localhost:5000/api`. A trailing slash is trimmed. Nothing is
    /// contacted until the first call; reachability starts as
    /// [`Reachability::Unknown`].
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout,
            health_timeout: config.health_timeout,
            health: Mutex::new(HealthGate::new(config.health_cooldown)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reachability as of the last health check.
    pub fn reachability(&self) -> Reachability {
        self.gate().reachability()
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.gate().last_checked()
    }

    /// Whether the API is reachable, probing `/health` only when the cached
    /// answer has expired. Any failure counts as unreachable.
    pub async fn check_health(&self) -> bool {
        let now = Instant::now();
        let now_utc = Utc::now();
        let cached = self.gate().fresh(now);
        if let Some(online) = cached {
            debug!(online, "using cached health state");
            return online;
        }

        let online = self.ping().await;
        self.gate().record(now, now_utc, online);
        online
    }

    async fn ping(&self) -> bool {
        let url = self.url("/health");
        debug!(url = %url, "probing lexora api");
        match self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                info!(url = %url, "lexora api is online");
                true
            }
            Ok(resp) => {
                let status = resp.status().as_u16();
                warn!(url = %url, status, "health check returned error status");
                false
            }
            Err(e) => {
                warn!(url = %url, error = %e, "health check failed");
                false
            }
        }
    }

    /// Call `endpoint` and decode the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let resp = self.send(endpoint, options).await?;
        resp.json::<T>().await.map_err(|e| self.transport_error(e))
    }

    /// Call `endpoint` and return the raw response body.
    pub async fn request_bytes(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let resp = self.send(endpoint, options).await?;
        let bytes = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(bytes.to_vec())
    }

    /// Fetch the server's own health report.
    pub async fn health_report(&self) -> Result<HealthReport, ApiError> {
        self.request("/health", RequestOptions::get()).await
    }

    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(endpoint);
        info!(method = %options.method, url = %url, "calling lexora api");

        let mut builder = self
            .client
            .request(options.method, &url)
            .timeout(self.request_timeout);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "lexora api returned error status");
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.request_timeout)
        } else if err.is_connect() || err.is_request() {
            // No response came back, e.g. a refused or dropped connection.
            warn!(error = %err, "lexora api unreachable");
            ApiError::Unavailable
        } else if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Http(err)
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn gate(&self) -> MutexGuard<'_, HealthGate> {
        self.health.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LegalAssistant for ApiClient {
    async fn generate_nda(&self, req: &NdaGenerateRequest) -> Result<NdaResponse, ApiError> {
        if !self.check_health().await {
            info!("lexora api offline, drafting NDA from local template");
            return Ok(fallback::mock_nda(req));
        }
        self.request("/nda/generate", RequestOptions::post(req)?).await
    }

    async fn explain_clause(
        &self,
        req: &ClauseExplainRequest,
    ) -> Result<ExplainResponse, ApiError> {
        if !self.check_health().await {
            info!("lexora api offline, explaining clause by keyword match");
            return Ok(fallback::mock_explanation(req));
        }
        self.request("/explainer/explain", RequestOptions::post(req)?).await
    }

    async fn compare_clauses(
        &self,
        req: &ClauseCompareRequest,
    ) -> Result<CompareResponse, ApiError> {
        if !self.check_health().await {
            info!("lexora api offline, using generic comparison");
            return Ok(fallback::mock_comparison(req));
        }
        self.request("/comparator/compare", RequestOptions::post(req)?).await
    }

    async fn ask_question(&self, req: &LegalQaRequest) -> Result<LegalQaResponse, ApiError> {
        self.request("/legal-qa/ask", RequestOptions::post(req)?).await
    }

    async fn export_pdf(&self, req: &PdfExportRequest) -> Result<Vec<u8>, ApiError> {
        if !self.check_health().await {
            return Err(ApiError::BackendRequired("PDF download"));
        }
        self.request_bytes("/download/download", RequestOptions::post(req)?).await
    }

    async fn download_nda(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        if filename.is_empty()
            || filename == ".."
            || filename.contains(['/', '\\', '?', '#'])
        {
            return Err(ApiError::InvalidFilename(filename.to_string()));
        }
        if !self.check_health().await {
            return Err(ApiError::BackendRequired("NDA download"));
        }
        let endpoint = format!("/nda/download/{filename}");
        self.request_bytes(&endpoint, RequestOptions::get()).await
    }
}
