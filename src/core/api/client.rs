//! AnythingLLM API client.
//!
//! A single `reqwest::Client` is built from the configuration and shared by
//! every tool. Each call checks the API key first, then issues one request
//! against `{base_url}/api/v1{endpoint}`.

use std::time::Duration;

use reqwest::{Method, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use crate::core::config::{AnythingLlmConfig, normalize_base_url};

/// Path prefix of the developer API.
const API_PREFIX: &str = "/api/v1";

/// Authenticated client for the AnythingLLM developer API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ApiClient {
    /// Build the client from the AnythingLLM settings.
    pub fn new(settings: &AnythingLlmConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("anythingllm-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&settings.base_url),
            api_key: settings.api_key.clone(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn require_api_key(&self) -> ApiResult<()> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(ApiError::MissingApiKey)
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint)
    }

    /// GET an endpoint.
    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(Method::GET, endpoint, None).await
    }

    /// POST a JSON body to an endpoint.
    pub async fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// DELETE an endpoint.
    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(Method::DELETE, endpoint, None).await
    }

    /// Execute an authenticated request.
    ///
    /// JSON responses are parsed; any other successful response is returned
    /// as a JSON string holding the raw body.
    #[instrument(skip_all, fields(%method, %endpoint))]
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.require_api_key()?;

        let url = self.url(endpoint);
        debug!("Calling AnythingLLM: {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, &self.base_url))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("AnythingLLM returned {} for {}", status, endpoint);
            return Err(ApiError::status(status.as_u16(), &body));
        }

        if is_json {
            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::from_reqwest(e, &self.base_url))
        } else {
            response
                .text()
                .await
                .map(Value::String)
                .map_err(|e| ApiError::from_reqwest(e, &self.base_url))
        }
    }
}

/// Serialize a payload as indented JSON for the client.
pub fn json_response<T: Serialize + ?Sized>(data: &T) -> ApiResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
