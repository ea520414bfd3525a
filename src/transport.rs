// Single-shot HTTP invocation of the provider search endpoint

use async_trait::async_trait;
use tracing::trace;

use crate::error::ApiError;
use crate::provider::{SearchRequestBody, SearchResponse};

// Fixed base path of the QPX Express search endpoint.
pub const QPX_SEARCH_URL: &str = "https://www.googleapis.com/qpxExpress/v1/trips/search";

// Builds the endpoint URL with the API key as a query parameter.
pub fn endpoint_url(base_url: &str, api_key: &str) -> String {
    format!("{}?key={}", base_url.trim_end_matches('/'), api_key)
}

// Seam between the client and the network. One outbound call per
// invocation; implementations must not retry or cache.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send_search(
        &self,
        url: &str,
        body: &SearchRequestBody,
    ) -> Result<SearchResponse, ApiError>;
}

// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_search(
        &self,
        url: &str,
        body: &SearchRequestBody,
    ) -> Result<SearchResponse, ApiError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        trace!(%status, "provider responded");

        if status.is_success() {
            return response
                .json::<SearchResponse>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_error_body(status.as_u16(), text)
    }
}

// The provider reports business errors (e.g. an unknown airport code) with a
// non-2xx status and an `error` payload in the body. Those pass through as a
// response so the normalizer can classify them; anything else is a transport
// failure.
fn decode_error_body(status: u16, text: String) -> Result<SearchResponse, ApiError> {
    if let Ok(parsed) = serde_json::from_str::<SearchResponse>(&text) {
        if parsed.error.is_some() {
            return Ok(parsed);
        }
    }
    Err(ApiError::Transport(format!("HTTP {}: {}", status, text)))
}
