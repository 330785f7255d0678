//! Async HTTP client for the booking backend
//!
//! One reqwest client is shared by every call. All requests go through
//! `send_json`, which sets the JSON/XHR headers, rejects non-2xx statuses and
//! parses the body.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::{ApiError, CancelBookingResponse};

const CITIES_PATH: &str = "/api/cities";
const X_REQUESTED_WITH: &str = "X-Requested-With";

/// Client for the booking backend HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`
    ///
    /// Fails if the URL does not parse or the TLS backend cannot be set up.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| ApiError::Setup(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/api/cities`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generic JSON request wrapper
    ///
    /// Sends `body` as JSON when present and parses the response as `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send_json(builder).await
    }

    /// Look up city names matching `query`
    ///
    /// Returns `ApiError::Cancelled` as soon as `cancel_token` fires; the
    /// in-flight HTTP request is dropped at that point.
    pub async fn cities(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<String>, ApiError> {
        if cancel_token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let builder = self
            .http
            .get(self.url(CITIES_PATH))
            .query(&[("q", query)]);

        tokio::select! {
            _ = cancel_token.cancelled() => Err(ApiError::Cancelled),
            result = self.send_json::<Vec<String>>(builder) => result,
        }
    }

    /// Cancel the booking identified by `reference`
    pub async fn cancel_booking(&self, reference: &str) -> Result<CancelBookingResponse, ApiError> {
        let path = format!("/api/booking/{reference}/cancel");
        self.request_json(Method::POST, &path, None).await
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
