//! HTTP transport used by the metadata fetcher
//!
//! The fetcher only needs "GET this URL with this optional `Authorization`
//! header". Keeping that behind [`Transport`] lets one `reqwest::Client` be
//! reused across every request of a run, and lets tests answer from memory.

use log::debug;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::artifact::config::{FetchConfig, USER_AGENT};
use crate::artifact::error::{FetchError, TrustError, TrustResult};

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET-only HTTP abstraction
pub trait Transport: Send + Sync {
    /// Issue a GET. Non-2xx statuses are returned, not turned into errors.
    fn get(
        &self,
        url: &str,
        authorization: Option<&str>,
    ) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send;
}

/// GET `url` and parse a 2xx body as JSON.
pub(crate) async fn get_json<T: Transport>(
    transport: &T,
    url: &str,
    authorization: Option<&str>,
) -> Result<Value, FetchError> {
    let body = get_text(transport, url, authorization).await?;
    Ok(serde_json::from_str(&body)?)
}

/// GET `url` and return a 2xx body as text.
pub(crate) async fn get_text<T: Transport>(
    transport: &T,
    url: &str,
    authorization: Option<&str>,
) -> Result<String, FetchError> {
    let response = transport.get(url, authorization).await?;
    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status,
            url: url.to_string(),
        });
    }
    Ok(response.body)
}

/// [`Transport`] over a single shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &FetchConfig) -> TrustResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TrustError::ClientSetup(e.to_string()))?;
        Ok(Self {
            client,
            timeout: config.api_timeout,
        })
    }

    fn map_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<HttpResponse, FetchError> {
        debug!("GET {url}");
        let mut request = self.client.get(url);
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());

        Ok(HttpResponse { status, body })
    }
}
