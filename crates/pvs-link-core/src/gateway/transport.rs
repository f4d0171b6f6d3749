//! HTTP round trip shared by every gateway call.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::protocol::schema::Record;

pub const DEFAULT_BASE_URL: &str = "http://sunpowerconsole.com/cgi-bin";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body argument for POSTs that send nothing.
pub(crate) const NO_BODY: Option<&()> = None;

/// Where the gateway lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Covers connecting and the whole request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Typed client for the gateway's local REST API.
///
/// Holds one connection pool for its whole life. Calls are independent and
/// never retried.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`, sending `query` as URL parameters.
    pub async fn get<T: Record>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!(method = "GET", %url, "gateway request");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(path, &url, request).await
    }

    /// POST `body` as JSON, or an empty request when there is none.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: Record,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(method = "POST", %url, "gateway request");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(path, &url, request).await
    }

    pub async fn delete<T: Record>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(method = "DELETE", %url, "gateway request");

        let request = self.http.delete(&url);
        self.execute(path, &url, request).await
    }

    async fn execute<T: Record>(&self, path: &str, url: &str, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(url, e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "gateway response");

        if !status.is_success() {
            return Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into());
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::empty()?);
        }
        Ok(T::from_slice(&body)?)
    }
}
