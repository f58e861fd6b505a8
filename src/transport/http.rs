//! HTTP transport: one request/response cycle per call.
//!
//! Outcomes are classified into exactly three kinds consumable by the
//! client: `Ok(body)`, `Timeout`, `Connection(detail)`. Body contents are
//! never interpreted here.

use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Raw result of one completed HTTP exchange.
#[derive(Debug)]
pub struct ResponseBody {
    pub status: u16,
    pub body: String,
}

impl ResponseBody {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connection(String),
}

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, default_timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(default_timeout)
            .build()
            .map_err(|e| {
                crate::Error::configuration(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request under the given deadline.
    pub async fn get(
        &self,
        path: &str,
        timeout: Duration,
    ) -> Result<ResponseBody, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.get(&url), "GET", path, timeout)
            .await
    }

    /// Send a POST request, with an optional JSON body, under the given deadline.
    pub async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
        timeout: Duration,
    ) -> Result<ResponseBody, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(req, "POST", path, timeout).await
    }

    /// One deadline covers the whole exchange, connection establishment and
    /// full body receipt included.
    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
        method: &str,
        path: &str,
        timeout: Duration,
    ) -> Result<ResponseBody, TransportError> {
        // Correlation id. The gateway may ignore it, but applications can
        // use it to link client logs with server logs.
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        let response = req
            .timeout(timeout)
            .header("x-client-request-id", &request_id)
            .send()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        debug!(
            method,
            path,
            http_status = status,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            "gateway request completed"
        );

        Ok(ResponseBody { status, body })
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else {
            // DNS failure, refused, reset mid-body: all "could not complete
            // the exchange" from the caller's point of view.
            TransportError::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_body_success_range() {
        let ok = ResponseBody {
            status: 200,
            body: String::new(),
        };
        let redirect = ResponseBody {
            status: 301,
            body: String::new(),
        };
        let server_error = ResponseBody {
            status: 500,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!server_error.is_success());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = HttpTransport::new("http://vm:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.base_url(), "http://vm:8000");
    }
}
