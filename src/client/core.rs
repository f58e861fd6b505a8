//! Chat client core: payload construction, dispatch, and response
//! normalization.

use crate::client::builder::ChatClientBuilder;
use crate::client::validation::{validate_project_url, validate_prompt};
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, ResponseBody, TransportError};
use crate::types::request::ChatRequest;
use crate::types::result::{ChatReply, ChatResult, Project, ReloadInfo, StatusInfo};
use crate::{Error, ErrorContext, Result};
use tracing::warn;

/// Client for the gateway chat API.
///
/// Holds only immutable state (configuration plus a connection-pooling HTTP
/// client), so one instance can be shared freely across tasks and reused
/// for any number of calls. Each call is one HTTP exchange with one
/// outcome; nothing is retried, streamed, or cached.
#[derive(Debug)]
pub struct ChatClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl ChatClient {
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.base_url, config.timeout)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a prompt and return the normalized outcome.
    ///
    /// With `project_url` absent the gateway routes to its default project;
    /// with it present, to that project. Transport-level timeout and
    /// connection failures come back as a failed [`ChatResult`], not an
    /// `Err`: a chat may legitimately consume the full deadline, and for
    /// callers "server unreachable" and "chat did not succeed" are the same
    /// single-shaped outcome. Only local validation and contract
    /// violations are errors.
    pub async fn chat(&self, prompt: &str, project_url: Option<&str>) -> Result<ChatResult> {
        let request = self.prepare_request(prompt, project_url, Vec::new())?;
        self.send_chat(request).await
    }

    /// Like [`chat`](Self::chat), with base64-encoded images attached to
    /// the prompt. See [`encode_image`](crate::encode_image).
    pub async fn chat_with_images(
        &self,
        prompt: &str,
        project_url: Option<&str>,
        images: Vec<String>,
    ) -> Result<ChatResult> {
        let request = self.prepare_request(prompt, project_url, images)?;
        self.send_chat(request).await
    }

    fn prepare_request(
        &self,
        prompt: &str,
        project_url: Option<&str>,
        images: Vec<String>,
    ) -> Result<ChatRequest> {
        validate_prompt(prompt)?;
        if let Some(url) = project_url {
            validate_project_url(url)?;
        }

        let mut request = ChatRequest::new(prompt).with_images(images);
        if let Some(url) = project_url {
            request = request.with_project_url(url);
        }
        Ok(request)
    }

    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResult> {
        let payload = serde_json::to_value(&request)?;

        let reply = match self
            .transport
            .post("/chat", Some(&payload), self.config.timeout)
            .await
        {
            Ok(reply) => reply,
            Err(TransportError::Timeout(timeout)) => {
                warn!(
                    timeout_secs = timeout.as_secs(),
                    "chat request timed out"
                );
                return Ok(ChatResult::failure("Request timeout"));
            }
            Err(TransportError::Connection(detail)) => {
                warn!(detail = detail.as_str(), "chat request could not reach gateway");
                return Ok(ChatResult::failure(detail));
            }
        };

        if !reply.is_success() {
            warn!(http_status = reply.status, "chat request rejected by gateway");
            return Ok(ChatResult::failure(format!(
                "Request failed: HTTP {}",
                reply.status
            )));
        }

        normalize_chat_reply(&reply.body)
    }

    /// Fetch a fresh snapshot of gateway health.
    ///
    /// The body is passed through: `api_status` is extracted, everything
    /// else lands in [`StatusInfo::details`] untouched. A non-"running"
    /// status is data for the caller, not an error. Unlike `chat`,
    /// transport failures here are raised as typed errors; there is no
    /// partial-success framing for a status probe.
    pub async fn status(&self) -> Result<StatusInfo> {
        let reply = self.control_get("/status").await?;
        parse_body(&reply.body, "status")
    }

    /// List project contexts in exactly the order the server returned them;
    /// no reordering, filtering, or deduplication. Failure mapping matches
    /// [`status`](Self::status).
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let reply = self.control_get("/projects").await?;
        parse_body(&reply.body, "projects")
    }

    /// Ask the gateway to restart its backing engine (useful after a
    /// crash). Failure mapping matches [`status`](Self::status).
    pub async fn reload_engine(&self) -> Result<ReloadInfo> {
        let reply = match self
            .transport
            .post("/reload", None, self.config.reload_timeout)
            .await
        {
            Ok(reply) => reply,
            Err(e) => return Err(map_control_error(e)),
        };
        if !reply.is_success() {
            return Err(Error::Remote {
                status: reply.status,
                message: reply.body,
            });
        }
        parse_body(&reply.body, "reload")
    }

    /// Probe the gateway's `/status` endpoint.
    ///
    /// A failed probe is logged and returned; the gateway may come up
    /// later, so callers decide whether it is fatal.
    pub async fn verify_connection(&self) -> Result<()> {
        match self.status().await {
            Ok(info) => {
                if info.api_status != "running" {
                    warn!(
                        api_status = info.api_status.as_str(),
                        "gateway reachable but not running"
                    );
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "could not connect to gateway");
                Err(e)
            }
        }
    }

    async fn control_get(&self, path: &str) -> Result<ResponseBody> {
        let reply = self
            .transport
            .get(path, self.config.control_timeout)
            .await
            .map_err(map_control_error)?;
        if !reply.is_success() {
            return Err(Error::Remote {
                status: reply.status,
                message: reply.body,
            });
        }
        Ok(reply)
    }
}

fn map_control_error(err: TransportError) -> Error {
    match err {
        TransportError::Timeout(timeout) => Error::Timeout {
            seconds: timeout.as_secs(),
        },
        TransportError::Connection(detail) => Error::Connection(detail),
    }
}

/// Map the gateway's reply onto the normalized result shape.
///
/// A body that does not match the documented contract is a protocol
/// violation, never coerced into a failed result: callers must be able to
/// tell "the server said no" apart from "the server is broken".
fn normalize_chat_reply(body: &str) -> Result<ChatResult> {
    let reply: ChatReply = serde_json::from_str(body).map_err(|e| {
        Error::protocol_with_context(
            format!("chat reply does not match the gateway contract: {}", e),
            ErrorContext::new().with_source("chat"),
        )
    })?;

    if reply.status == "success" {
        // Invariant: a success reply carries its response text.
        let response = reply.response.ok_or_else(|| {
            Error::protocol_with_context(
                "success reply is missing the response field",
                ErrorContext::new()
                    .with_field_path("reply.response")
                    .with_source("chat"),
            )
        })?;
        Ok(ChatResult {
            success: true,
            response: Some(response),
            project_id: reply.project_id,
            error: None,
            images_uploaded: reply.images_uploaded,
        })
    } else {
        Ok(ChatResult::failure(
            reply.error.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str, source: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::protocol_with_context(
            format!("reply does not match the gateway contract: {}", e),
            ErrorContext::new().with_source(source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_success_reply() {
        let result =
            normalize_chat_reply(r#"{"status":"success","response":"hi","project_id":"p1"}"#)
                .unwrap();
        assert!(result.success);
        assert_eq!(result.response.as_deref(), Some("hi"));
        assert_eq!(result.project_id.as_deref(), Some("p1"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_normalize_server_reported_failure() {
        let result =
            normalize_chat_reply(r#"{"status":"error","error":"NOT_LOGGED_IN"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("NOT_LOGGED_IN"));
        assert!(result.response.is_none());
    }

    #[test]
    fn test_normalize_failure_without_error_field() {
        let result = normalize_chat_reply(r#"{"status":"error"}"#).unwrap();
        assert_eq!(result.error.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_normalize_rejects_non_json() {
        let err = normalize_chat_reply("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_normalize_rejects_missing_status() {
        let err = normalize_chat_reply(r#"{"response":"hi"}"#).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_normalize_rejects_success_without_response() {
        let err = normalize_chat_reply(r#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }
}
