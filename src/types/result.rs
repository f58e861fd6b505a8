//! Normalized result types returned to callers.

use serde::Deserialize;
use std::fmt;

/// Normalized outcome of a chat call.
///
/// Business success and business failure are both represented as data;
/// exactly one of `response` / `error` is present depending on `success`.
/// Only contract violations surface as [`Error`](crate::Error).
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub success: bool,
    pub response: Option<String>,
    pub project_id: Option<String>,
    pub error: Option<String>,
    /// Count of images the gateway accepted alongside the prompt.
    pub images_uploaded: Option<u32>,
}

impl ChatResult {
    pub(crate) fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            project_id: None,
            error: Some(error.into()),
            images_uploaded: None,
        }
    }
}

impl fmt::Display for ChatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "[{}]", self.project_id.as_deref().unwrap_or("default"))?;
            if let Some(count) = self.images_uploaded {
                write!(f, " [{} image(s) uploaded]", count)?;
            }
            write!(f, " {}", self.response.as_deref().unwrap_or(""))
        } else {
            write!(f, "[ERROR] {}", self.error.as_deref().unwrap_or("Unknown error"))
        }
    }
}

/// Wire shape of the gateway's `/chat` reply.
///
/// `status` is mandatory; a body without it violates the contract and is
/// rejected during deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatReply {
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub images_uploaded: Option<u32>,
}

/// Snapshot of gateway health at call time.
///
/// Fresh per call, never cached. A non-"running" `api_status` is valid data
/// for the caller to act on, not a client-side error.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusInfo {
    pub api_status: String,
    /// Remaining fields of the status body, passed through untouched.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// One project descriptor from `GET /projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub project_url: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Reply from `POST /reload`, passed through as the server sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct ReloadInfo {
    pub status: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_success() {
        let result = ChatResult {
            success: true,
            response: Some("AI is a field of computer science.".to_string()),
            project_id: Some("p1".to_string()),
            error: None,
            images_uploaded: None,
        };
        assert_eq!(result.to_string(), "[p1] AI is a field of computer science.");
    }

    #[test]
    fn test_display_success_with_images() {
        let result = ChatResult {
            success: true,
            response: Some("Two cats.".to_string()),
            project_id: Some("p1".to_string()),
            error: None,
            images_uploaded: Some(2),
        };
        assert_eq!(result.to_string(), "[p1] [2 image(s) uploaded] Two cats.");
    }

    #[test]
    fn test_display_failure() {
        let result = ChatResult::failure("NOT_LOGGED_IN");
        assert_eq!(result.to_string(), "[ERROR] NOT_LOGGED_IN");
    }

    #[test]
    fn test_status_info_passes_extra_fields_through() {
        let body = r#"{"api_status":"running","browser_engine":"ready","context_pool":{"total_contexts":3}}"#;
        let info: StatusInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.api_status, "running");
        assert_eq!(info.details["browser_engine"], "ready");
        assert_eq!(info.details["context_pool"]["total_contexts"], 3);
    }

    #[test]
    fn test_chat_reply_requires_status() {
        let err = serde_json::from_str::<ChatReply>(r#"{"response":"hi"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_project_keeps_extra_descriptor_fields() {
        let body = r#"{"project_id":"p1","project_url":"https://x/chat/p1","last_used":"2026-01-01"}"#;
        let project: Project = serde_json::from_str(body).unwrap();
        assert_eq!(project.project_id, "p1");
        assert_eq!(project.details["last_used"], "2026-01-01");
    }
}
