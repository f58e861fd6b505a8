//! Client configuration.

use std::time::Duration;

/// Default deadline for `POST /chat`.
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(180);

/// Default deadline for the control-plane endpoints (`/status`, `/projects`).
pub const DEFAULT_CONTROL_TIMEOUT: Duration = Duration::from_secs(5);

/// Default deadline for `POST /reload`.
pub const DEFAULT_RELOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration for a [`ChatClient`](crate::ChatClient).
///
/// Set once at construction and shared by every call for the lifetime of
/// the client; no per-call mutable state is retained.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway API (e.g., "http://vm-server:8000").
    /// A trailing slash is trimmed at construction.
    pub base_url: String,
    /// Deadline for `POST /chat`. One deadline covers the whole exchange,
    /// connection establishment included; generation dominates latency, so
    /// the default is generous.
    pub timeout: Duration,
    /// Deadline for `GET /status` and `GET /projects`. These answer from
    /// server memory, so a short deadline catches a dead gateway quickly.
    pub control_timeout: Duration,
    /// Deadline for `POST /reload`, which restarts the gateway's backing
    /// engine and takes longer than the other control operations.
    pub reload_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_CHAT_TIMEOUT,
            control_timeout: DEFAULT_CONTROL_TIMEOUT,
            reload_timeout: DEFAULT_RELOAD_TIMEOUT,
        }
    }
}
