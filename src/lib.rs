//! # ai-gateway-client
//!
//! Async client for an AI gateway HTTP API: send a text prompt, optionally
//! pick which backend **project** answers it, and get back one normalized
//! result - without knowing about the authentication, browser sessions, or
//! timeouts the gateway manages server-side.
//!
//! ## Core Philosophy
//!
//! - **One call, one outcome**: every operation is a single HTTP exchange
//!   under a fixed deadline. No retries, no streaming, no partial state.
//! - **Business outcomes are data**: a failed chat, a server that reports
//!   itself unhealthy - these come back as values. Only contract violations
//!   and local misuse surface as [`Error`].
//! - **Field presence is meaningful**: the gateway distinguishes "use the
//!   default project" from "use this project" by whether `project_url` is
//!   present in the payload, so absent fields are omitted, never null.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_gateway_client::ChatClient;
//!
//! #[tokio::main]
//! async fn main() -> ai_gateway_client::Result<()> {
//!     let client = ChatClient::builder()
//!         .base_url("http://vm-server:8000")
//!         .build()
//!         .await?;
//!
//!     let result = client.chat("What is artificial intelligence?", None).await?;
//!     if result.success {
//!         println!("{}", result.response.unwrap());
//!     } else {
//!         eprintln!("chat failed: {}", result.error.unwrap());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Chat client, builder, and request validation |
//! | [`transport`] | HTTP request/response cycle and outcome classification |
//! | [`types`] | Outgoing payloads and normalized result types |
//! | [`config`] | Immutable client configuration and default deadlines |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{quick_chat, ChatClient, ChatClientBuilder};
pub use config::ClientConfig;
pub use types::request::{encode_image, ChatRequest};
pub use types::result::{ChatResult, Project, ReloadInfo, StatusInfo};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
