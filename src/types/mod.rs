//! Core type definitions: outgoing payloads and normalized results.

pub mod request;
pub mod result;

pub use request::{encode_image, ChatRequest};
pub use result::{ChatResult, Project, ReloadInfo, StatusInfo};
