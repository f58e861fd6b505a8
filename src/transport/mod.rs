//! Network transport, independent of payload semantics.

pub mod http;

pub use http::{HttpTransport, ResponseBody, TransportError};
