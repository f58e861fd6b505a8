//! Client implementation and builder.

mod builder;
mod core;
mod validation;

pub use builder::ChatClientBuilder;
pub use core::ChatClient;

use crate::Result;

/// One-shot convenience: build a client, send a single prompt against the
/// default project, and return the response text (or the error message on
/// a server-reported failure).
pub async fn quick_chat(base_url: &str, prompt: &str) -> Result<String> {
    let client = ChatClient::builder().base_url(base_url).build().await?;
    let result = client.chat(prompt, None).await?;
    if result.success {
        Ok(result.response.unwrap_or_default())
    } else {
        Ok(format!(
            "Error: {}",
            result.error.unwrap_or_else(|| "Unknown error".to_string())
        ))
    }
}
