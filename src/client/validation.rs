//! Local request validation.
//!
//! Validation failures never reach the network; the caller can always
//! recover by correcting the input.

use crate::{Error, ErrorContext, Result};
use url::Url;

pub(crate) fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(Error::invalid_input_with_context(
            "prompt must be a non-empty string",
            ErrorContext::new()
                .with_field_path("request.prompt")
                .with_source("request_validator"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_project_url(raw: &str) -> Result<()> {
    let parsed = Url::parse(raw).map_err(|e| {
        Error::invalid_input_with_context(
            format!("project_url is not a well-formed absolute URL: {}", e),
            ErrorContext::new()
                .with_field_path("request.project_url")
                .with_details(raw.to_string())
                .with_source("request_validator"),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::invalid_input_with_context(
            format!("project_url must use http or https, got {}", parsed.scheme()),
            ErrorContext::new()
                .with_field_path("request.project_url")
                .with_source("request_validator"),
        ));
    }

    Ok(())
}
