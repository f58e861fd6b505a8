//! Basic usage example for the gateway chat client.
//!
//! Point GATEWAY_URL at a running gateway instance:
//!   GATEWAY_URL=http://your-vm:8000 cargo run --example basic_usage

use ai_gateway_client::{quick_chat, ChatClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    let client = ChatClient::builder()
        .base_url(&base_url)
        .probe_connection(true)
        .build()
        .await?;

    // Gateway health.
    let status = client.status().await?;
    println!("API status: {}", status.api_status);

    // Active projects.
    let projects = client.list_projects().await?;
    println!("Active projects ({}):", projects.len());
    for project in &projects {
        println!("  - {} ({})", project.project_id, project.project_url);
    }

    // Chat against the default project. A failed chat is a normal result,
    // not an error: inspect `success` before reading `response`.
    let result = client
        .chat("What is artificial intelligence? Be brief.", None)
        .await?;
    if result.success {
        println!("{}", result);
    } else {
        eprintln!("chat failed: {}", result.error.as_deref().unwrap_or("?"));
    }

    // Route the same question to a specific project.
    if let Some(project) = projects.first() {
        let routed = client
            .chat("What is Rust? Be brief.", Some(project.project_url.as_str()))
            .await?;
        println!("{}", routed);
    }

    // One-shot convenience.
    let answer = quick_chat(&base_url, "Hello! Keep it short.").await?;
    println!("quick_chat: {}", answer);

    Ok(())
}
