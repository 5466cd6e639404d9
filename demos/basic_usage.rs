//! Basic usage example
//!
//! Creates an agent, lists agents, looks one up and chats with it.
//!
//! The API key is read from the environment (or a `.env` file):
//! - LUXIQ_API_KEY (required)
//! - LUXIQ_API_URL (optional, defaults to the production API)
//!
//! Usage:
//!   LUXIQ_API_KEY="your_key" cargo run --example basic_usage

use luxiq_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sdk = LuxIqSdk::initialize(None)?;

    let agent = sdk
        .create_agent(
            &CreateAgentRequest::new("demo-bot")
                .description("Demo agent created by the Rust SDK")
                .personality("cheerful")
                .temperature(0.7),
        )
        .await?;
    println!("Created agent: {}", agent.name);

    for a in sdk.list_agents().await? {
        println!("- {} {}", a.name, a.str_field("description").unwrap_or_default());
    }

    match sdk.get_agent_by_name("demo-bot").await? {
        Some(found) => println!("Found: {:?}", found.field("id")),
        None => println!("demo-bot not found"),
    }

    let reply = sdk.chat_with_agent("demo-bot", "Hello! Who are you?").await?;
    println!("Reply:\n{}", reply);

    Ok(())
}
