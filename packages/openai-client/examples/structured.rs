//! Structured output example: ask for descriptive phrases as a typed record.

use std::time::Duration;

use openai_client::OpenAIClient;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Phrases {
    /// Adjectives describing how the space feels.
    size: Vec<String>,
    /// Who would enjoy living here.
    occupants: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = OpenAIClient::from_env()?.with_timeout(Duration::from_secs(60));

    let phrases: Phrases = client
        .extract(
            "gpt-4o",
            "You generate short real estate marketing phrases.",
            "A 35 square meter one-bedroom flat with a balcony.",
        )
        .await?;

    println!("{phrases:#?}");
    Ok(())
}
