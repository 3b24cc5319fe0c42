//! Single-product lookup by identifier.

use catalog_api::Client;
use serde_json::Value;

/// Shown when the lookup is attempted without an identifier.
pub const ID_PROMPT: &str = "Enter a product ID.";

/// Result of [`search_by_id`].
#[derive(Clone, Debug, PartialEq)]
pub enum DetailOutcome {
    /// No identifier was given; no request was made.
    Prompt,
    /// The record as the server sent it, unknown fields included.
    Found(Value),
    Failed(String),
}

impl DetailOutcome {
    /// The text to show for this outcome. Found records are pretty-printed JSON.
    pub fn message(&self) -> String {
        match self {
            DetailOutcome::Prompt => ID_PROMPT.to_string(),
            DetailOutcome::Found(record) => serde_json::to_string_pretty(record)
                .unwrap_or_else(|e| format!("Error: {}", e)),
            DetailOutcome::Failed(message) => format!("Error: {}", message),
        }
    }
}

/// Looks up one product. Blank `raw_id` short-circuits to [`DetailOutcome::Prompt`].
pub async fn search_by_id(client: &Client, raw_id: &str) -> DetailOutcome {
    let id = raw_id.trim();
    if id.is_empty() {
        return DetailOutcome::Prompt;
    }
    match client.get_product::<Value>(id).await {
        Ok(record) => DetailOutcome::Found(record),
        Err(e) => {
            tracing::debug!("Lookup of product {} failed: {}", id, e);
            DetailOutcome::Failed(e.message())
        }
    }
}
