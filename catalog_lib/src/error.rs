//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding storage, serialization, and input validation failures.
#[derive(Debug)]
pub enum CatalogError {
    /// An error from the underlying API client.
    Api(catalog_api::Error),
    /// Reading or writing the session store failed.
    Storage(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl CatalogError {
    /// Text suitable for showing to the user. API failures show the server
    /// message without a prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.message(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<catalog_api::Error> for CatalogError {
    fn from(e: catalog_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}
