//! Account types for the `/auth` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user profile. Only `full_name` is interpreted; everything else the
/// server sends (`id`, `email`, ...) is kept as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub full_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// First whitespace-separated word of the display name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.full_name.split_whitespace().next()
    }
}

/// Body of `POST /auth/register`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

fn bearer() -> String {
    "bearer".to_string()
}
