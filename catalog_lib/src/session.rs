//! Read-through accessor for the stored login session.

use catalog_api::types::User;

use crate::error::CatalogError;
use crate::storage::SessionStorage;

/// Storage key of the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// The client session: a bearer token and the cached profile of its owner.
///
/// Nothing is cached here; every accessor reads the underlying storage.
pub struct Session<S> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored token, or an empty string when there is none.
    pub fn get_token(&self) -> String {
        self.storage.get(ACCESS_TOKEN_KEY).unwrap_or_default()
    }

    /// The stored user record. A missing or malformed record is `None`.
    pub fn get_user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("Stored user record is not valid JSON: {}", e);
                None
            }
        }
    }

    /// Records a successful login.
    pub fn store(&self, token: &str, user: &User) -> Result<(), CatalogError> {
        self.storage.set(ACCESS_TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &serde_json::to_string(user)?)?;
        Ok(())
    }

    /// First name of the logged-in user. `None` unless both a token and a
    /// named user are stored.
    pub fn logged_in_as(&self) -> Option<String> {
        if self.get_token().is_empty() {
            return None;
        }
        self.get_user()
            .and_then(|user| user.first_name().map(str::to_string))
    }

    /// Forgets the session. Every stored key goes, not only the two above.
    pub fn logout(&self) -> Result<(), CatalogError> {
        tracing::info!("Clearing stored session");
        self.storage.clear()
    }
}
