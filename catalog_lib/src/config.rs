//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use crate::currency::CurrencyFormat;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOCALE: &str = "pt-BR";
const SESSION_FILE_NAME: &str = ".catalog_session.json";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root URL of the catalog API (`CATALOG_BASE_URL`).
    pub base_url: String,
    /// Where the session is persisted (`CATALOG_SESSION_FILE`).
    pub session_file: PathBuf,
    /// Locale used to format prices (`CATALOG_LOCALE`).
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_file: default_session_file(None),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the environment.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_env()
    }

    /// Reads the environment, falling back to defaults for unset keys.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var(&lookup, "CATALOG_BASE_URL", DEFAULT_BASE_URL);
        let session_file = lookup("CATALOG_SESSION_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_session_file(lookup("HOME")));
        let locale = var(&lookup, "CATALOG_LOCALE", DEFAULT_LOCALE);
        Self {
            base_url,
            session_file,
            locale,
        }
    }

    /// Currency format for the configured locale, falling back to the default one.
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::for_locale(&self.locale).unwrap_or_else(|| {
            tracing::warn!(
                "Unsupported locale {}, using {}",
                self.locale,
                DEFAULT_LOCALE
            );
            CurrencyFormat::default()
        })
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => value.trim().to_string(),
        None => {
            tracing::debug!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

fn default_session_file(home: Option<String>) -> PathBuf {
    match home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(SESSION_FILE_NAME),
        _ => PathBuf::from(SESSION_FILE_NAME),
    }
}
