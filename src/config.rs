use serde::Serialize;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REDIRECT_URL: &str = "https://example.com";

/// Process settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub firebase_api_key: Option<String>,
    pub firebase_auth_domain: Option<String>,
    pub login_redirect_url: String,
}

/// Public identity provider settings handed to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub api_key: String,
    pub auth_domain: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };
        Ok(Settings {
            port,
            firebase_api_key: lookup("FIREBASE_API_KEY"),
            firebase_auth_domain: lookup("FIREBASE_AUTH_DOMAIN"),
            login_redirect_url: lookup("LOGIN_REDIRECT_URL")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URL.to_owned()),
        })
    }

    /// `None` unless both firebase values are set and non-empty.
    pub fn public_config(&self) -> Option<PublicConfig> {
        let api_key = self.firebase_api_key.as_deref().filter(|v| !v.is_empty())?;
        let auth_domain = self
            .firebase_auth_domain
            .as_deref()
            .filter(|v| !v.is_empty())?;
        Some(PublicConfig {
            api_key: api_key.to_owned(),
            auth_domain: auth_domain.to_owned(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_PORT,
            firebase_api_key: None,
            firebase_auth_domain: None,
            login_redirect_url: DEFAULT_REDIRECT_URL.to_owned(),
        }
    }
}
