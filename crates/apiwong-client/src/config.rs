use std::env;

/// Base URL used when neither the environment nor the caller provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable consulted by [`Config::from_env`].
pub const BASE_URL_ENV: &str = "APIWONG_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Read the base URL from `APIWONG_BASE_URL`, falling back to the default.
    ///
    /// The value is captured once here; the resulting config is immutable for
    /// the lifetime of any client built from it.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            token: None,
        }
    }

    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
