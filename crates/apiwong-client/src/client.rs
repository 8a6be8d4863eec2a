use crate::config::Config;
use crate::envelope;
use crate::error::{ApiwongError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde_json::Value;

/// Per-call options for [`ApiwongClient::request`].
///
/// Defaults: GET, no body, no query parameters, the client-level token.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub body: Option<Value>,
    pub token: Option<String>,
    pub params: Vec<(String, Value)>,
}

impl RequestOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Token for this call only, overriding the client-level token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a query parameter. Null and empty-string values are dropped when
    /// the URL is built; everything else is stringified.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiwongClient {
    config: Config,
    http: Client,
}

impl Default for ApiwongClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiwongClient {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Build a client whose base URL comes from `APIWONG_BASE_URL`.
    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Replace the client-level token, e.g. after a login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = Some(token.into());
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    /// Issue one HTTP call against `base_url + path` and normalize the
    /// response.
    ///
    /// The request always carries `Content-Type: application/json`, plus
    /// `Authorization: Bearer <token>` when a token is available. The body,
    /// when set, is sent as JSON. The response body is parsed as JSON on a
    /// best-effort basis and run through the envelope rules; see
    /// [`envelope::normalize`] for the success/failure contract.
    ///
    /// No retries, no caching: every call maps to exactly one outbound
    /// request, and concurrent calls are fully independent.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = build_url(&self.config.base_url, path, &options.params)?;
        let method = options.method.unwrap_or(Method::GET);

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = options.token.as_deref().or(self.config.token.as_deref()) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(ApiwongError::from)?;
        let status = resp.status();
        let text = resp.text().await.map_err(ApiwongError::from)?;

        // An unparsable body is treated as "no payload", never an error.
        let payload = serde_json::from_str(&text).ok();
        envelope::normalize(status, payload)
    }
}

fn build_url(base: &str, path: &str, params: &[(String, Value)]) -> Result<Url> {
    let joined = format!("{}{}", base.trim_end_matches('/'), path);
    let mut url = Url::parse(&joined)
        .map_err(|e| ApiwongError::Config(format!("invalid url {joined}: {e}")))?;

    let pairs: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key.as_str(), v)))
        .collect();
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
