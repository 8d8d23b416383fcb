use base64::Engine;
use reqwest::{
    Client, Method, RequestBuilder, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::app_config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfluenceHttpError {
    #[error("invalid confluence client configuration: {0}")]
    InvalidConfiguration(String),

    #[error("confluence request failed: {0}")]
    Transport(String),

    #[error("confluence responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("confluence response could not be decoded: {0}")]
    Decode(String),
}

impl ConfluenceHttpError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfluenceHttpError::Status { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
    }
}

/// Shared client for the Confluence REST API. Paths are relative to the
/// configured base URL (for Atlassian Cloud this is `https://<site>/wiki`).
#[derive(Clone, Debug)]
pub struct ConfluenceHttpClient {
    client: Client,
    base_url: String,
}

impl ConfluenceHttpClient {
    pub fn new(config: &AppConfig) -> Result<Self, ConfluenceHttpError> {
        let mut authorization = HeaderValue::from_str(&authorization_value(config))
            .map_err(|e| {
                ConfluenceHttpError::InvalidConfiguration(format!("authorization header: {e}"))
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfluenceHttpError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.confluence_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ConfluenceHttpError> {
        let request = self.client.get(self.url(path)).query(query);
        self.execute(Method::GET, path, request).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ConfluenceHttpError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(Method::POST, path, request).await
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ConfluenceHttpError> {
        let request = self.client.put(self.url(path)).json(body);
        self.execute(Method::PUT, path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ConfluenceHttpError> {
        debug!(%method, path, "sending confluence request");

        let response = request
            .send()
            .await
            .map_err(|e| ConfluenceHttpError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%method, path, status = status.as_u16(), "confluence request was rejected");
            return Err(ConfluenceHttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ConfluenceHttpError::Decode(e.to_string()))
    }
}

fn authorization_value(config: &AppConfig) -> String {
    match &config.confluence_email {
        Some(email) => {
            let credentials = format!("{}:{}", email, config.confluence_api_token);
            format!(
                "Basic {}",
                base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes())
            )
        }
        None => format!("Bearer {}", config.confluence_api_token),
    }
}

/// Cursor for the following page, taken from the `_links.next` link of a v2
/// list response.
pub fn next_cursor(body: &Value) -> Option<String> {
    let next = body["_links"]["next"].as_str()?;
    let url = Url::parse("http://localhost/").ok()?.join(next).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "cursor")
        .map(|(_, value)| value.into_owned())
}
