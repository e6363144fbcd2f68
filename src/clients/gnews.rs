//! GNews v4 HTTP client.
//!
//! The client owns the credential: `apikey` is appended to the outgoing
//! query here and nowhere else, so it never flows through validation or
//! wire-query building, and every error message is scrubbed before it
//! leaves this module.

use reqwest::Client;
use serde_json::Value as JsonValue;

use crate::domain::error::NewsError;
use crate::domain::request::WireQuery;
use crate::infra::config::Config;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

/// The two GNews endpoints served by this gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    TopHeadlines,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::TopHeadlines => "top-headlines",
        }
    }
}

/// Backend abstraction so the tool router can run against a test double.
#[async_trait::async_trait]
pub trait NewsApi: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint, query: &WireQuery) -> Result<JsonValue, NewsError>;
}

#[derive(Clone)]
pub struct GnewsClient {
    base: String,
    api_key: String,
    http: Client,
}

impl GnewsClient {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            api_key: api_key.into(),
            http: make_http_client(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone())
    }

    /// The credential must never surface in an error, including transport
    /// errors that echo the request URL.
    fn redact(&self, msg: String) -> String {
        msg.replace(&self.api_key, "<redacted>")
    }
}

#[async_trait::async_trait]
impl NewsApi for GnewsClient {
    async fn fetch(&self, endpoint: Endpoint, query: &WireQuery) -> Result<JsonValue, NewsError> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), endpoint.as_str());
        let mut pairs = query.as_pairs();
        pairs.push(("apikey".to_owned(), self.api_key.clone()));

        tracing::debug!(endpoint = endpoint.as_str(), params = ?query, "gnews request");
        let (builder, _rid) = add_standard_headers(self.http.get(&url), None);
        let resp = builder
            .query(&pairs)
            .send()
            .await
            .map_err(|e| NewsError::Network(self.redact(e.to_string())))?;

        let status = resp.status();
        if status.as_u16() == 200 {
            let body: JsonValue = resp
                .json()
                .await
                .map_err(|e| NewsError::Provider(self.redact(format!(
                    "200 - unparseable response body: {e}"
                ))))?;
            let total = body
                .get("totalArticles")
                .and_then(JsonValue::as_i64)
                .unwrap_or(0);
            tracing::info!(endpoint = endpoint.as_str(), total_articles = total, "gnews ok");
            return Ok(body);
        }

        // Non-200: prefer the provider's structured `errors` field, fall
        // back to raw body text when it is not JSON.
        let text = resp.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<JsonValue>(&text) {
            Ok(parsed) => match parsed.get("errors") {
                Some(errors) => errors.to_string(),
                None => text,
            },
            Err(_) => text,
        };
        let msg = self.redact(format!("{} - {}", status.as_u16(), detail));
        tracing::warn!(endpoint = endpoint.as_str(), status = status.as_u16(), "gnews error");
        Err(NewsError::Provider(msg))
    }
}
