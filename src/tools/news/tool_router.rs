//! MCP surface of the gateway: two tools, three resources, one prompt.
//!
//! The tools return **plain JSON** envelopes (`{"success": ...}`) via
//! `structuredContent`, avoiding schemars drift. Validation failures are
//! thrown to the protocol layer as invalid-params; network and provider
//! failures are folded into the envelope. Do not unify the two channels.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use rmcp::{
    handler::server::tool::{Parameters, ToolRouter},
    model::{
        AnnotateAble, GetPromptRequestParam, GetPromptResult, Implementation, JsonObject,
        ListPromptsResult,
        ListResourcesResult, PaginatedRequestParam, Prompt, PromptArgument, PromptMessage,
        PromptMessageRole, RawResource, ReadResourceRequestParam, ReadResourceResult, Resource,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ErrorData as McpError, ServerHandler,
};

use crate::catalog;
use crate::clients::gnews::{Endpoint, NewsApi};
use crate::domain::envelope::{self, Echo};
use crate::domain::{HeadlinesRequest, SearchRequest};

pub const PROMPT_NAME: &str = "create_news_search_prompt";

/// The MCP server handler. Holds whichever `NewsApi` implementation it is
/// given from boot (the real GNews client, or a double in tests).
#[derive(Clone)]
pub struct NewsSvc {
    api: Arc<dyn NewsApi>,
}

impl NewsSvc {
    pub fn new(api: Arc<dyn NewsApi>) -> Self {
        Self { api }
    }
}

#[rmcp::tool_router]
impl NewsSvc {
    #[rmcp::tool(
        name = "search_news",
        description = "Search for news articles using keywords. Supports AND/OR/NOT operators and quoted phrases; filters by language, country, date range; sorts by publishedAt or relevance. Returns {\"success\": ..., \"articles\": [...]}."
    )]
    async fn search_news(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<JsonValue>, McpError> {
        tracing::debug!(params = ?params.0, "search_news invoked");
        let req: SearchRequest = serde_json::from_value(JsonValue::Object(params.0))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        req.validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let query = req.wire_query();
        let out = match self.api.fetch(Endpoint::Search, &query).await {
            Ok(body) => envelope::success(Echo::Query(&req.q), &body, &query),
            Err(err) => envelope::failure(Echo::Query(&req.q), &err, &query),
        };
        Ok(rmcp::Json(out))
    }

    #[rmcp::tool(
        name = "get_top_headlines",
        description = "Get trending news articles for a category (general, world, nation, business, technology, entertainment, sports, science, health). Returns {\"success\": ..., \"articles\": [...]}."
    )]
    async fn get_top_headlines(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<JsonValue>, McpError> {
        tracing::debug!(params = ?params.0, "get_top_headlines invoked");
        let req: HeadlinesRequest = serde_json::from_value(JsonValue::Object(params.0))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        req.validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let query = req.wire_query();
        let out = match self.api.fetch(Endpoint::TopHeadlines, &query).await {
            Ok(body) => envelope::success(Echo::Category(&req.category), &body, &query),
            Err(err) => envelope::failure(Echo::Category(&req.category), &err, &query),
        };
        Ok(rmcp::Json(out))
    }
}

pub type NewsRouter = ToolRouter<NewsSvc>;

impl NewsSvc {
    pub fn router() -> NewsRouter {
        Self::tool_router()
    }
}

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(uri, name.to_owned());
    raw.description = Some(description.to_owned());
    raw.mime_type = Some("text/plain".to_owned());
    raw.no_annotation()
}

impl ServerHandler for NewsSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "gnews-mcp-gateway".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "A Model Context Protocol server for accessing the GNews API. \
                 Provides tools to search news articles and get top headlines."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                resource(
                    catalog::URI_SUPPORTED_LANGUAGES,
                    "supported-languages",
                    "Languages accepted by the 'lang' parameter",
                ),
                resource(
                    catalog::URI_SUPPORTED_COUNTRIES,
                    "supported-countries",
                    "Countries accepted by the 'country' parameter",
                ),
                resource(
                    catalog::URI_QUERY_SYNTAX,
                    "query-syntax",
                    "Query syntax guide for search_news",
                ),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let text = match request.uri.as_str() {
            catalog::URI_SUPPORTED_LANGUAGES => catalog::supported_languages_listing(),
            catalog::URI_SUPPORTED_COUNTRIES => catalog::supported_countries_listing(),
            catalog::URI_QUERY_SYNTAX => catalog::query_syntax_guide().to_owned(),
            other => {
                return Err(McpError::resource_not_found(
                    format!("unknown resource: {other}"),
                    None,
                ))
            }
        };
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![Prompt::new(
                PROMPT_NAME,
                Some("Create a comprehensive news search prompt for a specific topic"),
                Some(vec![
                    PromptArgument {
                        name: "topic".into(),
                        description: Some("Topic to research".into()),
                        required: Some(true),
                    },
                    PromptArgument {
                        name: "days_back".into(),
                        description: Some("How many days of coverage to consider (default 7)".into()),
                        required: Some(false),
                    },
                ]),
            )],
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        if request.name != PROMPT_NAME {
            return Err(McpError::invalid_params(
                format!("unknown prompt: {}", request.name),
                None,
            ));
        }
        let args = request.arguments.unwrap_or_default();
        let topic = args
            .get("topic")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("missing required argument: topic", None))?;
        // Clients pass prompt arguments as strings; accept a bare number too.
        let days_back = match args.get("days_back") {
            None => 7,
            Some(v) => v
                .as_u64()
                .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
                .map(|n| n as u32)
                .ok_or_else(|| {
                    McpError::invalid_params("days_back must be a positive integer", None)
                })?,
        };

        Ok(GetPromptResult {
            description: Some(format!("News research plan for \"{topic}\"")),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                catalog::news_search_prompt(topic, days_back),
            )],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::NewsError;
    use crate::domain::request::WireQuery;
    use serde_json::json;

    /// Backend double returning a canned outcome without any network.
    struct StubApi {
        outcome: Result<JsonValue, fn() -> NewsError>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl StubApi {
        fn ok(body: JsonValue) -> Self {
            Self {
                outcome: Ok(body),
                calls: Default::default(),
            }
        }

        fn err(make: fn() -> NewsError) -> Self {
            Self {
                outcome: Err(make),
                calls: Default::default(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl NewsApi for StubApi {
        async fn fetch(
            &self,
            _endpoint: Endpoint,
            _query: &WireQuery,
        ) -> Result<JsonValue, NewsError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            match &self.outcome {
                Ok(v) => Ok(v.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn args(v: JsonValue) -> Parameters<JsonObject> {
        Parameters(v.as_object().unwrap().clone())
    }

    #[tokio::test]
    async fn search_success_wraps_provider_body() {
        let api = Arc::new(StubApi::ok(json!({
            "totalArticles": 3,
            "articles": [{"t": 1}, {"t": 2}, {"t": 3}],
        })));
        let svc = NewsSvc::new(api.clone());
        let rmcp::Json(out) = svc
            .search_news(args(json!({"q": "Apple iPhone", "lang": "en", "max_articles": 5})))
            .await
            .unwrap();
        assert_eq!(out["success"], json!(true));
        assert_eq!(out["query"], json!("Apple iPhone"));
        assert_eq!(out["totalArticles"], json!(3));
        assert_eq!(out["articles"].as_array().unwrap().len(), 3);
        let used = out["parameters_used"].as_object().unwrap();
        assert_eq!(used["q"], json!("Apple iPhone"));
        assert_eq!(used["lang"], json!("en"));
        assert_eq!(used["max"], json!(5));
        assert_eq!(used["sortby"], json!("publishedAt"));
        assert_eq!(used["page"], json!(1));
        assert!(!used.contains_key("apikey"));
        assert!(!used.contains_key("max_articles"));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn bad_language_is_invalid_params_and_never_calls_backend() {
        let api = Arc::new(StubApi::ok(json!({})));
        let svc = NewsSvc::new(api.clone());
        let err = svc
            .search_news(args(json!({"q": "x", "lang": "xx"})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("Unsupported language 'xx'"));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn out_of_range_max_articles_is_rejected_before_any_request() {
        let api = Arc::new(StubApi::ok(json!({})));
        let svc = NewsSvc::new(api.clone());
        for bad in [0, 101] {
            let err = svc
                .search_news(args(json!({"q": "x", "max_articles": bad})))
                .await
                .err()
                .unwrap();
            assert_eq!(err.code.0, -32602);
            assert!(err.message.contains("between 1 and 100"));
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn missing_q_is_invalid_params() {
        let svc = NewsSvc::new(Arc::new(StubApi::ok(json!({}))));
        let err = svc
            .search_news(args(json!({"lang": "en"})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("q"));
    }

    #[tokio::test]
    async fn provider_failure_becomes_success_false_envelope() {
        let svc = NewsSvc::new(Arc::new(StubApi::err(|| {
            NewsError::Provider("403 - [\"invalid key\"]".into())
        })));
        let rmcp::Json(out) = svc.search_news(args(json!({"q": "x"}))).await.unwrap();
        assert_eq!(out["success"], json!(false));
        assert!(out["error"].as_str().unwrap().contains("invalid key"));
        assert_eq!(out["query"], json!("x"));
        assert!(out["parameters_used"].is_object());
    }

    #[tokio::test]
    async fn network_failure_keeps_parameters_used_populated() {
        let svc = NewsSvc::new(Arc::new(StubApi::err(|| {
            NewsError::Network("connection reset".into())
        })));
        let rmcp::Json(out) = svc
            .get_top_headlines(args(json!({"category": "technology", "country": "us"})))
            .await
            .unwrap();
        assert_eq!(out["success"], json!(false));
        assert!(out["error"].as_str().unwrap().contains("Network error"));
        let used = out["parameters_used"].as_object().unwrap();
        assert_eq!(used["category"], json!("technology"));
        assert_eq!(used["country"], json!("us"));
        assert_eq!(used["max"], json!(10));
        assert_eq!(used["page"], json!(1));
    }

    #[tokio::test]
    async fn headlines_default_category_is_echoed() {
        let svc = NewsSvc::new(Arc::new(StubApi::ok(json!({"totalArticles": 0}))));
        let rmcp::Json(out) = svc.get_top_headlines(args(json!({}))).await.unwrap();
        assert_eq!(out["category"], json!("general"));
        assert_eq!(out["articles"], json!([]));
    }

    #[tokio::test]
    async fn bad_category_is_invalid_params() {
        let api = Arc::new(StubApi::ok(json!({})));
        let svc = NewsSvc::new(api.clone());
        let err = svc
            .get_top_headlines(args(json!({"category": "finance"})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("Unsupported category"));
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn tool_router_exposes_both_tools() {
        let names: Vec<String> = NewsSvc::router()
            .into_iter()
            .map(|r| r.name().to_string())
            .collect();
        assert!(names.iter().any(|n| n == "search_news"), "got: {names:?}");
        assert!(names.iter().any(|n| n == "get_top_headlines"), "got: {names:?}");
    }
}
