//! Uniform result envelope shared by both tools.
//!
//! This is the only place where client failures become in-band data:
//! a `Network` or `Provider` error ends up as `success: false` with the
//! message in `error`, while the wire query built before the call is
//! still echoed so the caller can inspect what was attempted.

use serde_json::{json, Map, Value as JsonValue};

use crate::domain::error::NewsError;
use crate::domain::request::WireQuery;

/// The field a tool echoes back to identify the request.
#[derive(Debug, Clone, Copy)]
pub enum Echo<'a> {
    Query(&'a str),
    Category(&'a str),
}

impl Echo<'_> {
    fn key(&self) -> &'static str {
        match self {
            Echo::Query(_) => "query",
            Echo::Category(_) => "category",
        }
    }

    fn value(&self) -> &str {
        match self {
            Echo::Query(v) | Echo::Category(v) => v,
        }
    }
}

/// Wrap a 200 provider body. `totalArticles` and `articles` are pulled
/// through untouched; articles stay opaque provider records.
pub fn success(echo: Echo<'_>, body: &JsonValue, used: &WireQuery) -> JsonValue {
    let total = body
        .get("totalArticles")
        .and_then(JsonValue::as_i64)
        .unwrap_or(0);
    let articles = body.get("articles").cloned().unwrap_or_else(|| json!([]));

    let mut out = Map::new();
    out.insert("success".into(), json!(true));
    out.insert(echo.key().into(), json!(echo.value()));
    out.insert("totalArticles".into(), json!(total));
    out.insert("articles".into(), articles);
    out.insert("parameters_used".into(), used.to_value());
    JsonValue::Object(out)
}

/// Wrap a network or provider failure raised by the news client.
pub fn failure(echo: Echo<'_>, err: &NewsError, used: &WireQuery) -> JsonValue {
    let mut out = Map::new();
    out.insert("success".into(), json!(false));
    out.insert("error".into(), json!(err.to_string()));
    out.insert(echo.key().into(), json!(echo.value()));
    out.insert("parameters_used".into(), used.to_value());
    JsonValue::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_articles_through_unmodified() {
        let body = json!({
            "totalArticles": 3,
            "articles": [{"title": "a"}, {"title": "b"}, {"title": "c"}],
        });
        let out = success(Echo::Query("Apple"), &body, &WireQuery::default());
        assert_eq!(out["success"], json!(true));
        assert_eq!(out["query"], json!("Apple"));
        assert_eq!(out["totalArticles"], json!(3));
        assert_eq!(out["articles"], body["articles"]);
    }

    #[test]
    fn success_defaults_missing_fields() {
        let out = success(Echo::Category("general"), &json!({}), &WireQuery::default());
        assert_eq!(out["totalArticles"], json!(0));
        assert_eq!(out["articles"], json!([]));
        assert_eq!(out["category"], json!("general"));
    }

    #[test]
    fn failure_carries_error_message_and_parameters() {
        let err = NewsError::Provider("403 - [\"invalid key\"]".into());
        let out = failure(Echo::Query("x"), &err, &WireQuery::default());
        assert_eq!(out["success"], json!(false));
        assert!(out["error"].as_str().unwrap().contains("invalid key"));
        assert_eq!(out["query"], json!("x"));
        assert!(out["parameters_used"].is_object());
        assert!(out.get("totalArticles").is_none());
    }
}
