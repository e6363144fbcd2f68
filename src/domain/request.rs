//! Tool request structures: validation and wire-query building.
//!
//! Requests deserialize straight from the tool-call arguments object.
//! Fields with a documented default are materialized at deserialization
//! time (`max_articles`, `sortby`, `page`, `category`), so they always
//! reach the wire; the genuinely optional fields stay `Option` and are
//! omitted from the wire when unset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::domain::error::NewsError;
use crate::domain::tables;

/// Flat key/value set sent to the provider, before credential injection.
///
/// The credential is attached by the news client at send time and never
/// appears here, so this map is safe to echo back as `parameters_used`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireQuery(Map<String, JsonValue>);

impl WireQuery {
    fn put_str(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), JsonValue::from(value));
    }

    fn put_u32(&mut self, key: &str, value: u32) {
        self.0.insert(key.to_owned(), JsonValue::from(value));
    }

    /// Query pairs for the outgoing GET. Strings pass through unquoted.
    pub fn as_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| {
                let s = match v {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), s)
            })
            .collect()
    }

    /// JSON object form, echoed in the envelope as `parameters_used`.
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.0.clone())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "publishedAt")]
    PublishedAt,
    #[serde(rename = "relevance")]
    Relevance,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevance => "relevance",
        }
    }
}

fn default_max_articles() -> u32 {
    10
}

fn default_sortby() -> SortBy {
    SortBy::PublishedAt
}

fn default_page() -> u32 {
    1
}

fn default_category() -> String {
    "general".to_owned()
}

/// Arguments for the `search_news` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub q: String,
    pub lang: Option<String>,
    pub country: Option<String>,
    #[serde(default = "default_max_articles")]
    pub max_articles: u32,
    pub search_in: Option<String>,
    pub nullable: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    #[serde(default = "default_sortby")]
    pub sortby: SortBy,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl SearchRequest {
    /// Domain checks, in the order their messages should surface.
    pub fn validate(&self) -> Result<(), NewsError> {
        check_lang(self.lang.as_deref())?;
        check_country(self.country.as_deref())?;
        check_max_articles(self.max_articles)?;
        check_page(self.page)?;
        Ok(())
    }

    /// Translate to the provider's parameter names. No credential here.
    pub fn wire_query(&self) -> WireQuery {
        let mut wire = WireQuery::default();
        wire.put_str("q", &self.q);
        if let Some(lang) = &self.lang {
            wire.put_str("lang", lang);
        }
        if let Some(country) = &self.country {
            wire.put_str("country", country);
        }
        wire.put_u32("max", self.max_articles);
        if let Some(search_in) = &self.search_in {
            wire.put_str("in", search_in);
        }
        if let Some(nullable) = &self.nullable {
            wire.put_str("nullable", nullable);
        }
        if let Some(from) = &self.date_from {
            wire.put_str("from", from);
        }
        if let Some(to) = &self.date_to {
            wire.put_str("to", to);
        }
        wire.put_str("sortby", self.sortby.as_str());
        wire.put_u32("page", self.page);
        wire
    }
}

/// Arguments for the `get_top_headlines` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlinesRequest {
    #[serde(default = "default_category")]
    pub category: String,
    pub lang: Option<String>,
    pub country: Option<String>,
    #[serde(default = "default_max_articles")]
    pub max_articles: u32,
    pub nullable: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl HeadlinesRequest {
    pub fn validate(&self) -> Result<(), NewsError> {
        check_lang(self.lang.as_deref())?;
        check_country(self.country.as_deref())?;
        if !tables::is_category(&self.category) {
            return Err(NewsError::Validation(format!(
                "Unsupported category '{}'. Supported categories: {}",
                self.category,
                tables::category_names()
            )));
        }
        check_max_articles(self.max_articles)?;
        check_page(self.page)?;
        Ok(())
    }

    pub fn wire_query(&self) -> WireQuery {
        let mut wire = WireQuery::default();
        wire.put_str("category", &self.category);
        if let Some(lang) = &self.lang {
            wire.put_str("lang", lang);
        }
        if let Some(country) = &self.country {
            wire.put_str("country", country);
        }
        wire.put_u32("max", self.max_articles);
        if let Some(nullable) = &self.nullable {
            wire.put_str("nullable", nullable);
        }
        if let Some(from) = &self.date_from {
            wire.put_str("from", from);
        }
        if let Some(to) = &self.date_to {
            wire.put_str("to", to);
        }
        if let Some(q) = &self.q {
            wire.put_str("q", q);
        }
        wire.put_u32("page", self.page);
        wire
    }
}

fn check_lang(lang: Option<&str>) -> Result<(), NewsError> {
    if let Some(lang) = lang {
        if !tables::is_supported_language(lang) {
            return Err(NewsError::Validation(format!(
                "Unsupported language '{lang}'. Supported languages: {}",
                tables::language_codes()
            )));
        }
    }
    Ok(())
}

fn check_country(country: Option<&str>) -> Result<(), NewsError> {
    if let Some(country) = country {
        if !tables::is_supported_country(country) {
            return Err(NewsError::Validation(format!(
                "Unsupported country '{country}'. Supported countries: {}",
                tables::country_codes()
            )));
        }
    }
    Ok(())
}

fn check_max_articles(n: u32) -> Result<(), NewsError> {
    if !(1..=100).contains(&n) {
        return Err(NewsError::Validation(
            "Max articles must be between 1 and 100".into(),
        ));
    }
    Ok(())
}

fn check_page(n: u32) -> Result<(), NewsError> {
    if n < 1 {
        return Err(NewsError::Validation("Page must be 1 or greater".into()));
    }
    Ok(())
}
