//! Static catalogs: the three `gnews://` resources and the news-search
//! prompt. Pure functions of the reference tables and their inputs.

use std::fmt::Write;

use crate::domain::tables::{SUPPORTED_COUNTRIES, SUPPORTED_LANGUAGES};

pub const URI_SUPPORTED_LANGUAGES: &str = "gnews://supported-languages";
pub const URI_SUPPORTED_COUNTRIES: &str = "gnews://supported-countries";
pub const URI_QUERY_SYNTAX: &str = "gnews://query-syntax";

fn render_table(table: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (code, name) in table {
        let _ = writeln!(out, "  {code}: {name}");
    }
    out
}

/// `gnews://supported-languages` body.
pub fn supported_languages_listing() -> String {
    format!(
        "Supported Languages for GNews API:\n\n{}\nUsage: Use the 2-letter language code in the 'lang' parameter.\nExample: lang=\"en\" for English, lang=\"es\" for Spanish\n",
        render_table(SUPPORTED_LANGUAGES)
    )
}

/// `gnews://supported-countries` body.
pub fn supported_countries_listing() -> String {
    format!(
        "Supported Countries for GNews API:\n\n{}\nUsage: Use the 2-letter country code in the 'country' parameter.\nExample: country=\"us\" for United States, country=\"gb\" for United Kingdom\n",
        render_table(SUPPORTED_COUNTRIES)
    )
}

/// `gnews://query-syntax` body.
pub fn query_syntax_guide() -> &'static str {
    r#"GNews API Query Syntax Guide:

BASIC SEARCH:
- Simple keywords: Apple iPhone
- Space acts as AND operator: Apple iPhone = Apple AND iPhone

PHRASE SEARCH:
- Exact phrases: "Apple iPhone 15"
- Use quotes for exact keyword sequence

LOGICAL OPERATORS:
- AND: Apple AND iPhone (ensure both keywords appear)
- OR: Apple OR Microsoft (either keyword can appear)
- NOT: Apple NOT iPhone (exclude articles with "iPhone")

OPERATOR PRECEDENCE:
- OR has higher precedence than AND
- Use parentheses for clarity: (Apple AND iPhone) OR Microsoft

SPECIAL CHARACTERS:
- Must be quoted if used: "Hello!", "Left - Right", "Question?"

EXAMPLE QUERIES:
- Microsoft Windows 10
- Apple OR Microsoft
- Apple AND NOT iPhone
- (Windows 7) AND (Windows 10)
- "Apple iPhone 13" AND NOT "Apple iPhone 14"
- Intel AND (i7 OR i9)
- (Intel AND (i7 OR "i9-14900K")) AND NOT AMD AND NOT "i7-14700K"

IMPORTANT NOTES:
- Query must be URL-encoded when sent
- Cannot use special characters without quotes
- Logical operators are case-sensitive (use uppercase)
"#
}

/// Body of the `create_news_search_prompt` prompt. Deterministic string
/// substitution only.
pub fn news_search_prompt(topic: &str, days_back: u32) -> String {
    format!(
        r#"You are a news research assistant. Search for comprehensive news coverage about "{topic}" from the last {days_back} days.

Please use the search_news tool with the following approach:

1. First, search for recent articles about "{topic}" using:
   - Query: "{topic}"
   - Time range: from the last {days_back} days
   - Sort by: "publishedAt" for most recent news

2. Then, search for different perspectives using varied keywords:
   - Main topic variations
   - Related industry terms
   - Impact and analysis angles

3. Finally, search for any breaking news or developments using:
   - Query: "{topic}" AND ("breaking" OR "latest" OR "update")

After gathering the articles, please:
- Summarize the key developments
- Identify different perspectives or viewpoints
- Highlight any breaking news or recent updates
- Note any patterns or trends in the coverage

Use the get_top_headlines tool if this topic might be trending in specific categories like business, technology, or world news."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_listing_contains_every_code_and_usage_hint() {
        let text = supported_languages_listing();
        for (code, name) in SUPPORTED_LANGUAGES {
            assert!(text.contains(&format!("{code}: {name}")));
        }
        assert!(text.contains("'lang' parameter"));
    }

    #[test]
    fn country_listing_contains_every_code() {
        let text = supported_countries_listing();
        for (code, name) in SUPPORTED_COUNTRIES {
            assert!(text.contains(&format!("{code}: {name}")));
        }
        assert!(text.contains("country=\"us\""));
    }

    #[test]
    fn syntax_guide_mentions_operators() {
        let text = query_syntax_guide();
        for op in ["AND", "OR", "NOT", "OPERATOR PRECEDENCE"] {
            assert!(text.contains(op));
        }
    }

    #[test]
    fn prompt_substitutes_topic_and_days() {
        let text = news_search_prompt("quantum computing", 14);
        assert!(text.contains("\"quantum computing\""));
        assert!(text.contains("last 14 days"));
        assert!(text.contains("search_news"));
        assert!(text.contains("get_top_headlines"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(news_search_prompt("ai", 7), news_search_prompt("ai", 7));
    }
}
