use thiserror::Error;

pub const DEFAULT_GNEWS_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GNEWS_API_KEY environment variable is required. \
         Get your free API key from https://gnews.io/"
    )]
    MissingApiKey,
}

/// Process configuration, read once at startup. The API key is the only
/// required value; its absence is fatal before any request is served.
#[derive(Clone)]
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let api_key = std::env::var("GNEWS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url =
            std::env::var("GNEWS_BASE_URL").unwrap_or_else(|_| DEFAULT_GNEWS_BASE_URL.into());

        Ok(Self {
            mode,
            port,
            api_key,
            base_url,
        })
    }
}
