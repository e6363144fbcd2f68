use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gnews-mcp-gateway")]
#[command(about = "GNews MCP Gateway - serves MCP by default, admin subcommands below")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and configuration summary
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Run a live search against the configured GNews API
    TestSearch {
        /// Search keywords
        #[arg(short, long, default_value = "technology")]
        query: String,
        /// Optional language code
        #[arg(short, long)]
        lang: Option<String>,
    },
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("configuration validation failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("status check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::TestSearch { query, lang } => match test_search(&query, lang).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("search test failed: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{url}/healthz"))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = crate::infra::config::Config::from_env()?;
    if !matches!(cfg.mode.as_str(), "server" | "stdio") {
        return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", cfg.mode).into());
    }
    if cfg.mode == "server" && cfg.port == 0 {
        return Err("PORT cannot be 0".into());
    }
    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{url}/healthz"))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;
    println!(
        "health: {}",
        if health_response.status().is_success() {
            "healthy"
        } else {
            "unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{url}/mcp"))
        .header("content-type", "application/json")
        .header("accept", "application/json, text/event-stream")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;
    match tools_response {
        Ok(resp) if resp.status().is_success() => println!("tools: available"),
        Ok(resp) => println!("tools: HTTP {}", resp.status()),
        Err(_) => println!("tools: unavailable"),
    }

    println!("\nconfiguration:");
    println!(
        "  mode: {}",
        std::env::var("MODE").unwrap_or_else(|_| "server".into())
    );
    println!(
        "  port: {}",
        std::env::var("PORT").unwrap_or_else(|_| "8080".into())
    );
    println!(
        "  log level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );
    // Report presence only; the key itself never gets printed.
    println!(
        "  gnews api key: {}",
        if std::env::var("GNEWS_API_KEY").is_ok() {
            "configured"
        } else {
            "not configured"
        }
    );
    Ok(())
}

async fn test_search(query: &str, lang: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    use crate::clients::gnews::{Endpoint, GnewsClient, NewsApi};

    let cfg = crate::infra::config::Config::from_env()?;
    let mut args = serde_json::json!({"q": query, "max_articles": 3});
    if let Some(lang) = lang {
        args["lang"] = serde_json::Value::String(lang);
    }
    let req: crate::domain::SearchRequest = serde_json::from_value(args)?;
    req.validate()?;

    let client = GnewsClient::from_config(&cfg);
    let body = client.fetch(Endpoint::Search, &req.wire_query()).await?;

    let total = body
        .get("totalArticles")
        .and_then(serde_json::Value::as_i64)
        .unwrap_or(0);
    println!("search for \"{query}\": {total} articles");
    if let Some(articles) = body.get("articles").and_then(|a| a.as_array()) {
        for (i, article) in articles.iter().enumerate() {
            let title = article.get("title").and_then(|t| t.as_str()).unwrap_or("?");
            println!("  {}. {}", i + 1, title);
        }
    }
    Ok(())
}
