use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::infra::config::Config;
use crate::infra::runtime::mcp_transport;

/// HTTP app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app(cfg: &Config) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(news_factory(cfg), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Factory handed to the MCP transports: one handler + tool router pair
/// per session, all sharing the same read-only credential and tables.
pub fn news_factory(
    cfg: &Config,
) -> impl Fn() -> (crate::tools::news::NewsSvc, crate::tools::news::NewsRouter)
       + Send
       + Sync
       + Clone
       + 'static {
    let cfg = cfg.clone();
    move || {
        let client = crate::clients::gnews::GnewsClient::from_config(&cfg);
        let handler = crate::tools::news::NewsSvc::new(Arc::new(client));
        let tools = crate::tools::news::NewsSvc::router();
        (handler, tools)
    }
}
