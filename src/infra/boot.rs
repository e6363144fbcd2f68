use std::net::SocketAddr;

use crate::infra::config::Config;

/// Load config and serve. A missing API key aborts here, before any
/// transport is bound.
pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env()?;
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        base_url = %cfg.base_url,
        "BOOT gnews-mcp-gateway"
    );

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = crate::infra::http_app::news_factory(&cfg);
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = crate::infra::http_app::build_app(&cfg);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
