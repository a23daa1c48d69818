//! Daemon entry point for the sales analytics MCP server.
//!
//! Loads configuration from the environment, builds the warehouse connection
//! pool, and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use std::sync::Arc;

use sales_core::store::SalesStore;
use sales_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::config::SalesConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr so the stdio transport keeps stdout to itself.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = SalesConfig::from_args()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    let store = Arc::new(SalesStore::new(pool));

    if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        if config.enable_stdio {
            let http_store = store.clone();
            tokio::spawn(async move {
                if let Err(err) = serve_streamable_http(http_store, http_config).await {
                    tracing::error!(%err, "streamable HTTP server exited");
                }
            });
        } else {
            return serve_streamable_http(store, http_config).await;
        }
    }
    serve_stdio(store).await
}
