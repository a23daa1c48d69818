//! MCP server implementation for sales-mcp.
//!
//! This crate wires the profit-change analytics into rmcp tool handlers and
//! exposes the MCP-facing server runners.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use sales_core::store::SalesStore;

const SERVER_INSTRUCTIONS: &str = r"sales-mcp exposes profit-change analytics over the sales_data warehouse.

Tools:
- `get_profit_change` compares profit between two periods, grouped by segment
  columns, ranked by magnitude of change, with each group's percentage share
  of the total change.
- `health` returns `ok`.

Notes:
- `profit_type` is one of `middle_man`, `seller`, `overall` (overall is the
  sum of the other two layers).
- `time_values` is exactly two period strings, baseline first. Supported
  shapes: `['2022/02', '2022/03']` (year/month), `['2022 Q2', '2022 Q3']`
  (year/quarter), `['2022 H1', '2022 H2']` (year/half), `['2022', '2023']`
  (bare years, matching every period of the year).
- `time_column` (`ym`, `yq`, `yh`) is optional; when omitted it is inferred
  from the first time value.
- `group_by` defaults to `['bu', 'product', 'customer']`; entries must be
  known segment columns.";

/// MCP server wrapper around the warehouse store and tool routers.
#[derive(Clone)]
pub struct SalesMcp {
    tool_router: ToolRouter<Self>,
    store: Arc<SalesStore>,
}

impl SalesMcp {
    /// Creates a new server using a store by value.
    #[must_use]
    pub fn new(store: SalesStore) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Creates a new server using a shared store handle.
    #[must_use]
    pub fn with_store(store: Arc<SalesStore>) -> Self {
        let tool_router = Self::tool_router_core() + Self::tool_router_profit();
        Self { tool_router, store }
    }

    pub(crate) fn store(&self) -> &SalesStore {
        &self.store
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl SalesMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for SalesMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
