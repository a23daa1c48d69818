//! MCP tool modules.

pub mod profit;
