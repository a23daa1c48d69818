//! Warehouse schema constants and result models for sales-mcp.
//!
//! This crate defines the canonical shape of the `sales_data` warehouse table
//! shared by the query builder, the Postgres store, and the MCP surface.

pub mod models;
pub mod schema;

pub use models::*;
