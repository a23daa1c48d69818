//! Core query builder/executor for sales-mcp.
//!
//! This crate owns the profit-change analytics: the closed set of profit
//! expressions, period granularity and matching, validated query assembly,
//! and the Postgres store that executes the generated statement.

pub mod period;
pub mod profit;
pub mod query;
pub mod store;
