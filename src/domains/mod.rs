//! Domains module containing business logic organized by bounded contexts.
//!
//! `tools` exposes the AnythingLLM API as MCP tools, `resources` exposes
//! read-only information about the running server.

pub mod resources;
pub mod tools;
