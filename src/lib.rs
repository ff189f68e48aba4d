//! AnythingLLM MCP Server Library
//!
//! This crate exposes the AnythingLLM REST API as a set of Model Context
//! Protocol (MCP) tools, so MCP clients can manage workspaces, chat, upload
//! documents, search and inspect the system without issuing HTTP calls.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the AnythingLLM API client,
//!   the MCP server handler and the transports
//! - **domains**: MCP-facing functionality
//!   - **tools**: one tool per AnythingLLM endpoint
//!   - **resources**: read-only server information
//!
//! # Example
//!
//! ```rust,no_run
//! use anythingllm_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
