//! Tools domain module.
//!
//! Every tool maps one AnythingLLM endpoint to an MCP tool.
//!
//! ## Architecture
//!
//! - `definitions/` - tool implementations, grouped by API area
//! - `handlers.rs` - the `ApiTool` trait and the shared execution path
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - tool listing and HTTP dispatch
//! - `error.rs` - tool-layer error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `ApiTool` in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs`
//! 4. Register it in `registry.rs` (listing and HTTP dispatch)

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
