//! Server info resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::ToolRegistry;

/// Snapshot of the running server (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "anythingllm://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Name, version, AnythingLLM connection and available tools of this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}

/// Body of the server info resource. The API key itself is never included.
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub base_url: String,
    pub api_key_configured: bool,
    pub transport: String,
    pub tools: Vec<String>,
}

impl ServerInfoResource {
    /// Build the current snapshot from the configuration.
    pub fn snapshot(config: &Config) -> ServerInfo {
        ServerInfo {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            base_url: config.anythingllm.base_url.clone(),
            api_key_configured: config.anythingllm.has_api_key(),
            transport: config.transport.description(),
            tools: ToolRegistry::get_all_tools()
                .into_iter()
                .map(|t| t.name.to_string())
                .collect(),
        }
    }
}
