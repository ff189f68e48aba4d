//! Tool Registry - central listing and HTTP dispatch for all tools.

use std::sync::Arc;

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::*;
use super::handlers::{ApiTool, to_tool};
use crate::core::api::ApiClient;

#[cfg(feature = "http")]
use super::{ToolError, handlers::http_handler};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CheckAuthTool::NAME,
            ListWorkspacesTool::NAME,
            GetWorkspaceTool::NAME,
            CreateWorkspaceTool::NAME,
            UpdateWorkspaceTool::NAME,
            DeleteWorkspaceTool::NAME,
            ChatTool::NAME,
            GetChatHistoryTool::NAME,
            CreateThreadTool::NAME,
            DeleteThreadTool::NAME,
            ChatInThreadTool::NAME,
            GetThreadChatsTool::NAME,
            ListDocumentsTool::NAME,
            GetAcceptedFileTypesTool::NAME,
            UploadLinkTool::NAME,
            UploadRawTextTool::NAME,
            UpdateEmbeddingsTool::NAME,
            SearchTool::NAME,
            GetSystemSettingsTool::NAME,
            GetVectorCountTool::NAME,
            ExportChatsTool::NAME,
            ListEmbedsTool::NAME,
            ListModelsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<CheckAuthTool>(),
            to_tool::<ListWorkspacesTool>(),
            to_tool::<GetWorkspaceTool>(),
            to_tool::<CreateWorkspaceTool>(),
            to_tool::<UpdateWorkspaceTool>(),
            to_tool::<DeleteWorkspaceTool>(),
            to_tool::<ChatTool>(),
            to_tool::<GetChatHistoryTool>(),
            to_tool::<CreateThreadTool>(),
            to_tool::<DeleteThreadTool>(),
            to_tool::<ChatInThreadTool>(),
            to_tool::<GetThreadChatsTool>(),
            to_tool::<ListDocumentsTool>(),
            to_tool::<GetAcceptedFileTypesTool>(),
            to_tool::<UploadLinkTool>(),
            to_tool::<UploadRawTextTool>(),
            to_tool::<UpdateEmbeddingsTool>(),
            to_tool::<SearchTool>(),
            to_tool::<GetSystemSettingsTool>(),
            to_tool::<GetVectorCountTool>(),
            to_tool::<ExportChatsTool>(),
            to_tool::<ListEmbedsTool>(),
            to_tool::<ListModelsTool>(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let client = self.client.as_ref();
        match name {
            CheckAuthTool::NAME => http_handler::<CheckAuthTool>(arguments, client).await,
            ListWorkspacesTool::NAME => http_handler::<ListWorkspacesTool>(arguments, client).await,
            GetWorkspaceTool::NAME => http_handler::<GetWorkspaceTool>(arguments, client).await,
            CreateWorkspaceTool::NAME => {
                http_handler::<CreateWorkspaceTool>(arguments, client).await
            }
            UpdateWorkspaceTool::NAME => {
                http_handler::<UpdateWorkspaceTool>(arguments, client).await
            }
            DeleteWorkspaceTool::NAME => {
                http_handler::<DeleteWorkspaceTool>(arguments, client).await
            }
            ChatTool::NAME => http_handler::<ChatTool>(arguments, client).await,
            GetChatHistoryTool::NAME => http_handler::<GetChatHistoryTool>(arguments, client).await,
            CreateThreadTool::NAME => http_handler::<CreateThreadTool>(arguments, client).await,
            DeleteThreadTool::NAME => http_handler::<DeleteThreadTool>(arguments, client).await,
            ChatInThreadTool::NAME => http_handler::<ChatInThreadTool>(arguments, client).await,
            GetThreadChatsTool::NAME => http_handler::<GetThreadChatsTool>(arguments, client).await,
            ListDocumentsTool::NAME => http_handler::<ListDocumentsTool>(arguments, client).await,
            GetAcceptedFileTypesTool::NAME => {
                http_handler::<GetAcceptedFileTypesTool>(arguments, client).await
            }
            UploadLinkTool::NAME => http_handler::<UploadLinkTool>(arguments, client).await,
            UploadRawTextTool::NAME => http_handler::<UploadRawTextTool>(arguments, client).await,
            UpdateEmbeddingsTool::NAME => {
                http_handler::<UpdateEmbeddingsTool>(arguments, client).await
            }
            SearchTool::NAME => http_handler::<SearchTool>(arguments, client).await,
            GetSystemSettingsTool::NAME => {
                http_handler::<GetSystemSettingsTool>(arguments, client).await
            }
            GetVectorCountTool::NAME => http_handler::<GetVectorCountTool>(arguments, client).await,
            ExportChatsTool::NAME => http_handler::<ExportChatsTool>(arguments, client).await,
            ListEmbedsTool::NAME => http_handler::<ListEmbedsTool>(arguments, client).await,
            ListModelsTool::NAME => http_handler::<ListModelsTool>(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
