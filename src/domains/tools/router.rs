//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::*;
use super::handlers::create_route;
use crate::core::api::ApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<CheckAuthTool, S>(client.clone()))
        .with_route(create_route::<ListWorkspacesTool, S>(client.clone()))
        .with_route(create_route::<GetWorkspaceTool, S>(client.clone()))
        .with_route(create_route::<CreateWorkspaceTool, S>(client.clone()))
        .with_route(create_route::<UpdateWorkspaceTool, S>(client.clone()))
        .with_route(create_route::<DeleteWorkspaceTool, S>(client.clone()))
        .with_route(create_route::<ChatTool, S>(client.clone()))
        .with_route(create_route::<GetChatHistoryTool, S>(client.clone()))
        .with_route(create_route::<CreateThreadTool, S>(client.clone()))
        .with_route(create_route::<DeleteThreadTool, S>(client.clone()))
        .with_route(create_route::<ChatInThreadTool, S>(client.clone()))
        .with_route(create_route::<GetThreadChatsTool, S>(client.clone()))
        .with_route(create_route::<ListDocumentsTool, S>(client.clone()))
        .with_route(create_route::<GetAcceptedFileTypesTool, S>(client.clone()))
        .with_route(create_route::<UploadLinkTool, S>(client.clone()))
        .with_route(create_route::<UploadRawTextTool, S>(client.clone()))
        .with_route(create_route::<UpdateEmbeddingsTool, S>(client.clone()))
        .with_route(create_route::<SearchTool, S>(client.clone()))
        .with_route(create_route::<GetSystemSettingsTool, S>(client.clone()))
        .with_route(create_route::<GetVectorCountTool, S>(client.clone()))
        .with_route(create_route::<ExportChatsTool, S>(client.clone()))
        .with_route(create_route::<ListEmbedsTool, S>(client.clone()))
        .with_route(create_route::<ListModelsTool, S>(client))
}
